use serde_json::Value;

use crate::validate::{display_value, json_type};
use crate::{ErrorKind, PollError, ReviewStatus};

/// Renders the notification for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let Some(record) = homework.as_object() else {
        return Err(PollError::new(
            ErrorKind::DataType,
            format!("homework is {}, expected an object", json_type(homework)),
        ));
    };

    let raw_status = record.get("status");
    let known = raw_status
        .and_then(Value::as_str)
        .and_then(ReviewStatus::from_code);
    let Some(status) = known else {
        let status = raw_status.map_or_else(|| "null".to_string(), display_value);
        let message = format!("homework status {status} has no verdict");
        return Err(PollError::new(ErrorKind::UnknownStatus { status }, message));
    };

    let name = match record.get("homework_name") {
        None | Some(Value::Null) => {
            return Err(PollError::new(
                ErrorKind::Content,
                "homework has no homework_name",
            ));
        }
        Some(name) => display_value(name),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
