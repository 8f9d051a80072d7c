use serde_json::Value;

use crate::{ErrorKind, PollError};

/// Extracts the newest homework record from a raw status payload.
///
/// The record itself is not inspected here; [`crate::parse_status`] does that.
pub fn check_response(response: &Value) -> Result<Value, PollError> {
    let Some(payload) = response.as_object() else {
        return Err(PollError::new(
            ErrorKind::DataType,
            format!("response is {}, expected an object", json_type(response)),
        ));
    };

    if let Some(code) = payload.get("code") {
        let code = display_value(code);
        let message = match payload.get("error") {
            Some(detail) => format!("service answered with code {code}: {detail}"),
            None => format!("service answered with code {code}"),
        };
        return Err(PollError::new(ErrorKind::Service { code }, message));
    }

    let Some(homeworks) = payload.get("homeworks") else {
        return Err(PollError::new(
            ErrorKind::Content,
            "response has no homeworks key",
        ));
    };

    let Some(homeworks) = homeworks.as_array() else {
        return Err(PollError::new(
            ErrorKind::DataType,
            format!("homeworks is {}, expected an array", json_type(homeworks)),
        ));
    };

    homeworks
        .first()
        .cloned()
        .ok_or_else(|| PollError::new(ErrorKind::EmptyList, "no homework updates since cursor"))
}

/// Reads the server-provided cursor for the next poll, if the payload carries one.
pub fn next_cursor(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strings render without quotes; everything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
