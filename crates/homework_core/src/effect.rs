pub const STATUS_UNCHANGED: &str = "Статус работы не изменился";
const FAILURE_PREFIX: &str = "Сбой в работе программы";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    StatusChanged,
    Unchanged,
    Failure,
}

/// Text to deliver to the chat, tagged with why it is being sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn status_changed(text: String) -> Self {
        Self {
            kind: NoticeKind::StatusChanged,
            text,
        }
    }

    pub fn unchanged() -> Self {
        Self {
            kind: NoticeKind::Unchanged,
            text: STATUS_UNCHANGED.to_string(),
        }
    }

    pub fn failure(error: &crate::PollError) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: format!("{FAILURE_PREFIX}: {error}"),
        }
    }
}
