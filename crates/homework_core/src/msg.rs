#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The status endpoint answered with a decoded payload.
    ResponseReceived(serde_json::Value),
    /// Fetching failed before a payload was available.
    FetchFailed(crate::PollError),
    /// The notifier delivered the notice of the current cycle.
    NoticeDelivered,
    /// The notifier could not deliver the notice of the current cycle.
    NoticeFailed(crate::PollError),
}
