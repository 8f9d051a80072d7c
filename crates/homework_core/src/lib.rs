//! Homework core: response validation, status formatting and the pure poll state machine.
mod effect;
mod error;
mod format;
mod msg;
mod state;
mod update;
mod validate;
mod verdict;

pub use effect::{Effect, Notice, NoticeKind, STATUS_UNCHANGED};
pub use error::{ErrorKind, PollError};
pub use format::parse_status;
pub use msg::Msg;
pub use state::{CycleOutcome, CycleReport, PollState};
pub use update::update;
pub use validate::{check_response, next_cursor};
pub use verdict::ReviewStatus;
