//! Session state machine and status log

pub mod log;
pub mod state;

// Re-export for convenience
pub use log::{random_status_line, StatusLog, CANCEL_NOTICE, STATUS_LINES};
pub use state::{Action, Phase, Session, SessionView, PROGRESS_CAP, PROGRESS_STEP};
