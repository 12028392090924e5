use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid contact status: {0}")]
    InvalidStatus(String),
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
    #[error("invalid interaction type: {0}")]
    InvalidInteractionKind(String),
    #[error("invalid outcome: {0}")]
    InvalidOutcome(String),
    #[error("invalid timeline window: {0} days")]
    InvalidWindowDays(i64),
}
