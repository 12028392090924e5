use thiserror::Error;

/// Raised only by lookups that require presence; the repository's own
/// mutations treat unknown ids as no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("contact not found: {0}")]
    ContactNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
