mod ast;
mod parser;

use thiserror::Error;

pub use ast::{ContactFilter, InteractionFilter};
pub use parser::{parse_contact_filter, parse_interaction_filter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("invalid status selector: {0}")]
    InvalidStatusSelector(String),
    #[error("invalid type selector: {0}")]
    InvalidTypeSelector(String),
    #[error("selector given more than once: {0}")]
    DuplicateSelector(&'static str),
}
