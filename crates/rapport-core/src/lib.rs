pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{
    parse_contact_filter, parse_interaction_filter, ContactFilter, FilterParseError,
    InteractionFilter,
};
pub use rules::*;
