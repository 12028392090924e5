pub mod contact;
pub mod ids;
pub mod interaction;
pub mod tag;

pub use contact::{Contact, ContactStatus, Priority, DEFAULT_AVATAR_URL};
pub use ids::{ContactId, InteractionId};
pub use interaction::{Interaction, InteractionKind, Outcome};
pub use tag::{format_tag_list, parse_tag_list};
