pub mod contacts;
pub mod interactions;

pub use contacts::{ContactNew, ContactUpdate, ContactsRepo};
pub use interactions::{InteractionNew, InteractionsRepo};
