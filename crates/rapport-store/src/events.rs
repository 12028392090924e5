use rapport_core::domain::{ContactId, InteractionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Emitted after a mutation has been applied. No-op mutations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ContactAdded(ContactId),
    ContactUpdated(ContactId),
    ContactDeleted {
        id: ContactId,
        removed_interactions: usize,
    },
    InteractionAdded {
        id: InteractionId,
        contact_id: ContactId,
    },
}
