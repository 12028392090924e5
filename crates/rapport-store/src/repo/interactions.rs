use crate::events::StoreEvent;
use crate::query::search_interactions;
use crate::repo::contacts::ContactUpdate;
use crate::Store;
use rapport_core::domain::{ContactId, Interaction, InteractionId, InteractionKind, Outcome};
use rapport_core::dto::InteractionListItemDto;
use rapport_core::filter::InteractionFilter;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct InteractionNew {
    pub contact_id: ContactId,
    pub kind: InteractionKind,
    pub subject: String,
    pub description: String,
    pub outcome: Outcome,
}

impl InteractionNew {
    pub fn new(contact_id: ContactId, subject: impl Into<String>) -> Self {
        Self {
            contact_id,
            subject: subject.into(),
            ..Self::default()
        }
    }
}

pub struct InteractionsRepo<'a> {
    store: &'a Store,
}

impl<'a> InteractionsRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Interaction> {
        self.store.state().interactions.clone()
    }

    pub fn count(&self) -> usize {
        self.store.state().interactions.len()
    }

    pub fn get(&self, id: &InteractionId) -> Option<Interaction> {
        self.store
            .state()
            .interactions
            .iter()
            .find(|interaction| &interaction.id == id)
            .cloned()
    }

    /// Interactions for one contact in insertion order, not date order.
    pub fn list_for_contact(&self, contact_id: &ContactId) -> Vec<Interaction> {
        self.store
            .state()
            .interactions
            .iter()
            .filter(|interaction| &interaction.contact_id == contact_id)
            .cloned()
            .collect()
    }

    pub fn search(&self, filter: &InteractionFilter) -> Vec<InteractionListItemDto> {
        search_interactions(&self.store.state(), filter)
    }

    /// Records the interaction dated `now_utc` and moves the parent's
    /// `last_contact` to the same instant. A `contact_id` that matches no
    /// contact is stored as-is; the parent update is then a no-op.
    pub fn add(&self, now_utc: i64, input: InteractionNew) -> Interaction {
        let interaction = Interaction {
            id: InteractionId::new(),
            contact_id: input.contact_id,
            kind: input.kind,
            subject: input.subject,
            description: input.description,
            outcome: input.outcome,
            date: now_utc,
        };

        let parent_updated = {
            let mut state = self.store.state_mut();
            assert!(
                !state
                    .interactions
                    .iter()
                    .any(|existing| existing.id == interaction.id),
                "duplicate interaction id {}",
                interaction.id
            );
            state.interactions.push(interaction.clone());
            match state
                .contacts
                .iter_mut()
                .find(|contact| contact.id == interaction.contact_id)
            {
                Some(contact) => {
                    ContactUpdate::last_contact(now_utc).apply(contact);
                    true
                }
                None => false,
            }
        };

        if parent_updated {
            debug!(
                interaction_id = %interaction.id,
                contact_id = %interaction.contact_id,
                "interaction added"
            );
        } else {
            debug!(
                interaction_id = %interaction.id,
                contact_id = %interaction.contact_id,
                "interaction added for unknown contact"
            );
        }

        self.store.emit(StoreEvent::InteractionAdded {
            id: interaction.id.clone(),
            contact_id: interaction.contact_id.clone(),
        });
        if parent_updated {
            self.store
                .emit(StoreEvent::ContactUpdated(interaction.contact_id.clone()));
        }
        interaction
    }
}
