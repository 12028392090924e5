use crate::State;
use rapport_core::domain::{Contact, ContactId, Interaction};
use rapport_core::dto::InteractionListItemDto;
use rapport_core::filter::{ContactFilter, InteractionFilter};

pub(crate) fn contact_name<'s>(state: &'s State, id: &ContactId) -> Option<&'s str> {
    state
        .contacts
        .iter()
        .find(|contact| &contact.id == id)
        .map(|contact| contact.name.as_str())
}

pub(crate) fn list_item(state: &State, interaction: &Interaction) -> InteractionListItemDto {
    InteractionListItemDto::new(interaction, contact_name(state, &interaction.contact_id))
}

/// Matching contacts in collection order.
pub(crate) fn search_contacts(state: &State, filter: &ContactFilter) -> Vec<Contact> {
    state
        .contacts
        .iter()
        .filter(|contact| filter.matches(contact))
        .cloned()
        .collect()
}

/// Matching interactions, most recent first. Equal dates keep collection
/// order.
pub(crate) fn search_interactions(
    state: &State,
    filter: &InteractionFilter,
) -> Vec<InteractionListItemDto> {
    let mut items: Vec<InteractionListItemDto> = state
        .interactions
        .iter()
        .filter_map(|interaction| {
            let name = contact_name(state, &interaction.contact_id);
            filter
                .matches(interaction, name)
                .then(|| InteractionListItemDto::new(interaction, name))
        })
        .collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}
