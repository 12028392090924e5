use crate::error::{Result, StoreError};
use crate::events::StoreEvent;
use crate::query::search_contacts;
use crate::Store;
use rapport_core::domain::{parse_tag_list, Contact, ContactId, ContactStatus, Priority};
use rapport_core::dto::ContactDetailDto;
use rapport_core::filter::ContactFilter;
use tracing::debug;

/// Input for a new contact. `tags` is raw comma-separated text; `avatar`
/// falls back to the store's placeholder when missing or empty.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub tags: String,
    pub status: ContactStatus,
    pub priority: Priority,
    pub notes: String,
    pub avatar: Option<String>,
}

impl ContactNew {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub tags: Option<String>,
    pub status: Option<ContactStatus>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
    pub avatar: Option<String>,
    pub last_contact: Option<i64>,
}

impl ContactUpdate {
    pub fn last_contact(at: i64) -> Self {
        Self {
            last_contact: Some(at),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(position) = self.position {
            contact.position = position;
        }
        if let Some(tags) = self.tags {
            contact.tags = parse_tag_list(&tags);
        }
        if let Some(status) = self.status {
            contact.status = status;
        }
        if let Some(priority) = self.priority {
            contact.priority = priority;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
        if let Some(avatar) = self.avatar {
            contact.avatar = avatar;
        }
        if let Some(last_contact) = self.last_contact {
            contact.last_contact = last_contact;
        }
    }
}

pub struct ContactsRepo<'a> {
    store: &'a Store,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Contact> {
        self.store.state().contacts.clone()
    }

    pub fn count(&self) -> usize {
        self.store.state().contacts.len()
    }

    pub fn get(&self, id: &ContactId) -> Option<Contact> {
        self.store
            .state()
            .contacts
            .iter()
            .find(|contact| &contact.id == id)
            .cloned()
    }

    pub fn require(&self, id: &ContactId) -> Result<Contact> {
        self.get(id)
            .ok_or_else(|| StoreError::ContactNotFound(id.to_string()))
    }

    /// The contact plus its interactions in insertion order.
    pub fn detail(&self, id: &ContactId) -> Result<ContactDetailDto> {
        let contact = self.require(id)?;
        let interactions = self.store.interactions().list_for_contact(id);
        Ok(ContactDetailDto {
            contact,
            interactions,
        })
    }

    pub fn search(&self, filter: &ContactFilter) -> Vec<Contact> {
        search_contacts(&self.store.state(), filter)
    }

    pub fn add(&self, now_utc: i64, input: ContactNew) -> Contact {
        let avatar = match input.avatar {
            Some(url) if !url.trim().is_empty() => url,
            _ => self.store.avatar_fallback().to_string(),
        };

        let contact = Contact {
            id: ContactId::new(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            position: input.position,
            tags: parse_tag_list(&input.tags),
            status: input.status,
            priority: input.priority,
            notes: input.notes,
            avatar,
            created_at: now_utc,
            last_contact: now_utc,
        };

        {
            let mut state = self.store.state_mut();
            assert!(
                !state.contacts.iter().any(|existing| existing.id == contact.id),
                "duplicate contact id {}",
                contact.id
            );
            state.contacts.push(contact.clone());
        }

        debug!(contact_id = %contact.id, "contact added");
        self.store.emit(StoreEvent::ContactAdded(contact.id.clone()));
        contact
    }

    /// Merges `update` onto the contact. Unknown ids are ignored and
    /// yield `None`.
    pub fn update(&self, id: &ContactId, update: ContactUpdate) -> Option<Contact> {
        let updated = {
            let mut state = self.store.state_mut();
            let contact = state.contacts.iter_mut().find(|contact| &contact.id == id)?;
            update.apply(contact);
            contact.clone()
        };

        debug!(contact_id = %id, "contact updated");
        self.store.emit(StoreEvent::ContactUpdated(id.clone()));
        Some(updated)
    }

    /// Removes the contact and every interaction that references it, and
    /// returns the contact with the number of interactions removed.
    /// Unknown ids leave both collections untouched.
    pub fn delete(&self, id: &ContactId) -> Option<(Contact, usize)> {
        let (removed, removed_interactions) = {
            let mut state = self.store.state_mut();
            let index = state.contacts.iter().position(|contact| &contact.id == id)?;
            let removed = state.contacts.remove(index);
            let before = state.interactions.len();
            state
                .interactions
                .retain(|interaction| &interaction.contact_id != id);
            (removed, before - state.interactions.len())
        };

        debug!(contact_id = %id, removed_interactions, "contact deleted");
        self.store.emit(StoreEvent::ContactDeleted {
            id: id.clone(),
            removed_interactions,
        });
        Some((removed, removed_interactions))
    }
}
