pub mod error;
pub mod events;
pub(crate) mod query;
pub mod repo;
pub mod seed;

use chrono::TimeZone;
use rapport_core::domain::{Contact, Interaction, DEFAULT_AVATAR_URL};
use rapport_core::dto::{AnalyticsDto, ContactListItemDto, DashboardDto};
use rapport_core::rules::{count_active, summarize};
use std::cell::{Cell, RefCell};

pub use events::{StoreEvent, SubscriptionId};

#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Assigned to new contacts that arrive without an avatar URL.
    pub avatar_fallback: String,
    pub seed: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            avatar_fallback: DEFAULT_AVATAR_URL.to_string(),
            seed: true,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) contacts: Vec<Contact>,
    pub(crate) interactions: Vec<Interaction>,
}

type Listener = Box<dyn Fn(&StoreEvent)>;

/// Sole owner of the contact and interaction collections.
///
/// Single-threaded: every mutation completes under one borrow of the state
/// before listeners run, so no reader can observe a half-applied change.
pub struct Store {
    state: RefCell<State>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    avatar_fallback: String,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Repository populated with the sample contacts and interactions.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn empty() -> Self {
        Self::with_options(StoreOptions {
            seed: false,
            ..StoreOptions::default()
        })
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let state = if options.seed {
            State {
                contacts: seed::sample_contacts(),
                interactions: seed::sample_interactions(),
            }
        } else {
            State::default()
        };
        tracing::debug!(
            contacts = state.contacts.len(),
            interactions = state.interactions.len(),
            "store initialized"
        );

        Self {
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(1),
            avatar_fallback: options.avatar_fallback,
        }
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(self)
    }

    pub fn interactions(&self) -> repo::InteractionsRepo<'_> {
        repo::InteractionsRepo::new(self)
    }

    pub fn avatar_fallback(&self) -> &str {
        &self.avatar_fallback
    }

    /// Registers a change listener. Listeners run after each applied
    /// mutation and may read the store; they must not subscribe or
    /// unsubscribe from inside the callback.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Aggregates over both collections. Calendar days and months are read
    /// in `tz`.
    pub fn analytics<Tz: TimeZone>(
        &self,
        now_utc: i64,
        tz: &Tz,
        window_days: u32,
    ) -> AnalyticsDto {
        let state = self.state.borrow();
        summarize(
            &state.contacts,
            &state.interactions,
            now_utc,
            tz,
            window_days,
        )
    }

    /// Headline counts plus the first `limit` records of each collection,
    /// in collection order.
    pub fn dashboard(&self, limit: usize) -> DashboardDto {
        let state = self.state.borrow();
        DashboardDto {
            total_contacts: state.contacts.len(),
            active_contacts: count_active(&state.contacts),
            total_interactions: state.interactions.len(),
            recent_contacts: state
                .contacts
                .iter()
                .take(limit)
                .map(ContactListItemDto::from)
                .collect(),
            recent_interactions: state
                .interactions
                .iter()
                .take(limit)
                .map(|interaction| query::list_item(&state, interaction))
                .collect(),
        }
    }

    pub(crate) fn state(&self) -> std::cell::Ref<'_, State> {
        self.state.borrow()
    }

    pub(crate) fn state_mut(&self) -> std::cell::RefMut<'_, State> {
        self.state.borrow_mut()
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        tracing::trace!(?event, "store event");
        for (_, listener) in self.listeners.borrow().iter() {
            listener(&event);
        }
    }
}
