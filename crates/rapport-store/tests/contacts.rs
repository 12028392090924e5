use rapport_core::domain::{ContactId, ContactStatus, Priority, DEFAULT_AVATAR_URL};
use rapport_core::filter::parse_contact_filter;
use rapport_store::error::StoreError;
use rapport_store::repo::{ContactNew, ContactUpdate, InteractionNew};
use rapport_store::{Store, StoreOptions};
use std::collections::HashSet;

#[test]
fn seed_data_is_loaded_once() {
    let store = Store::new();
    let contacts = store.contacts().list();
    assert_eq!(contacts.len(), 3);
    assert_eq!(store.interactions().count(), 3);
    let ids: Vec<&str> = contacts.iter().map(|contact| contact.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(Store::empty().contacts().list().is_empty());
}

#[test]
fn add_contact_applies_defaults() {
    let store = Store::empty();
    let now = 1_700_000_000;

    let contact = store
        .contacts()
        .add(now, ContactNew::new("Ada Lovelace", "ada@example.com"));

    assert_eq!(contact.name, "Ada Lovelace");
    assert_eq!(contact.status, ContactStatus::Active);
    assert_eq!(contact.priority, Priority::Medium);
    assert_eq!(contact.avatar, DEFAULT_AVATAR_URL);
    assert_eq!(contact.created_at, now);
    assert_eq!(contact.last_contact, now);
    assert!(contact.tags.is_empty());
    assert_eq!(store.contacts().get(&contact.id), Some(contact));
}

#[test]
fn add_contact_normalizes_tags_and_keeps_avatar() {
    let store = Store::empty();
    let contact = store.contacts().add(
        1_700_000_000,
        ContactNew {
            tags: "client, tech, ".to_string(),
            avatar: Some("https://example.com/ada.png".to_string()),
            ..ContactNew::new("Ada", "ada@example.com")
        },
    );
    assert_eq!(contact.tags, vec!["client", "tech"]);
    assert_eq!(contact.avatar, "https://example.com/ada.png");
}

#[test]
fn empty_avatar_uses_configured_fallback() {
    let store = Store::with_options(StoreOptions {
        avatar_fallback: "https://example.com/default.png".to_string(),
        seed: false,
    });
    let contact = store.contacts().add(
        0,
        ContactNew {
            avatar: Some("  ".to_string()),
            ..ContactNew::new("Grace", "grace@example.com")
        },
    );
    assert_eq!(contact.avatar, "https://example.com/default.png");
}

#[test]
fn repository_accepts_empty_required_fields() {
    let store = Store::empty();
    let contact = store.contacts().add(0, ContactNew::new("", ""));
    assert_eq!(contact.name, "");
    assert_eq!(store.contacts().count(), 1);
}

#[test]
fn generated_ids_are_unique() {
    let store = Store::new();
    for i in 0..50 {
        store
            .contacts()
            .add(i, ContactNew::new(format!("Contact {i}"), "c@example.com"));
        store
            .interactions()
            .add(i, InteractionNew::new(ContactId::from("1"), "Ping"));
    }

    let contact_ids: HashSet<_> = store
        .contacts()
        .list()
        .into_iter()
        .map(|contact| contact.id)
        .collect();
    assert_eq!(contact_ids.len(), 53);

    let interaction_ids: HashSet<_> = store
        .interactions()
        .list()
        .into_iter()
        .map(|interaction| interaction.id)
        .collect();
    assert_eq!(interaction_ids.len(), 53);
}

#[test]
fn update_changes_only_given_fields() {
    let store = Store::new();
    let id = ContactId::from("2");
    let before = store.contacts().get(&id).expect("seed contact");

    let updated = store
        .contacts()
        .update(
            &id,
            ContactUpdate {
                company: Some("ScaleUp Ltd".to_string()),
                ..ContactUpdate::default()
            },
        )
        .expect("update");

    assert_eq!(updated.company, "ScaleUp Ltd");
    let mut expected = before;
    expected.company = "ScaleUp Ltd".to_string();
    assert_eq!(store.contacts().get(&id), Some(expected));
}

#[test]
fn update_normalizes_tag_text() {
    let store = Store::new();
    let updated = store
        .contacts()
        .update(
            &ContactId::from("1"),
            ContactUpdate {
                tags: Some(" vip ,, client".to_string()),
                ..ContactUpdate::default()
            },
        )
        .expect("update");
    assert_eq!(updated.tags, vec!["vip", "client"]);
}

#[test]
fn update_missing_contact_is_noop() {
    let store = Store::new();
    let before = store.contacts().list();

    let result = store.contacts().update(
        &ContactId::from("missing"),
        ContactUpdate {
            name: Some("Nobody".to_string()),
            ..ContactUpdate::default()
        },
    );

    assert!(result.is_none());
    assert_eq!(store.contacts().list(), before);
}

#[test]
fn delete_cascades_to_interactions() {
    let store = Store::new();
    let target = ContactId::from("1");
    let other = ContactId::from("2");
    store
        .interactions()
        .add(100, InteractionNew::new(target.clone(), "Follow-up"));
    store
        .interactions()
        .add(200, InteractionNew::new(other.clone(), "Check-in"));
    let untouched: Vec<_> = store
        .interactions()
        .list()
        .into_iter()
        .filter(|interaction| interaction.contact_id != target)
        .collect();

    let (removed, removed_interactions) = store.contacts().delete(&target).expect("delete");

    assert_eq!(removed.id, target);
    assert_eq!(removed_interactions, 2);
    assert!(store.contacts().get(&target).is_none());
    assert!(store.interactions().list_for_contact(&target).is_empty());
    assert_eq!(store.interactions().list(), untouched);
    assert_eq!(store.contacts().count(), 2);
}

#[test]
fn delete_missing_contact_is_noop() {
    let store = Store::new();
    store
        .interactions()
        .add(100, InteractionNew::new(ContactId::from("ghost"), "Dangling"));
    let contacts = store.contacts().list();
    let interactions = store.interactions().list();

    assert!(store.contacts().delete(&ContactId::from("ghost")).is_none());

    assert_eq!(store.contacts().list(), contacts);
    assert_eq!(store.interactions().list(), interactions);
}

#[test]
fn search_sarah_matches_one_contact() {
    let store = Store::new();
    let filter = parse_contact_filter("sarah").expect("filter");
    let found = store.contacts().search(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Sarah Johnson");
}

#[test]
fn search_matches_email_and_company_with_status() {
    let store = Store::new();
    store
        .contacts()
        .update(
            &ContactId::from("3"),
            ContactUpdate {
                status: Some(ContactStatus::Inactive),
                ..ContactUpdate::default()
            },
        )
        .expect("update");

    let by_email = parse_contact_filter("STARTUP.COM").expect("filter");
    assert_eq!(store.contacts().search(&by_email)[0].name, "Michael Chen");

    let inactive = parse_contact_filter("design status:inactive").expect("filter");
    let found = store.contacts().search(&inactive);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Emily Rodriguez");

    let active = parse_contact_filter("status:active").expect("filter");
    let names: Vec<String> = store
        .contacts()
        .search(&active)
        .into_iter()
        .map(|contact| contact.name)
        .collect();
    assert_eq!(names, vec!["Sarah Johnson", "Michael Chen"]);
}

#[test]
fn detail_lists_interactions_in_insertion_order() {
    let store = Store::new();
    let id = ContactId::from("1");
    store
        .interactions()
        .add(50, InteractionNew::new(id.clone(), "Older date, added later"));

    let detail = store.contacts().detail(&id).expect("detail");
    let subjects: Vec<&str> = detail
        .interactions
        .iter()
        .map(|interaction| interaction.subject.as_str())
        .collect();
    assert_eq!(subjects, vec!["Project Update", "Older date, added later"]);
    assert_eq!(
        store.contacts().detail(&ContactId::from("nope")).unwrap_err(),
        StoreError::ContactNotFound("nope".to_string())
    );
}
