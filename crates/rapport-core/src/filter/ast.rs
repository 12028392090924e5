use crate::domain::{Contact, ContactStatus, Interaction, InteractionKind};

/// Contacts view filter: free-text search AND an optional status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub text: String,
    pub status: Option<ContactStatus>,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        let needle = self.text.to_lowercase();
        let text_match = contains_folded(&contact.name, &needle)
            || contains_folded(&contact.email, &needle)
            || contains_folded(&contact.company, &needle);
        let status_match = self.status.map_or(true, |status| contact.status == status);
        text_match && status_match
    }
}

/// Interactions view filter: free-text search AND an optional type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionFilter {
    pub text: String,
    pub kind: Option<InteractionKind>,
}

impl InteractionFilter {
    /// `contact_name` is the resolved parent name; `None` when the
    /// interaction points at a contact that no longer exists.
    pub fn matches(&self, interaction: &Interaction, contact_name: Option<&str>) -> bool {
        let needle = self.text.to_lowercase();
        let text_match = contains_folded(&interaction.subject, &needle)
            || contains_folded(&interaction.description, &needle)
            || contact_name.is_some_and(|name| contains_folded(name, &needle));
        let kind_match = self.kind.map_or(true, |kind| interaction.kind == kind);
        text_match && kind_match
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::{ContactFilter, InteractionFilter};
    use crate::domain::{
        Contact, ContactId, ContactStatus, Interaction, InteractionId, InteractionKind, Outcome,
        Priority,
    };

    fn sarah() -> Contact {
        Contact {
            id: ContactId::from("1"),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: String::new(),
            company: "Tech Solutions Inc.".to_string(),
            position: String::new(),
            tags: Vec::new(),
            status: ContactStatus::Active,
            priority: Priority::High,
            notes: "Prefers SMS".to_string(),
            avatar: String::new(),
            created_at: 0,
            last_contact: 0,
        }
    }

    fn review() -> Interaction {
        Interaction {
            id: InteractionId::from("1"),
            contact_id: ContactId::from("1"),
            kind: InteractionKind::Meeting,
            subject: "Design Review".to_string(),
            description: "Reviewed initial concepts".to_string(),
            outcome: Outcome::Positive,
            date: 0,
        }
    }

    #[test]
    fn contact_text_is_case_insensitive() {
        let filter = ContactFilter {
            text: "SOLUTIONS".to_string(),
            status: None,
        };
        assert!(filter.matches(&sarah()));
    }

    #[test]
    fn contact_text_ignores_notes() {
        let filter = ContactFilter {
            text: "sms".to_string(),
            status: None,
        };
        assert!(!filter.matches(&sarah()));
    }

    #[test]
    fn contact_status_is_and_combined() {
        let filter = ContactFilter {
            text: "sarah".to_string(),
            status: Some(ContactStatus::Inactive),
        };
        assert!(!filter.matches(&sarah()));
        assert!(ContactFilter::default().matches(&sarah()));
    }

    #[test]
    fn interaction_matches_contact_name() {
        let filter = InteractionFilter {
            text: "johnson".to_string(),
            kind: None,
        };
        assert!(filter.matches(&review(), Some("Sarah Johnson")));
        assert!(!filter.matches(&review(), None));
    }

    #[test]
    fn interaction_kind_is_and_combined() {
        let filter = InteractionFilter {
            text: "review".to_string(),
            kind: Some(InteractionKind::Call),
        };
        assert!(!filter.matches(&review(), None));
        let filter = InteractionFilter {
            text: String::new(),
            kind: Some(InteractionKind::Meeting),
        };
        assert!(filter.matches(&review(), None));
    }
}
