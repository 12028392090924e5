use rapport_core::domain::{
    Contact, ContactId, ContactStatus, Interaction, InteractionId, InteractionKind, Outcome,
    Priority,
};

// UTC midnight timestamps for the sample records.
const JAN_05_2024: i64 = 1_704_412_800;
const JAN_10_2024: i64 = 1_704_844_800;
const JAN_15_2024: i64 = 1_705_276_800;
const JAN_18_2024: i64 = 1_705_536_000;
const JAN_19_2024: i64 = 1_705_622_400;
const JAN_20_2024: i64 = 1_705_708_800;

pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: ContactId::from("1"),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            position: "Senior Developer".to_string(),
            tags: vec!["client".to_string(), "tech".to_string()],
            status: ContactStatus::Active,
            priority: Priority::High,
            notes: "Key contact for the mobile app project. Very responsive and technical."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b9ad3b71?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            created_at: JAN_15_2024,
            last_contact: JAN_20_2024,
        },
        Contact {
            id: ContactId::from("2"),
            name: "Michael Chen".to_string(),
            email: "michael.chen@startup.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            company: "StartupXYZ".to_string(),
            position: "CEO".to_string(),
            tags: vec!["prospect".to_string(), "startup".to_string()],
            status: ContactStatus::Active,
            priority: Priority::Medium,
            notes: "Interested in our consulting services. Follow up next week.".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            created_at: JAN_10_2024,
            last_contact: JAN_18_2024,
        },
        Contact {
            id: ContactId::from("3"),
            name: "Emily Rodriguez".to_string(),
            email: "emily@designstudio.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            company: "Creative Design Studio".to_string(),
            position: "Art Director".to_string(),
            tags: vec!["partner".to_string(), "design".to_string()],
            status: ContactStatus::Active,
            priority: Priority::High,
            notes: "Collaborating on the new brand identity project.".to_string(),
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            created_at: JAN_05_2024,
            last_contact: JAN_19_2024,
        },
    ]
}

pub fn sample_interactions() -> Vec<Interaction> {
    vec![
        Interaction {
            id: InteractionId::from("1"),
            contact_id: ContactId::from("1"),
            kind: InteractionKind::Email,
            subject: "Project Update".to_string(),
            description: "Discussed project timeline and deliverables".to_string(),
            outcome: Outcome::Positive,
            date: JAN_20_2024,
        },
        Interaction {
            id: InteractionId::from("2"),
            contact_id: ContactId::from("2"),
            kind: InteractionKind::Call,
            subject: "Initial Consultation".to_string(),
            description: "First call to understand their needs".to_string(),
            outcome: Outcome::Neutral,
            date: JAN_18_2024,
        },
        Interaction {
            id: InteractionId::from("3"),
            contact_id: ContactId::from("3"),
            kind: InteractionKind::Meeting,
            subject: "Design Review".to_string(),
            description: "Reviewed initial design concepts".to_string(),
            outcome: Outcome::Positive,
            date: JAN_19_2024,
        },
    ]
}
