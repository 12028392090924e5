use crate::domain::{
    Contact, ContactId, ContactStatus, Interaction, InteractionId, InteractionKind, Outcome,
    Priority,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Interaction row as rendered by the interactions view, with the parent
/// contact's name resolved (`None` for a dangling reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionListItemDto {
    pub id: InteractionId,
    pub contact_id: ContactId,
    pub contact_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub subject: String,
    pub description: String,
    pub outcome: Outcome,
    pub date: i64,
}

impl InteractionListItemDto {
    pub fn new(interaction: &Interaction, contact_name: Option<&str>) -> Self {
        Self {
            id: interaction.id.clone(),
            contact_id: interaction.contact_id.clone(),
            contact_name: contact_name.map(str::to_string),
            kind: interaction.kind,
            subject: interaction.subject.clone(),
            description: interaction.description.clone(),
            outcome: interaction.outcome,
            date: interaction.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub status: ContactStatus,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub last_contact: i64,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            position: contact.position.clone(),
            status: contact.status,
            priority: contact.priority,
            tags: contact.tags.clone(),
            last_contact: contact.last_contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    pub contact: Contact,
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    pub(crate) fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub email: usize,
    pub call: usize,
    pub meeting: usize,
    pub other: usize,
}

impl KindCounts {
    pub fn get(&self, kind: InteractionKind) -> usize {
        match kind {
            InteractionKind::Email => self.email,
            InteractionKind::Call => self.call,
            InteractionKind::Meeting => self.meeting,
            InteractionKind::Other => self.other,
        }
    }

    pub(crate) fn bump(&mut self, kind: InteractionKind) {
        match kind {
            InteractionKind::Email => self.email += 1,
            InteractionKind::Call => self.call += 1,
            InteractionKind::Meeting => self.meeting += 1,
            InteractionKind::Other => self.other += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsDto {
    pub contacts: usize,
    pub active_contacts: usize,
    pub interactions: usize,
    pub interactions_this_month: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightsDto {
    pub average_interactions_per_contact: f64,
    pub most_common_priority: Option<Priority>,
    pub most_common_type: Option<InteractionKind>,
    pub engagement_rate_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDto {
    pub totals: TotalsDto,
    pub contacts_by_priority: PriorityCounts,
    pub interactions_by_type: KindCounts,
    pub timeline: Vec<DailyCount>,
    pub insights: InsightsDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub total_contacts: usize,
    pub active_contacts: usize,
    pub total_interactions: usize,
    pub recent_contacts: Vec<ContactListItemDto>,
    pub recent_interactions: Vec<InteractionListItemDto>,
}
