use crate::domain::ids::ContactId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Active,
    Inactive,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 2] = [ContactStatus::Active, ContactStatus::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ContactStatus::Active),
            "inactive" => Ok(ContactStatus::Inactive),
            _ => Err(CoreError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(CoreError::InvalidPriority(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub tags: Vec<String>,
    pub status: ContactStatus,
    pub priority: Priority,
    pub notes: String,
    pub avatar: String,
    pub created_at: i64,
    pub last_contact: i64,
}

impl Contact {
    pub fn is_active(&self) -> bool {
        self.status == ContactStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactStatus, Priority};
    use crate::error::CoreError;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ContactStatus>().unwrap(), ContactStatus::Active);
        assert_eq!(
            " inactive ".parse::<ContactStatus>().unwrap(),
            ContactStatus::Inactive
        );
    }

    #[test]
    fn unknown_priority_is_error() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, CoreError::InvalidPriority("urgent".to_string()));
    }

    #[test]
    fn defaults_match_new_contact_form() {
        assert_eq!(ContactStatus::default(), ContactStatus::Active);
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
