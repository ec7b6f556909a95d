use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl Employee {
    /// Admin accounts never show up in staff listings.
    pub fn is_listed(&self) -> bool {
        self.role != Role::Admin
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, email: &str, role: Role) -> Employee {
        Employee {
            id: "e1".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: Some("Engineering".to_string()),
            position: Some("Developer".to_string()),
            salary: Some(4200.0),
            created_at: None,
        }
    }

    #[test]
    fn test_admin_accounts_are_hidden() {
        assert!(employee("Ada", "ada@corp.test", Role::Employee).is_listed());
        assert!(!employee("Root", "root@corp.test", Role::Admin).is_listed());
    }

    #[test]
    fn test_matches_name_and_email_case_insensitive() {
        let e = employee("Ada Lovelace", "ada@corp.test", Role::Employee);
        assert!(e.matches("ada"));
        assert!(e.matches("LOVE"));
        assert!(e.matches("corp.test"));
        assert!(!e.matches("babbage"));
    }
}
