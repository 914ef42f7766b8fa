//! Employee records: the accounts a tenant admin manages.
//!
//! `project_ids` is the allow-list that limits what a foreman sees. Admins
//! see every object; the list is meaningless for them and the employee form
//! clears it whenever the role leaves foreman.

use serde::{Deserialize, Serialize};

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    #[serde(default)]
    pub project_ids: Vec<i64>,
}

impl Employee {
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Creation payload; the password is only ever sent here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub project_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub project_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_from_backend_json() {
        let e: Employee = serde_json::from_str(
            r#"{
                "id": 8,
                "username": "sidorov",
                "full_name": "Pavel Sidorov",
                "role": "foreman",
                "is_active": true,
                "project_ids": [3, 11]
            }"#,
        )
        .unwrap();
        assert_eq!(e.display_name(), "Pavel Sidorov");
        assert_eq!(e.project_ids, vec![3, 11]);
    }

    #[test]
    fn test_missing_project_ids_read_as_empty() {
        let e: Employee = serde_json::from_str(
            r#"{"id": 1, "username": "adm", "role": "admin", "is_active": true}"#,
        )
        .unwrap();
        assert!(e.project_ids.is_empty());
    }

    #[test]
    fn test_update_payload_has_no_password() {
        let update = EmployeeUpdate {
            full_name: None,
            role: Role::Admin,
            is_active: true,
            project_ids: Vec::new(),
        };
        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("username"));
    }
}
