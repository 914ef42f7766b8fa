//! # Project ("object") model
//!
//! An object is one construction site being tracked: where it is, who the
//! client is, the contract numbers, and a status that walks
//! new → in_progress → paused → completed/archived. Completed and archived
//! objects collapse into one "archive" group in the selector but stay
//! searchable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    New,
    InProgress,
    Paused,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::New,
        ProjectStatus::InProgress,
        ProjectStatus::Paused,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    /// Completed counts as archived for UI grouping.
    pub fn is_archived(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Archived)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::New => "New",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Paused => "Paused",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Archived => "Archived",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "new",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, with = "dates::compat_opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "dates::compat_opt")]
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub contract_amount: Option<f64>,
    #[serde(default)]
    pub planned_cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Editable fields, sent on create and update. The backend owns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub address: Option<String>,
    pub client: Option<String>,
    #[serde(with = "dates::compat_opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "dates::compat_opt")]
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub contract_amount: Option<f64>,
    pub planned_cost: Option<f64>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archived_grouping() {
        assert!(ProjectStatus::Completed.is_archived());
        assert!(ProjectStatus::Archived.is_archived());
        assert!(!ProjectStatus::New.is_archived());
        assert!(!ProjectStatus::InProgress.is_archived());
        assert!(!ProjectStatus::Paused.is_archived());
    }

    #[test]
    fn test_status_strings_match_wire_format() {
        for status in ProjectStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
            assert_eq!(ProjectStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::from_str("demolished"), None);
    }

    #[test]
    fn test_project_from_backend_json() {
        let p: Project = serde_json::from_str(
            r#"{
                "id": 11,
                "name": "Warehouse on Lenina 5",
                "address": "Lenina 5",
                "client": "OOO Stroyinvest",
                "start_date": "2024-02-01T00:00:00Z",
                "end_date": null,
                "status": "in_progress",
                "contract_amount": 1500000.0,
                "planned_cost": 1100000.5,
                "notes": null
            }"#,
        )
        .unwrap();
        assert_eq!(p.status, ProjectStatus::InProgress);
        assert_eq!(
            p.start_date,
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert!(p.end_date.is_none());
        assert_eq!(p.planned_cost, Some(1_100_000.5));
    }

    #[test]
    fn test_payload_serializes_editable_fields_only() {
        let payload = ProjectPayload {
            name: "Garage".to_string(),
            address: None,
            client: None,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            end_date: None,
            status: ProjectStatus::New,
            contract_amount: Some(200_000.0),
            planned_cost: None,
            notes: Some("two floors".to_string()),
        };
        let value: serde_json::Value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(value["start_date"], "2024-05-10");
        assert_eq!(value["status"], "new");
    }
}
