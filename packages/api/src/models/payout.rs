//! Crew payouts and their small lifecycle: created → approved | cancelled.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Created,
    Approved,
    Cancelled,
}

impl PayoutStatus {
    pub const ALL: [PayoutStatus; 3] = [
        PayoutStatus::Created,
        PayoutStatus::Approved,
        PayoutStatus::Cancelled,
    ];

    /// Approved and cancelled payouts can no longer be edited or re-decided.
    pub fn is_final(&self) -> bool {
        matches!(self, PayoutStatus::Approved | PayoutStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayoutStatus::Created => "Created",
            PayoutStatus::Approved => "Approved",
            PayoutStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Created => "created",
            PayoutStatus::Approved => "approved",
            PayoutStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Payment owed to a contracted crew for work on one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: i64,
    pub project_id: i64,
    pub crew: String,
    pub amount: f64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub status: PayoutStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Editable fields. New payouts always start in `created`; the status only
/// moves through the approve/cancel endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutPayload {
    pub project_id: i64,
    pub crew: String,
    pub amount: f64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_statuses() {
        assert!(!PayoutStatus::Created.is_final());
        assert!(PayoutStatus::Approved.is_final());
        assert!(PayoutStatus::Cancelled.is_final());
    }

    #[test]
    fn test_status_strings() {
        for status in PayoutStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
            assert_eq!(PayoutStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_payload_has_no_status() {
        let payload = PayoutPayload {
            project_id: 3,
            crew: "Brigade 2".to_string(),
            amount: 78000.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            comment: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(!value.as_object().unwrap().contains_key("status"));
    }
}
