//! # Portal (tenant) records for the super-admin console
//!
//! A portal is one customer organisation: its status, subscription
//! sub-record, resource limits, and a user count for the console table.
//! [`PortalUpdate`] carries the parts the console may change; status moves
//! only through the block/unblock/delete endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Subscription;

/// Stored per-portal ceilings, editable from the console. Distinct from
/// [`crate::models::PlanLimits`], the client-side plan table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalLimits {
    pub max_users: u32,
    pub max_storage_mb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalStatus {
    Active,
    Blocked,
    Deleted,
}

impl PortalStatus {
    pub const ALL: [PortalStatus; 3] = [
        PortalStatus::Active,
        PortalStatus::Blocked,
        PortalStatus::Deleted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortalStatus::Active => "Active",
            PortalStatus::Blocked => "Blocked",
            PortalStatus::Deleted => "Deleted",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortalStatus::Active => "active",
            PortalStatus::Blocked => "blocked",
            PortalStatus::Deleted => "deleted",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub id: i64,
    pub name: String,
    pub owner_email: String,
    pub status: PortalStatus,
    pub subscription: Subscription,
    pub limits: PortalLimits,
    pub users_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields the console's edit form submits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalUpdate {
    pub subscription: Subscription,
    pub limits: PortalLimits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plan;

    #[test]
    fn test_portal_from_backend_json() {
        let p: Portal = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "StroyMontazh",
                "owner_email": "boss@stroymontazh.ru",
                "status": "active",
                "subscription": {"plan": "basic", "is_paid": true, "paid_until": "2024-09-01T00:00:00Z"},
                "limits": {"max_users": 10, "max_storage_mb": 1000},
                "users_count": 7,
                "created_at": "2023-11-20T08:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(p.status, PortalStatus::Active);
        assert_eq!(p.subscription.plan, Plan::Basic);
        assert_eq!(p.limits.max_users, 10);
        assert_eq!(p.users_count, 7);
    }

    #[test]
    fn test_update_payload_shape() {
        let update = PortalUpdate {
            subscription: Subscription {
                plan: Plan::Pro,
                is_paid: true,
                paid_until: None,
            },
            limits: PortalLimits {
                max_users: 50,
                max_storage_mb: 10_000,
            },
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["subscription"]["plan"], "pro");
        assert_eq!(value["limits"]["max_users"], 50);
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("status"));
        assert!(!obj.contains_key("users_count"));
    }

    #[test]
    fn test_status_strings() {
        for status in PortalStatus::ALL {
            assert_eq!(PortalStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(PortalStatus::from_str("suspended"), None);
    }
}
