//! # Subscription record and the plan-limit gate
//!
//! Everything here is pure arithmetic over the record the backend returns;
//! `now` is always injected so the classification can be tested and is
//! recomputed on every call, with no cached derived state anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Basic,
    Pro,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Plan::Free, Plan::Basic, Plan::Pro, Plan::Enterprise];

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Basic => "Basic",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Basic => "basic",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Per-plan ceilings. The table itself lives with the caller (the app ships
/// [`default_plan_limits`]) so the gate stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_projects: u32,
    pub max_users: u32,
    pub max_storage_mb: u32,
}

pub fn default_plan_limits(plan: Plan) -> PlanLimits {
    match plan {
        Plan::Free => PlanLimits {
            max_projects: 1,
            max_users: 3,
            max_storage_mb: 100,
        },
        Plan::Basic => PlanLimits {
            max_projects: 5,
            max_users: 10,
            max_storage_mb: 1_000,
        },
        Plan::Pro => PlanLimits {
            max_projects: 25,
            max_users: 50,
            max_storage_mb: 10_000,
        },
        Plan::Enterprise => PlanLimits {
            max_projects: u32::MAX,
            max_users: u32::MAX,
            max_storage_mb: 100_000,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: Plan,
    pub is_paid: bool,
    #[serde(default)]
    pub paid_until: Option<DateTime<Utc>>,
}

impl Subscription {
    /// An unpaid flag always classifies as expired; a missing end date never
    /// expires; the boundary instant still counts as paid.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.is_paid && self.paid_until.map_or(true, |until| until >= now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_active(now)
    }

    /// Whole days until the paid period ends. Negative once past the end
    /// date; `None` when the subscription has no end date at all.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.paid_until.map(|until| (until - now).num_days())
    }
}

/// Whether the org may create one more project on its current plan.
pub fn can_add_project(
    subscription: &Subscription,
    project_count: u32,
    limits: impl Fn(Plan) -> PlanLimits,
) -> bool {
    project_count < limits(subscription.plan).max_projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn sub(plan: Plan, is_paid: bool, paid_until: Option<DateTime<Utc>>) -> Subscription {
        Subscription {
            plan,
            is_paid,
            paid_until,
        }
    }

    #[test]
    fn test_unpaid_is_always_expired() {
        let future = now() + chrono::Duration::days(30);
        assert!(sub(Plan::Pro, false, Some(future)).is_expired(now()));
        assert!(sub(Plan::Pro, false, None).is_expired(now()));
    }

    #[test]
    fn test_paid_with_past_end_date_is_expired() {
        let past = now() - chrono::Duration::days(1);
        assert!(sub(Plan::Basic, true, Some(past)).is_expired(now()));
    }

    #[test]
    fn test_paid_with_no_or_future_end_date_is_active() {
        let future = now() + chrono::Duration::days(1);
        assert!(sub(Plan::Basic, true, None).is_active(now()));
        assert!(sub(Plan::Basic, true, Some(future)).is_active(now()));
    }

    #[test]
    fn test_boundary_instant_counts_as_paid() {
        assert!(sub(Plan::Basic, true, Some(now())).is_active(now()));
    }

    #[test]
    fn test_expired_is_exact_negation() {
        let cases = [
            sub(Plan::Free, false, None),
            sub(Plan::Pro, true, None),
            sub(Plan::Pro, true, Some(now() - chrono::Duration::days(9))),
            sub(Plan::Pro, true, Some(now() + chrono::Duration::days(9))),
        ];
        for s in cases {
            assert_ne!(s.is_active(now()), s.is_expired(now()));
        }
    }

    #[test]
    fn test_remaining_days() {
        assert_eq!(sub(Plan::Pro, true, None).remaining_days(now()), None);

        let s = sub(Plan::Pro, true, Some(now() + chrono::Duration::days(10)));
        assert_eq!(s.remaining_days(now()), Some(10));

        // Partial days round toward zero
        let s = sub(
            Plan::Pro,
            true,
            Some(now() + chrono::Duration::hours(36)),
        );
        assert_eq!(s.remaining_days(now()), Some(1));

        let s = sub(Plan::Pro, true, Some(now() - chrono::Duration::days(3)));
        assert_eq!(s.remaining_days(now()), Some(-3));
    }

    #[test]
    fn test_free_plan_at_limit_blocks_creation() {
        let s = sub(Plan::Free, false, None);
        assert!(can_add_project(&s, 0, default_plan_limits));
        assert!(!can_add_project(&s, 1, default_plan_limits));
        assert!(!can_add_project(&s, 5, default_plan_limits));
    }

    #[test]
    fn test_gate_uses_supplied_table_not_a_builtin() {
        let s = sub(Plan::Free, true, None);
        let generous = |_: Plan| PlanLimits {
            max_projects: 100,
            max_users: 1,
            max_storage_mb: 1,
        };
        assert!(can_add_project(&s, 99, generous));
        assert!(!can_add_project(&s, 100, generous));
    }

    #[test]
    fn test_subscription_wire_shape() {
        let s: Subscription = serde_json::from_str(
            r#"{"plan": "pro", "is_paid": true, "paid_until": "2024-12-31T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(s.plan, Plan::Pro);
        assert!(s.paid_until.is_some());

        let s: Subscription =
            serde_json::from_str(r#"{"plan": "free", "is_paid": false}"#).unwrap();
        assert!(s.paid_until.is_none());
    }
}
