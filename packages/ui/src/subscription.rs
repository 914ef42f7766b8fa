//! Subscription context and the expiry banner.
//!
//! [`SubscriptionProvider`] fetches the tenant's portal record once per
//! signed-in user and re-fetches when the user changes. There is no
//! background refresh; a stale banner is acceptable until the next full
//! load, a request loop is not.

use api::{Plan, Portal, Subscription};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::services::use_api;

/// Days before expiry at which the warning banner appears.
pub const EXPIRY_WARNING_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionState {
    pub portal: Option<Portal>,
    pub loading: bool,
}

pub fn use_subscription() -> Signal<SubscriptionState> {
    use_context::<Signal<SubscriptionState>>()
}

/// Provides [`SubscriptionState`] as context.
///
/// Super admins have no tenant portal of their own, so nothing is fetched
/// for them and the state stays empty.
#[component]
pub fn SubscriptionProvider(children: Element) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut state = use_signal(SubscriptionState::default);

    let _loader = use_resource(move || {
        let api = api.clone();
        // Reading auth here re-runs the fetch on login and logout.
        let user = auth().user;
        async move {
            let wants_portal = matches!(&user, Some(u) if !u.role.is_super_admin());
            if !wants_portal {
                state.set(SubscriptionState::default());
                return;
            }
            state.set(SubscriptionState {
                portal: None,
                loading: true,
            });
            match api.own_portal().await {
                Ok(portal) => state.set(SubscriptionState {
                    portal: Some(portal),
                    loading: false,
                }),
                Err(err) => {
                    tracing::warn!("portal fetch failed: {err}");
                    state.set(SubscriptionState::default());
                }
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Banner copy for the given subscription, or `None` when nothing needs
/// attention. Free tenants always see the upgrade nudge.
pub fn banner_text(subscription: &Subscription, now: DateTime<Utc>) -> Option<String> {
    if subscription.is_expired(now) {
        return Some(match subscription.plan {
            Plan::Free => "Free plan limits apply. Upgrade to add more objects.".to_string(),
            _ => "Subscription expired. Renew to keep full access.".to_string(),
        });
    }
    match subscription.remaining_days(now) {
        Some(0) => Some("Subscription ends today.".to_string()),
        Some(1) => Some("Subscription ends in 1 day.".to_string()),
        Some(days) if days <= EXPIRY_WARNING_DAYS => {
            Some(format!("Subscription ends in {days} days."))
        }
        _ => None,
    }
}

/// Thin strip under the header. Renders nothing while the portal is
/// unknown or the subscription is in good standing.
#[component]
pub fn SubscriptionBanner() -> Element {
    let sub = use_subscription();

    let state = sub();
    let Some(portal) = state.portal else {
        return rsx! {};
    };
    let now = Utc::now();
    let Some(text) = banner_text(&portal.subscription, now) else {
        return rsx! {};
    };
    let class = if portal.subscription.is_expired(now) {
        "subscription-banner subscription-banner-expired"
    } else {
        "subscription-banner subscription-banner-warning"
    };

    rsx! {
        div { class: "{class}", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn paid_until(days_from_now: i64) -> Subscription {
        Subscription {
            plan: Plan::Pro,
            is_paid: true,
            paid_until: Some(now() + chrono::Duration::days(days_from_now)),
        }
    }

    #[test]
    fn free_tenant_always_sees_upgrade_nudge() {
        let sub = Subscription {
            plan: Plan::Free,
            is_paid: false,
            paid_until: None,
        };
        let text = banner_text(&sub, now()).unwrap();
        assert!(text.contains("Upgrade"));
    }

    #[test]
    fn lapsed_paid_plan_sees_renew_nudge() {
        let text = banner_text(&paid_until(-1), now()).unwrap();
        assert!(text.contains("Renew"));
    }

    #[test]
    fn far_expiry_shows_nothing() {
        assert_eq!(banner_text(&paid_until(30), now()), None);
    }

    #[test]
    fn warning_kicks_in_at_threshold() {
        assert_eq!(banner_text(&paid_until(8), now()), None);
        assert_eq!(
            banner_text(&paid_until(7), now()).unwrap(),
            "Subscription ends in 7 days."
        );
    }

    #[test]
    fn last_day_wording() {
        // Half a day left rounds down to zero whole days.
        let sub = Subscription {
            plan: Plan::Basic,
            is_paid: true,
            paid_until: Some(now() + chrono::Duration::hours(12)),
        };
        assert_eq!(banner_text(&sub, now()).unwrap(), "Subscription ends today.");
        assert_eq!(
            banner_text(&paid_until(1), now()).unwrap(),
            "Subscription ends in 1 day."
        );
    }

    #[test]
    fn open_ended_paid_plan_shows_nothing() {
        let sub = Subscription {
            plan: Plan::Enterprise,
            is_paid: true,
            paid_until: None,
        };
        assert_eq!(banner_text(&sub, now()), None);
    }
}
