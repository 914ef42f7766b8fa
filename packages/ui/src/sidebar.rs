//! Left navigation.
//!
//! Which entries show up depends on the viewer's role and on whether an
//! object is in focus. The list itself is computed by [`nav_items`] so the
//! gating stays testable outside a renderer.

use api::Role;
use dioxus::prelude::*;

use crate::auth::use_auth;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Objects,
    Overview,
    Finance,
    Payouts,
    Employees,
    Portals,
    Profile,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Objects => "Objects",
            NavItem::Overview => "Overview",
            NavItem::Finance => "Finance",
            NavItem::Payouts => "Payouts",
            NavItem::Employees => "Employees",
            NavItem::Portals => "Portals",
            NavItem::Profile => "Profile",
        }
    }
}

/// Entries for the given viewer. Object-scoped entries only exist while an
/// object is in focus; employees are an admin concern; the portal console
/// is super admin only.
pub fn nav_items(role: Role, has_current_object: bool) -> Vec<NavItem> {
    let mut items = vec![NavItem::Objects];
    if has_current_object {
        items.extend([NavItem::Overview, NavItem::Finance, NavItem::Payouts]);
    }
    if role.is_admin() || role.is_super_admin() {
        items.push(NavItem::Employees);
    }
    if role.is_super_admin() {
        items.push(NavItem::Portals);
    }
    items.push(NavItem::Profile);
    items
}

#[component]
pub fn Sidebar(
    current_object: Option<i64>,
    active: NavItem,
    on_navigate: EventHandler<NavItem>,
) -> Element {
    let auth = use_auth();

    let Some(user) = auth().user else {
        return rsx! {};
    };
    let items = nav_items(user.role, current_object.is_some());

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        nav {
            class: "sidebar",
            for item in items {
                button {
                    key: "{item.label()}",
                    class: if item == active { "sidebar-item active" } else { "sidebar-item" },
                    onclick: move |_| on_navigate.call(item),
                    "{item.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreman_with_object_sees_work_pages_only() {
        let items = nav_items(Role::Foreman, true);
        assert_eq!(
            items,
            vec![
                NavItem::Objects,
                NavItem::Overview,
                NavItem::Finance,
                NavItem::Payouts,
                NavItem::Profile,
            ]
        );
    }

    #[test]
    fn no_object_in_focus_hides_scoped_pages() {
        let items = nav_items(Role::Admin, false);
        assert_eq!(
            items,
            vec![NavItem::Objects, NavItem::Employees, NavItem::Profile]
        );
    }

    #[test]
    fn admin_gets_employees_super_admin_gets_portals() {
        assert!(nav_items(Role::Admin, true).contains(&NavItem::Employees));
        assert!(!nav_items(Role::Admin, true).contains(&NavItem::Portals));
        assert!(!nav_items(Role::Foreman, true).contains(&NavItem::Employees));

        let su = nav_items(Role::SuperAdmin, false);
        assert!(su.contains(&NavItem::Employees));
        assert!(su.contains(&NavItem::Portals));
    }
}
