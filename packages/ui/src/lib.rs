//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{
    make_kv, refresh_objects, use_api, use_objects, use_prefs, use_session, AppKv, ObjectsSignal,
    Prefs, Session,
};

mod auth;
pub use auth::{sign_out, use_auth, AuthProvider, AuthState};

mod subscription;
pub use subscription::{use_subscription, SubscriptionBanner, SubscriptionProvider, SubscriptionState};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{nav_items, NavItem, Sidebar};

mod confirm;
pub use confirm::{ConfirmDialog, DeleteFlow, ModalOverlay};

mod current_object;
pub use current_object::{object_name, resolve_current_object};

pub mod format;

pub mod listing;

mod fields;
