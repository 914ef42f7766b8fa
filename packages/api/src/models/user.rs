//! # User model and roles
//!
//! [`User`] is the authenticated account as `GET /auth/me` returns it.
//! [`Role`] drives what the UI shows: foremen only see the objects on their
//! allow-list and no admin pages, admins manage one tenant, super admins get
//! the portal console on top. All three predicates are plain string-equality
//! checks on the role field; the backend stays authoritative for what a
//! request may actually do.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Foreman,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_foreman(&self) -> bool {
        matches!(self, Role::Foreman)
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Foreman => "Foreman",
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super admin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Foreman => "foreman",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "foreman" => Some(Role::Foreman),
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

impl User {
    /// Display name, falling back to the username when no full name is set.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_foreman(&self) -> bool {
        self.role.is_foreman()
    }

    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}
