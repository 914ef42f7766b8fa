//! # API crate: typed REST client for the Prorab backend
//!
//! Everything the frontend knows about the backend lives here: the HTTP
//! client, the JSON models, and one async method per endpoint. The crate is
//! UI-free and compiles natively, so all of its logic is testable without a
//! browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, shared bearer token, JSON verb helpers, error-body unpacking |
//! | [`error`] | [`ApiError`], the flat failure type every call returns |
//! | [`models`] | Records mirroring backend JSON, plus pure subscription/plan arithmetic |
//! | `auth` | `POST /auth/login`, `POST /auth/register`, `GET /auth/me`, profile and password updates |
//! | `projects` | CRUD on `/projects` |
//! | `employees` | CRUD on `/employees` |
//! | `finance` | CRUD on `/cashin` and `/expenses`, filterable by `project_id` |
//! | `payouts` | CRUD on `/payouts` plus the approve/cancel actions |
//! | `portals` | Own-portal lookup and the `/super-admin/portals` console |

pub mod client;
pub mod error;
pub mod models;

mod auth;
mod employees;
mod finance;
mod payouts;
mod portals;
mod projects;

pub use auth::{AuthResponse, ProfileUpdate, RegisterForm};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use models::*;
