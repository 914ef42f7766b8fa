//! Data models mirroring the backend's JSON shapes.

pub mod dates;

mod employee;
mod finance;
mod payout;
mod portal;
mod project;
mod subscription;
mod user;

pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use finance::{CashIn, CashInPayload, Creator, Expense, ExpenseCategory, ExpensePayload};
pub use payout::{Payout, PayoutPayload, PayoutStatus};
pub use portal::{Portal, PortalLimits, PortalStatus, PortalUpdate};
pub use project::{Project, ProjectPayload, ProjectStatus};
pub use subscription::{can_add_project, default_plan_limits, Plan, PlanLimits, Subscription};
pub use user::{Role, User};
