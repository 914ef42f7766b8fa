mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod objects;
pub use objects::ObjectsView;

mod object_form;
pub use object_form::ObjectFormView;

mod object_overview;
pub use object_overview::ObjectOverviewView;

mod finance;
pub use finance::FinanceView;

mod payouts;
pub use payouts::PayoutsView;

mod employees;
pub use employees::EmployeesView;

mod employee_form;
pub use employee_form::EmployeeFormView;

mod profile;
pub use profile::ProfileView;

mod portals;
pub use portals::PortalsView;

mod portal_edit;
pub use portal_edit::PortalEditView;
