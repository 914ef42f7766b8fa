use api::{Employee, EmployeeUpdate, NewEmployee, Role};
use dioxus::prelude::*;

use crate::fields::opt_string;
use crate::services::{use_api, use_objects};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Raw field state behind the employee form.
///
/// Role changes go through [`EmployeeForm::set_role`]: object assignments
/// only mean something for foremen, so leaving the foreman role drops them
/// rather than letting a stale allow-list ride along on the account.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub username: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
    pub project_ids: Vec<i64>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            password: String::new(),
            role: Role::Foreman,
            is_active: true,
            project_ids: Vec::new(),
        }
    }

    pub fn from_employee(e: &Employee) -> Self {
        Self {
            username: e.username.clone(),
            full_name: e.full_name.clone().unwrap_or_default(),
            password: String::new(),
            role: e.role,
            is_active: e.is_active,
            project_ids: e.project_ids.clone(),
        }
    }

    pub fn set_role(&mut self, role: Role) {
        if !role.is_foreman() {
            self.project_ids.clear();
        }
        self.role = role;
    }

    pub fn toggle_project(&mut self, id: i64) {
        if let Some(pos) = self.project_ids.iter().position(|p| *p == id) {
            self.project_ids.remove(pos);
        } else {
            self.project_ids.push(id);
        }
    }

    pub fn validate_new(&self) -> Result<NewEmployee, String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Username is required.".to_string());
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters.".to_string());
        }
        Ok(NewEmployee {
            username: username.to_string(),
            password: self.password.clone(),
            full_name: opt_string(&self.full_name),
            role: self.role,
            project_ids: self.project_ids.clone(),
        })
    }

    pub fn validate_update(&self) -> Result<EmployeeUpdate, String> {
        Ok(EmployeeUpdate {
            full_name: opt_string(&self.full_name),
            role: self.role,
            is_active: self.is_active,
            project_ids: self.project_ids.clone(),
        })
    }
}

/// Create or edit an account. Tenant admins can hand out the foreman and
/// admin roles; the password is set once at creation and changed by the
/// person themselves afterwards.
#[component]
pub fn EmployeeFormView(
    id: Option<i64>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let objects = use_objects();

    let mut form = use_signal(EmployeeForm::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| id.is_some());

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let Some(id) = id else { return };
                match api.get_employee(id).await {
                    Ok(e) => form.set(EmployeeForm::from_employee(&e)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let form_now = form();
        spawn(async move {
            let result = match id {
                Some(id) => match form_now.validate_update() {
                    Ok(update) => {
                        saving.set(true);
                        api.update_employee(id, &update).await.map(|_| ())
                    }
                    Err(msg) => {
                        error.set(Some(msg));
                        return;
                    }
                },
                None => match form_now.validate_new() {
                    Ok(new) => {
                        saving.set(true);
                        api.create_employee(&new).await.map(|_| ())
                    }
                    Err(msg) => {
                        error.set(Some(msg));
                        return;
                    }
                },
            };
            match result {
                Ok(()) => on_saved.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let title = if id.is_some() { "Edit employee" } else { "New employee" };
    let is_foreman = form().role.is_foreman();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page view-page-narrow",
            h1 { class: "view-title", "{title}" }

            if loading() {
                p { class: "view-muted", "Loading..." }
            } else {
                form {
                    class: "form",
                    onsubmit: handle_submit,

                    if let Some(ref msg) = error() {
                        p { class: "form-error", "{msg}" }
                    }

                    if id.is_none() {
                        div {
                            class: "form-field",
                            label { r#for: "emp-username", "Username" }
                            input {
                                id: "emp-username",
                                r#type: "text",
                                autocomplete: "off",
                                value: form().username,
                                oninput: move |evt: FormEvent| form.write().username = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "emp-password", "Password" }
                            input {
                                id: "emp-password",
                                r#type: "password",
                                autocomplete: "new-password",
                                value: form().password,
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                            }
                        }
                    } else {
                        p { class: "view-muted", "Username: {form().username}" }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "emp-full-name", "Full name" }
                        input {
                            id: "emp-full-name",
                            r#type: "text",
                            value: form().full_name,
                            oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "emp-role", "Role" }
                        select {
                            id: "emp-role",
                            onchange: move |evt: FormEvent| {
                                if let Some(role) = Role::from_str(&evt.value()) {
                                    form.write().set_role(role);
                                }
                            },
                            option {
                                value: "foreman",
                                selected: form().role.is_foreman(),
                                "Foreman"
                            }
                            option {
                                value: "admin",
                                selected: form().role.is_admin(),
                                "Admin"
                            }
                        }
                    }

                    if id.is_some() {
                        label {
                            class: "form-check",
                            input {
                                r#type: "checkbox",
                                checked: form().is_active,
                                onchange: move |evt: FormEvent| form.write().is_active = evt.checked(),
                            }
                            "Active"
                        }
                    }

                    if is_foreman {
                        div {
                            class: "form-field",
                            label { "Assigned objects" }
                            div {
                                class: "check-list",
                                for project in objects() {
                                    label {
                                        key: "{project.id}",
                                        class: "form-check",
                                        input {
                                            r#type: "checkbox",
                                            checked: form().project_ids.contains(&project.id),
                                            onchange: move |_| form.write().toggle_project(project.id),
                                        }
                                        "{project.name}"
                                    }
                                }
                            }
                            p {
                                class: "view-muted",
                                "A foreman only sees the objects ticked here."
                            }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreman_with_objects() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.username = "sidorov".to_string();
        form.password = "secret1".to_string();
        form.toggle_project(3);
        form.toggle_project(11);
        form
    }

    #[test]
    fn leaving_foreman_role_drops_assignments() {
        let mut form = foreman_with_objects();
        assert_eq!(form.project_ids, vec![3, 11]);

        form.set_role(Role::Admin);
        assert_eq!(form.role, Role::Admin);
        assert!(form.project_ids.is_empty());
    }

    #[test]
    fn staying_foreman_keeps_assignments() {
        let mut form = foreman_with_objects();
        form.set_role(Role::Foreman);
        assert_eq!(form.project_ids, vec![3, 11]);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut form = EmployeeForm::new();
        form.toggle_project(5);
        assert_eq!(form.project_ids, vec![5]);
        form.toggle_project(5);
        assert!(form.project_ids.is_empty());
    }

    #[test]
    fn new_account_needs_username_and_password() {
        let mut form = EmployeeForm::new();
        form.password = "longenough".to_string();
        assert!(form.validate_new().is_err());

        form.username = "petrov".to_string();
        form.password = "short".to_string();
        assert!(form.validate_new().is_err());

        form.password = "longenough".to_string();
        let new = form.validate_new().unwrap();
        assert_eq!(new.username, "petrov");
        assert_eq!(new.role, Role::Foreman);
    }

    #[test]
    fn update_carries_no_credentials() {
        let form = foreman_with_objects();
        let update = form.validate_update().unwrap();
        assert_eq!(update.project_ids, vec![3, 11]);
        assert_eq!(update.full_name, None);
        // No username or password fields exist on the update payload at all.
    }

    #[test]
    fn loaded_employee_round_trips() {
        let employee = Employee {
            id: 8,
            username: "sidorov".to_string(),
            full_name: Some("Pavel Sidorov".to_string()),
            role: Role::Foreman,
            is_active: false,
            project_ids: vec![3],
        };
        let form = EmployeeForm::from_employee(&employee);
        assert_eq!(form.username, "sidorov");
        assert!(form.password.is_empty());
        assert!(!form.is_active);
        let update = form.validate_update().unwrap();
        assert_eq!(update.full_name.as_deref(), Some("Pavel Sidorov"));
        assert!(!update.is_active);
    }
}
