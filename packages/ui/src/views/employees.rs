use api::Employee;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrashCan};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::confirm::{ConfirmDialog, DeleteFlow};
use crate::listing::matches_search;
use crate::services::use_api;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// The tenant's accounts. Deactivated people stay in the list greyed out;
/// deleting is for accounts created by mistake.
#[component]
pub fn EmployeesView(on_new: EventHandler<()>, on_edit: EventHandler<i64>) -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut employees = use_signal(Vec::<Employee>::new);
    let mut search = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut delete_flow = use_signal(DeleteFlow::default);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                loading.set(true);
                match api.list_employees().await {
                    Ok(list) => {
                        employees.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let handle_delete = {
        let api = api.clone();
        move |_| {
            let Some(id) = delete_flow.write().confirm() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete_employee(id).await {
                    Ok(()) => match api.list_employees().await {
                        Ok(list) => employees.set(list),
                        Err(e) => error.set(Some(e.to_string())),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let own_id = auth().user.map(|u| u.id);

    let query = search();
    let visible: Vec<Employee> = employees()
        .into_iter()
        .filter(|e| {
            matches_search(
                &query,
                &[&e.username, e.full_name.as_deref().unwrap_or("")],
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-head",
                h1 { class: "view-title", "Employees" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_new.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "New employee"
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by name or username",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }
            if loading() {
                p { class: "view-muted", "Loading employees..." }
            } else if visible.is_empty() {
                p { class: "view-muted", "Nobody matches." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Username" }
                            th { "Role" }
                            th { "Objects" }
                            th { "Status" }
                            th { class: "col-actions", "" }
                        }
                    }
                    tbody {
                        for employee in visible {
                            EmployeeRow {
                                key: "{employee.id}",
                                is_self: own_id == Some(employee.id),
                                employee: employee,
                                on_edit: on_edit,
                                on_delete: move |id| delete_flow.write().request(id),
                            }
                        }
                    }
                }
            }
        }

        if delete_flow().pending().is_some() {
            ConfirmDialog {
                title: "Delete employee",
                message: "The account will be removed and the person signed out everywhere.",
                on_confirm: handle_delete,
                on_cancel: move |_| delete_flow.write().cancel(),
            }
        }
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    is_self: bool,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = employee.id;
    let name = employee.display_name().to_string();
    let assigned = if employee.role.is_foreman() {
        employee.project_ids.len().to_string()
    } else {
        "all".to_string()
    };
    let row_class = if employee.is_active { "" } else { "row-inactive" };

    rsx! {
        tr {
            class: "{row_class}",
            td { "{name}" }
            td { "{employee.username}" }
            td { "{employee.role.label()}" }
            td { "{assigned}" }
            td {
                if employee.is_active {
                    span { class: "badge badge-active", "Active" }
                } else {
                    span { class: "badge badge-inactive", "Inactive" }
                }
            }
            td {
                class: "col-actions",
                button {
                    class: "icon-btn",
                    title: "Edit",
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                // You cannot delete yourself.
                if !is_self {
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
