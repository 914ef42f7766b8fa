use api::Project;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrashCan};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::confirm::ConfirmDialog;
use crate::format;
use crate::services::{refresh_objects, use_api, use_objects};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// One object's card: the contract facts plus running money totals.
#[component]
pub fn ObjectOverviewView(
    id: i64,
    on_edit: EventHandler<i64>,
    on_deleted: EventHandler<()>,
) -> Element {
    let api = use_api();
    let auth = use_auth();
    let objects = use_objects();

    let mut project = use_signal(|| Option::<Project>::None);
    let mut cash_total = use_signal(|| 0.0f64);
    let mut expense_total = use_signal(|| 0.0f64);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut confirm_delete = use_signal(|| false);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                loading.set(true);
                match api.get_project(id).await {
                    Ok(p) => project.set(Some(p)),
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        loading.set(false);
                        return;
                    }
                }
                // Totals are a nicety; the card still renders if they fail.
                if let Ok(list) = api.list_cash_ins(Some(id)).await {
                    cash_total.set(list.iter().map(|c| c.amount).sum());
                }
                if let Ok(list) = api.list_expenses(Some(id)).await {
                    expense_total.set(list.iter().map(|e| e.amount).sum());
                }
                loading.set(false);
            }
        }
    });

    let is_admin = auth()
        .user
        .map(|u| u.role.is_admin() || u.role.is_super_admin())
        .unwrap_or(false);

    let handle_delete = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                match api.delete_project(id).await {
                    Ok(()) => {
                        refresh_objects(&api, objects).await;
                        on_deleted.call(());
                    }
                    Err(e) => {
                        confirm_delete.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }

            if loading() {
                p { class: "view-muted", "Loading object..." }
            } else if let Some(p) = project() {
                ObjectDetail {
                    project: p,
                    cash_total: cash_total(),
                    expense_total: expense_total(),
                    is_admin: is_admin,
                    on_edit: move |_| on_edit.call(id),
                    on_request_delete: move |_| confirm_delete.set(true),
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    title: "Delete object",
                    message: "The object and all its records will be removed. This cannot be undone.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }
        }
    }
}

#[component]
fn ObjectDetail(
    project: Project,
    cash_total: f64,
    expense_total: f64,
    is_admin: bool,
    on_edit: EventHandler<()>,
    on_request_delete: EventHandler<()>,
) -> Element {
    let status_class = format!("badge badge-{}", project.status.as_str());
    let period = format!(
        "{} \u{2013} {}",
        format::date_opt(project.start_date),
        format::date_opt(project.end_date)
    );
    let contract = format::money_opt(project.contract_amount);
    let planned = format::money_opt(project.planned_cost);

    let balance = cash_total - expense_total;
    let received_str = format::money(cash_total);
    let spent_str = format::money(expense_total);
    let balance_str = format::money(balance);
    let balance_class = if balance < 0.0 {
        "total-value total-out"
    } else {
        "total-value"
    };

    rsx! {
        div {
            class: "view-head",
            h1 { class: "view-title", "{project.name}" }
            span { class: "{status_class}", "{project.status.label()}" }
            if is_admin {
                div {
                    class: "view-head-actions",
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| on_edit.call(()),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_request_delete.call(()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }

        dl {
            class: "detail-grid",
            if let Some(ref client) = project.client {
                dt { "Client" }
                dd { "{client}" }
            }
            if let Some(ref address) = project.address {
                dt { "Address" }
                dd { "{address}" }
            }
            dt { "Period" }
            dd { "{period}" }
            dt { "Contract amount" }
            dd { "{contract}" }
            dt { "Planned cost" }
            dd { "{planned}" }
            if let Some(ref notes) = project.notes {
                dt { "Notes" }
                dd { class: "detail-notes", "{notes}" }
            }
        }

        div {
            class: "totals-row",
            div {
                class: "total-card",
                span { class: "total-label", "Received" }
                span { class: "total-value total-in", "{received_str}" }
            }
            div {
                class: "total-card",
                span { class: "total-label", "Spent" }
                span { class: "total-value total-out", "{spent_str}" }
            }
            div {
                class: "total-card",
                span { class: "total-label", "Balance" }
                span { class: "{balance_class}", "{balance_str}" }
            }
        }
    }
}
