use api::Project;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::format;
use crate::listing::matches_search;
use crate::services::{refresh_objects, use_api, use_objects};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// All objects of the tenant. Finished work is tucked into a collapsed
/// "Archived" group so the everyday list stays short.
#[component]
pub fn ObjectsView(
    on_open: EventHandler<i64>,
    on_new: EventHandler<()>,
    on_edit: EventHandler<i64>,
) -> Element {
    let api = use_api();
    let auth = use_auth();
    let objects = use_objects();

    let mut search = use_signal(String::new);
    let mut show_archived = use_signal(|| false);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            refresh_objects(&api, objects).await;
            loading.set(false);
        }
    });

    let is_admin = auth()
        .user
        .map(|u| u.role.is_admin() || u.role.is_super_admin())
        .unwrap_or(false);

    let query = search();
    let visible: Vec<Project> = objects()
        .into_iter()
        .filter(|p| {
            matches_search(
                &query,
                &[
                    &p.name,
                    p.address.as_deref().unwrap_or(""),
                    p.client.as_deref().unwrap_or(""),
                ],
            )
        })
        .collect();
    let (active, archived): (Vec<Project>, Vec<Project>) =
        visible.into_iter().partition(|p| !p.status.is_archived());
    let archived_count = archived.len();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-head",
                h1 { class: "view-title", "Objects" }
                if is_admin {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_new.call(()),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "New object"
                    }
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by name, address or client",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }

            if loading() {
                p { class: "view-muted", "Loading objects..." }
            } else if active.is_empty() && archived.is_empty() {
                if query.trim().is_empty() {
                    p { class: "view-muted", "No objects yet." }
                } else {
                    p { class: "view-muted", "Nothing matches the search." }
                }
            }

            div {
                class: "object-list",
                for project in active {
                    ObjectCard {
                        key: "{project.id}",
                        project: project,
                        is_admin: is_admin,
                        on_open: on_open,
                        on_edit: on_edit,
                    }
                }
            }

            if archived_count > 0 {
                button {
                    class: "group-toggle",
                    onclick: move |_| show_archived.set(!show_archived()),
                    span {
                        class: "group-toggle-arrow",
                        if show_archived() { "\u{25BE}" } else { "\u{25B8}" }
                    }
                    "Archived ({archived_count})"
                }
                if show_archived() {
                    div {
                        class: "object-list object-list-archived",
                        for project in archived {
                            ObjectCard {
                                key: "{project.id}",
                                project: project,
                                is_admin: is_admin,
                                on_open: on_open,
                                on_edit: on_edit,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ObjectCard(
    project: Project,
    is_admin: bool,
    on_open: EventHandler<i64>,
    on_edit: EventHandler<i64>,
) -> Element {
    let id = project.id;
    let status_class = format!("badge badge-{}", project.status.as_str());
    let contract = project.contract_amount.map(format::money);
    let period = match (project.start_date, project.end_date) {
        (Some(s), Some(e)) => format!("{} \u{2013} {}", format::date(s), format::date(e)),
        (Some(s), None) => format!("from {}", format::date(s)),
        (None, Some(e)) => format!("until {}", format::date(e)),
        (None, None) => String::new(),
    };

    rsx! {
        div {
            class: "object-card",
            onclick: move |_| on_open.call(id),
            div {
                class: "object-card-head",
                span { class: "object-card-name", "{project.name}" }
                span { class: "{status_class}", "{project.status.label()}" }
                if is_admin {
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_edit.call(id);
                        },
                        Icon { icon: FaPen, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "object-card-meta",
                if let Some(ref client) = project.client {
                    span { "{client}" }
                }
                if let Some(ref address) = project.address {
                    span { "{address}" }
                }
                if !period.is_empty() {
                    span { "{period}" }
                }
                if let Some(ref contract) = contract {
                    span { "Contract: {contract}" }
                }
            }
        }
    }
}
