//! Top bar: tenant name, object selector and the user menu.

use api::Project;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::services::use_prefs;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

/// Product name shown until a tenant sets their own.
pub const DEFAULT_TENANT_NAME: &str = "Prorab";

#[component]
pub fn Navbar(
    projects: Vec<Project>,
    current_object: Option<i64>,
    on_select_object: EventHandler<i64>,
    on_home: EventHandler<()>,
    on_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);

    let user = auth().user;
    let can_rename = user
        .as_ref()
        .map(|u| u.role.is_admin() || u.role.is_super_admin())
        .unwrap_or(false);
    let user_label = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        header {
            class: "navbar",
            div {
                class: "navbar-left",
                onclick: move |_| on_home.call(()),
                TenantName { editable: can_rename }
            }
            div {
                class: "navbar-center",
                select {
                    class: "object-select",
                    onchange: move |evt: FormEvent| {
                        if let Ok(id) = evt.value().parse::<i64>() {
                            on_select_object.call(id);
                        }
                    },
                    option {
                        value: "",
                        selected: current_object.is_none(),
                        disabled: true,
                        "Select object"
                    }
                    for p in projects {
                        option {
                            key: "{p.id}",
                            value: "{p.id}",
                            selected: Some(p.id) == current_object,
                            "{p.name}"
                        }
                    }
                }
            }
            div {
                class: "navbar-right",
                button {
                    class: "navbar-user",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "{user_label}"
                }
                if menu_open() {
                    div {
                        class: "navbar-menu",
                        button {
                            class: "navbar-menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_profile.call(());
                            },
                            "Profile"
                        }
                        button {
                            class: "navbar-menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_logout.call(());
                            },
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}

/// The tenant's display name. Admins click it to rename; the name lives in
/// browser prefs only and never leaves the device.
///
/// Enter and blur commit the draft, Escape throws it away.
#[component]
fn TenantName(editable: bool) -> Element {
    let prefs = use_prefs();
    let mut stored = use_signal({
        let prefs = prefs.clone();
        move || prefs.logo()
    });
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let commit = {
        let prefs = prefs.clone();
        move || {
            prefs.set_logo(draft().trim());
            stored.set(prefs.logo());
            editing.set(false);
        }
    };

    if editing() {
        let mut commit_on_key = commit.clone();
        let mut commit_on_blur = commit;
        rsx! {
            input {
                class: "tenant-name tenant-name-input",
                value: draft(),
                autofocus: true,
                oninput: move |evt: FormEvent| draft.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| match evt.key() {
                    Key::Enter => commit_on_key(),
                    Key::Escape => editing.set(false),
                    _ => {}
                },
                onblur: move |_| commit_on_blur(),
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            }
        }
    } else {
        let display = stored().unwrap_or_else(|| DEFAULT_TENANT_NAME.to_string());
        let display_for_edit = display.clone();
        rsx! {
            span {
                class: if editable { "tenant-name tenant-name-editable" } else { "tenant-name" },
                title: if editable { "Click to rename" } else { "" },
                onclick: move |evt: Event<MouseData>| {
                    if editable {
                        evt.stop_propagation();
                        draft.set(display_for_edit.clone());
                        editing.set(true);
                    }
                },
                "{display}"
            }
        }
    }
}
