use dioxus::prelude::*;

use crate::auth::{apply_login, use_auth};
use crate::services::{use_api, use_session};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_goto_register: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut auth_state = use_auth();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if username().trim().is_empty() || password().is_empty() {
            error.set(Some("Enter your username and password.".to_string()));
            return;
        }
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api.login(username().trim(), &password()).await {
                Ok(resp) => {
                    auth_state.set(apply_login(&api, &session, resp));
                    on_logged_in.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_submit,
                h1 { class: "auth-title", "Sign in" }

                if let Some(ref msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_goto_register.call(());
                        },
                        "Create a portal"
                    }
                }
            }
        }
    }
}
