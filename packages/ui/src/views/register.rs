use api::RegisterForm;
use dioxus::prelude::*;

use crate::auth::{apply_login, use_auth};
use crate::services::{use_api, use_session};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Creates a tenant portal together with its first admin account.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_goto_login: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut auth_state = use_auth();

    let mut portal_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if portal_name().trim().is_empty() {
            error.set(Some("Company name is required.".to_string()));
            return;
        }
        if username().trim().is_empty() {
            error.set(Some("Username is required.".to_string()));
            return;
        }
        if password().len() < 6 {
            error.set(Some("Password must be at least 6 characters.".to_string()));
            return;
        }
        if password() != password_confirm() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let form = RegisterForm {
                portal_name: portal_name().trim().to_string(),
                username: username().trim().to_string(),
                password: password(),
                full_name: {
                    let name = full_name().trim().to_string();
                    (!name.is_empty()).then_some(name)
                },
            };
            match api.register(&form).await {
                Ok(resp) => {
                    auth_state.set(apply_login(&api, &session, resp));
                    on_registered.call(());
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
                h1 { class: "auth-title", "Create a portal" }
                p {
                    class: "auth-subtitle",
                    "A portal is your company's own workspace. The account you create here becomes its administrator."
                }

                if let Some(ref msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "reg-portal", "Company name" }
                    input {
                        id: "reg-portal",
                        r#type: "text",
                        placeholder: "e.g. Stroyka Plus",
                        value: portal_name(),
                        oninput: move |evt: FormEvent| portal_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "reg-username", "Username" }
                    input {
                        id: "reg-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "reg-full-name", "Full name (optional)" }
                    input {
                        id: "reg-full-name",
                        r#type: "text",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "reg-password", "Password" }
                    input {
                        id: "reg-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "reg-password-confirm", "Repeat password" }
                    input {
                        id: "reg-password-confirm",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: password_confirm(),
                        oninput: move |evt: FormEvent| password_confirm.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create portal" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    a {
                        href: "#",
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_goto_login.call(());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
