use api::ProfileUpdate;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::fields::opt_string;
use crate::services::{use_api, use_session};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

fn validate_new_password(new: &str, confirm: &str) -> Result<(), String> {
    if new.len() < 6 {
        return Err("Password must be at least 6 characters.".to_string());
    }
    if new != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

/// The signed-in user's own settings: display name and password.
///
/// Username and role are shown but not editable here; both belong to the
/// tenant admin on the employees screen.
#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let session = use_session();
    let mut auth = use_auth();

    let user = auth().user;
    let mut full_name = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default()
    });
    let mut profile_status = use_signal(|| Option::<String>::None);
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_status = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut changing = use_signal(|| false);

    let handle_save_profile = {
        let api = api.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let session = session.clone();
            profile_status.set(None);
            profile_error.set(None);
            saving.set(true);
            spawn(async move {
                let update = ProfileUpdate {
                    full_name: opt_string(&full_name()),
                };
                match api.update_profile(&update).await {
                    Ok(user) => {
                        // Keep the cached copy in step so a reload shows the
                        // new name straight away.
                        session.cache_user(&user);
                        auth.write().user = Some(user);
                        saving.set(false);
                        profile_status.set(Some("Saved.".to_string()));
                    }
                    Err(e) => {
                        saving.set(false);
                        profile_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let handle_change_password = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            password_status.set(None);
            password_error.set(None);
            if let Err(msg) = validate_new_password(&new_password(), &confirm_password()) {
                password_error.set(Some(msg));
                return;
            }
            let api = api.clone();
            changing.set(true);
            spawn(async move {
                match api.change_password(&current_password(), &new_password()).await {
                    Ok(()) => {
                        changing.set(false);
                        current_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        password_status.set(Some("Password changed.".to_string()));
                    }
                    Err(e) => {
                        changing.set(false);
                        password_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let account_line = user
        .as_ref()
        .map(|u| format!("{} \u{00b7} {}", u.username, u.role.label()));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page view-page-narrow",
            h1 { class: "view-title", "Profile" }
            if let Some(ref line) = account_line {
                p { class: "view-muted", "{line}" }
            }

            section {
                class: "profile-section",
                h2 { class: "view-section-title", "Display name" }
                form {
                    class: "form",
                    onsubmit: handle_save_profile,

                    if let Some(ref msg) = profile_error() {
                        p { class: "form-error", "{msg}" }
                    }
                    if let Some(ref msg) = profile_status() {
                        p { class: "form-status", "{msg}" }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-full-name", "Full name" }
                        input {
                            id: "profile-full-name",
                            r#type: "text",
                            value: full_name(),
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
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
                    }
                }
            }

            section {
                class: "profile-section",
                h2 { class: "view-section-title", "Change password" }
                form {
                    class: "form",
                    onsubmit: handle_change_password,

                    if let Some(ref msg) = password_error() {
                        p { class: "form-error", "{msg}" }
                    }
                    if let Some(ref msg) = password_status() {
                        p { class: "form-status", "{msg}" }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-current-password", "Current password" }
                        input {
                            id: "profile-current-password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "profile-new-password", "New password" }
                        input {
                            id: "profile-new-password",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: new_password(),
                            oninput: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "profile-confirm-password", "Repeat new password" }
                        input {
                            id: "profile-confirm-password",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: changing(),
                            if changing() { "Changing..." } else { "Change password" }
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

    #[test]
    fn short_password_rejected() {
        assert!(validate_new_password("abc", "abc").is_err());
    }

    #[test]
    fn mismatched_passwords_rejected() {
        let err = validate_new_password("secret1", "secret2").unwrap_err();
        assert_eq!(err, "Passwords do not match.");
    }

    #[test]
    fn matching_long_password_accepted() {
        assert!(validate_new_password("secret1", "secret1").is_ok());
    }
}
