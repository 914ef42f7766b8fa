use api::models::dates;
use api::{Plan, Portal, PortalLimits, PortalUpdate, Subscription};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::fields::parse_date_field;
use crate::services::use_api;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Field state behind the portal edit form. The limit fields hold numbers,
/// not input text; edits that do not parse never reach them.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalEditForm {
    pub plan: Plan,
    pub is_paid: bool,
    pub paid_until: String,
    pub max_users: u32,
    pub max_storage_mb: u32,
}

impl PortalEditForm {
    pub fn from_portal(portal: &Portal) -> Self {
        Self {
            plan: portal.subscription.plan,
            is_paid: portal.subscription.is_paid,
            paid_until: portal
                .subscription
                .paid_until
                .map(|dt| dates::format_date(dt.date_naive()))
                .unwrap_or_default(),
            max_users: portal.limits.max_users,
            max_storage_mb: portal.limits.max_storage_mb,
        }
    }

    pub fn set_max_users(&mut self, raw: &str) {
        if let Ok(v) = raw.trim().parse() {
            self.max_users = v;
        }
    }

    pub fn set_max_storage_mb(&mut self, raw: &str) {
        if let Ok(v) = raw.trim().parse() {
            self.max_storage_mb = v;
        }
    }

    pub fn validate(&self) -> Result<PortalUpdate, String> {
        // The paid-until day is inclusive, so store its last second.
        let paid_until: Option<DateTime<Utc>> =
            match parse_date_field(&self.paid_until, "paid-until date")? {
                Some(date) => date.and_hms_opt(23, 59, 59).map(|dt| dt.and_utc()),
                None => None,
            };
        Ok(PortalUpdate {
            subscription: Subscription {
                plan: self.plan,
                is_paid: self.is_paid,
                paid_until,
            },
            limits: PortalLimits {
                max_users: self.max_users,
                max_storage_mb: self.max_storage_mb,
            },
        })
    }
}

/// Console form for one portal's plan, billing flags and limits.
/// Status is not here on purpose; blocking stays a one-click row action.
#[component]
pub fn PortalEditView(id: i64, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();

    let mut portal = use_signal(|| Option::<Portal>::None);
    let mut form = use_signal(|| Option::<PortalEditForm>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.get_portal(id).await {
                    Ok(p) => {
                        form.set(Some(PortalEditForm::from_portal(&p)));
                        portal.set(Some(p));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
        }
    });

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(form_now) = form() else { return };
            let update = match form_now.validate() {
                Ok(update) => update,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };
            let api = api.clone();
            saving.set(true);
            spawn(async move {
                match api.update_portal(id, &update).await {
                    Ok(_) => on_saved.call(()),
                    Err(e) => {
                        saving.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let head_line = portal()
        .map(|p| format!("{} \u{00b7} {}", p.name, p.owner_email));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page view-page-narrow",
            h1 { class: "view-title", "Edit portal" }
            if let Some(ref line) = head_line {
                p { class: "view-muted", "{line}" }
            }

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }

            if let Some(form_now) = form() {
                form {
                    class: "form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { r#for: "portal-plan", "Plan" }
                        select {
                            id: "portal-plan",
                            onchange: move |evt: FormEvent| {
                                if let Some(plan) = Plan::from_str(&evt.value()) {
                                    if let Some(f) = form.write().as_mut() {
                                        f.plan = plan;
                                    }
                                }
                            },
                            for plan in Plan::ALL {
                                option {
                                    key: "{plan.as_str()}",
                                    value: plan.as_str(),
                                    selected: form_now.plan == plan,
                                    "{plan.label()}"
                                }
                            }
                        }
                    }

                    label {
                        class: "form-check",
                        input {
                            r#type: "checkbox",
                            checked: form_now.is_paid,
                            onchange: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.is_paid = evt.checked();
                                }
                            },
                        }
                        "Paid"
                    }

                    div {
                        class: "form-field",
                        label { r#for: "portal-paid-until", "Paid until" }
                        input {
                            id: "portal-paid-until",
                            r#type: "date",
                            value: form_now.paid_until.clone(),
                            oninput: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.paid_until = evt.value();
                                }
                            },
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "portal-max-users", "Max users" }
                            input {
                                id: "portal-max-users",
                                r#type: "number",
                                min: "0",
                                value: "{form_now.max_users}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(f) = form.write().as_mut() {
                                        f.set_max_users(&evt.value());
                                    }
                                },
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "portal-max-storage", "Max storage, MB" }
                            input {
                                id: "portal-max-storage",
                                r#type: "number",
                                min: "0",
                                value: "{form_now.max_storage_mb}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(f) = form.write().as_mut() {
                                        f.set_max_storage_mb(&evt.value());
                                    }
                                },
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
            } else if error().is_none() {
                p { class: "view-muted", "Loading portal..." }
            }
        }
    }
}
