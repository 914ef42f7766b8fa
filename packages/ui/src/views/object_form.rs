use api::models::dates;
use api::{can_add_project, default_plan_limits, Project, ProjectPayload, ProjectStatus};
use dioxus::prelude::*;

use crate::fields::{apply_amount_edit, opt_string, parse_amount_field, parse_date_field};
use crate::services::{refresh_objects, use_api, use_objects};
use crate::subscription::use_subscription;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Raw field state behind the object form. Text stays exactly as typed,
/// with one gate: the money fields only take edits that coerce to an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectForm {
    pub name: String,
    pub address: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    pub contract_amount: String,
    pub planned_cost: String,
    pub notes: String,
}

impl Default for ObjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            client: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: ProjectStatus::New,
            contract_amount: String::new(),
            planned_cost: String::new(),
            notes: String::new(),
        }
    }
}

impl ObjectForm {
    pub fn from_project(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            address: p.address.clone().unwrap_or_default(),
            client: p.client.clone().unwrap_or_default(),
            start_date: p.start_date.map(dates::format_date).unwrap_or_default(),
            end_date: p.end_date.map(dates::format_date).unwrap_or_default(),
            status: p.status,
            contract_amount: p.contract_amount.map(|v| v.to_string()).unwrap_or_default(),
            planned_cost: p.planned_cost.map(|v| v.to_string()).unwrap_or_default(),
            notes: p.notes.clone().unwrap_or_default(),
        }
    }

    pub fn set_contract_amount(&mut self, raw: &str) {
        apply_amount_edit(&mut self.contract_amount, raw);
    }

    pub fn set_planned_cost(&mut self, raw: &str) {
        apply_amount_edit(&mut self.planned_cost, raw);
    }

    pub fn validate(&self) -> Result<ProjectPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required.".to_string());
        }
        let start_date = parse_date_field(&self.start_date, "start date")?;
        let end_date = parse_date_field(&self.end_date, "end date")?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err("End date is before the start date.".to_string());
            }
        }
        Ok(ProjectPayload {
            name: name.to_string(),
            address: opt_string(&self.address),
            client: opt_string(&self.client),
            start_date,
            end_date,
            status: self.status,
            contract_amount: parse_amount_field(&self.contract_amount, "contract amount")?,
            planned_cost: parse_amount_field(&self.planned_cost, "planned cost")?,
            notes: opt_string(&self.notes),
        })
    }
}

/// Create or edit an object. With `id` set the record is loaded for editing;
/// without it the form creates, which is where the plan ceiling applies.
#[component]
pub fn ObjectFormView(
    id: Option<i64>,
    on_saved: EventHandler<i64>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let objects = use_objects();
    let sub = use_subscription();

    let mut form = use_signal(ObjectForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| id.is_some());

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let Some(id) = id else { return };
                match api.get_project(id).await {
                    Ok(p) => form.set(ObjectForm::from_project(&p)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    // The plan ceiling only guards creation. An unknown portal (fetch still
    // in flight or failed) does not block; the backend enforces the limit
    // anyway.
    let at_limit = id.is_none()
        && match sub().portal {
            Some(portal) => !can_add_project(
                &portal.subscription,
                objects().len() as u32,
                default_plan_limits,
            ),
            None => false,
        };

    if at_limit {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-page",
                h1 { class: "view-title", "New object" }
                div {
                    class: "upgrade-prompt",
                    p { "Your plan has reached its object limit." }
                    p { "Upgrade the subscription to add more objects." }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Back"
                    }
                }
            }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match form().validate() {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match id {
                Some(id) => api.update_project(id, &payload).await.map(|p| p.id),
                None => api.create_project(&payload).await.map(|p| p.id),
            };
            match result {
                Ok(saved_id) => {
                    refresh_objects(&api, objects).await;
                    on_saved.call(saved_id);
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let title = if id.is_some() { "Edit object" } else { "New object" };

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

                    div {
                        class: "form-field",
                        label { r#for: "obj-name", "Name" }
                        input {
                            id: "obj-name",
                            r#type: "text",
                            placeholder: "e.g. Warehouse on Lenina 5",
                            value: form().name,
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "obj-address", "Address" }
                        input {
                            id: "obj-address",
                            r#type: "text",
                            value: form().address,
                            oninput: move |evt: FormEvent| form.write().address = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "obj-client", "Client" }
                        input {
                            id: "obj-client",
                            r#type: "text",
                            value: form().client,
                            oninput: move |evt: FormEvent| form.write().client = evt.value(),
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "obj-start", "Start date" }
                            input {
                                id: "obj-start",
                                r#type: "date",
                                value: form().start_date,
                                oninput: move |evt: FormEvent| form.write().start_date = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "obj-end", "End date" }
                            input {
                                id: "obj-end",
                                r#type: "date",
                                value: form().end_date,
                                oninput: move |evt: FormEvent| form.write().end_date = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "obj-status", "Status" }
                        select {
                            id: "obj-status",
                            onchange: move |evt: FormEvent| {
                                if let Some(status) = ProjectStatus::from_str(&evt.value()) {
                                    form.write().status = status;
                                }
                            },
                            for status in ProjectStatus::ALL {
                                option {
                                    value: "{status.as_str()}",
                                    selected: form().status == status,
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "obj-contract", "Contract amount" }
                            input {
                                id: "obj-contract",
                                r#type: "text",
                                inputmode: "decimal",
                                value: form().contract_amount,
                                oninput: move |evt: FormEvent| {
                                    form.write().set_contract_amount(&evt.value())
                                },
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "obj-planned", "Planned cost" }
                            input {
                                id: "obj-planned",
                                r#type: "text",
                                inputmode: "decimal",
                                value: form().planned_cost,
                                oninput: move |evt: FormEvent| {
                                    form.write().set_planned_cost(&evt.value())
                                },
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "obj-notes", "Notes" }
                        textarea {
                            id: "obj-notes",
                            rows: 4,
                            value: form().notes,
                            oninput: move |evt: FormEvent| form.write().notes = evt.value(),
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
