use api::models::dates;
use api::{ApiClient, Payout, PayoutPayload, PayoutStatus};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPen, FaPlus, FaTrashCan, FaXmark};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::confirm::{ConfirmDialog, DeleteFlow, ModalOverlay};
use crate::fields::{apply_amount_edit, opt_string, require_amount_field, require_date_field};
use crate::format;
use crate::services::use_api;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Raw field state behind the payout dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutForm {
    pub id: Option<i64>,
    pub crew: String,
    pub amount: String,
    pub date: String,
    pub comment: String,
}

impl PayoutForm {
    pub fn new() -> Self {
        Self {
            id: None,
            crew: String::new(),
            amount: String::new(),
            date: dates::format_date(Utc::now().date_naive()),
            comment: String::new(),
        }
    }

    pub fn from_record(p: &Payout) -> Self {
        Self {
            id: Some(p.id),
            crew: p.crew.clone(),
            amount: p.amount.to_string(),
            date: dates::format_date(p.date),
            comment: p.comment.clone().unwrap_or_default(),
        }
    }

    pub fn set_amount(&mut self, raw: &str) {
        apply_amount_edit(&mut self.amount, raw);
    }

    pub fn validate(&self, project_id: i64) -> Result<PayoutPayload, String> {
        let crew = self.crew.trim();
        if crew.is_empty() {
            return Err("Crew name is required.".to_string());
        }
        Ok(PayoutPayload {
            project_id,
            crew: crew.to_string(),
            amount: require_amount_field(&self.amount, "amount")?,
            date: require_date_field(&self.date, "date")?,
            comment: opt_string(&self.comment),
        })
    }
}

/// Crew payouts for one object. A payout is editable while it sits in
/// `created`; the admin then approves or cancels it, and final rows only
/// display.
#[component]
pub fn PayoutsView(object_id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut payouts = use_signal(Vec::<Payout>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut dialog = use_signal(|| Option::<PayoutForm>::None);
    let mut delete_flow = use_signal(DeleteFlow::default);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                loading.set(true);
                load_payouts(&api, object_id, payouts, error).await;
                loading.set(false);
            }
        }
    });

    let can_decide = auth()
        .user
        .map(|u| u.role.is_admin() || u.role.is_super_admin())
        .unwrap_or(false);

    let handle_save = {
        let api = api.clone();
        move |(id, payload): (Option<i64>, PayoutPayload)| {
            let api = api.clone();
            spawn(async move {
                let result = match id {
                    Some(id) => api.update_payout(id, &payload).await.map(|_| ()),
                    None => api.create_payout(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        dialog.set(None);
                        load_payouts(&api, object_id, payouts, error).await;
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    // Shared by every row, so it has to be a Copy callback rather than a
    // plain closure.
    let handle_decide = use_callback({
        let api = api.clone();
        move |(id, approve): (i64, bool)| {
            let api = api.clone();
            spawn(async move {
                let result = if approve {
                    api.approve_payout(id).await
                } else {
                    api.cancel_payout(id).await
                };
                match result {
                    Ok(()) => load_payouts(&api, object_id, payouts, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
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
                match api.delete_payout(id).await {
                    Ok(()) => load_payouts(&api, object_id, payouts, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let approved_total = format::money(
        payouts()
            .iter()
            .filter(|p| p.status == PayoutStatus::Approved)
            .map(|p| p.amount)
            .sum::<f64>(),
    );

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-head",
                h1 { class: "view-title", "Payouts" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| dialog.set(Some(PayoutForm::new())),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "New payout"
                }
            }

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }
            if loading() {
                p { class: "view-muted", "Loading payouts..." }
            } else if payouts().is_empty() {
                p { class: "view-muted", "No payouts for this object." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Crew" }
                            th { class: "col-amount", "Amount" }
                            th { "Status" }
                            th { "Comment" }
                            th { class: "col-actions", "" }
                        }
                    }
                    tbody {
                        for payout in payouts() {
                            PayoutRow {
                                key: "{payout.id}",
                                payout: payout.clone(),
                                can_decide: can_decide,
                                on_edit: move |_| dialog.set(Some(PayoutForm::from_record(&payout))),
                                on_decide: handle_decide,
                                on_delete: move |id| delete_flow.write().request(id),
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { colspan: "2", "Approved total" }
                            td { class: "col-amount", "{approved_total}" }
                            td { colspan: "3", "" }
                        }
                    }
                }
            }
        }

        if let Some(form) = dialog() {
            PayoutDialog {
                form: form,
                object_id: object_id,
                on_save: handle_save,
                on_cancel: move |_| dialog.set(None),
            }
        }
        if delete_flow().pending().is_some() {
            ConfirmDialog {
                title: "Delete payout",
                message: "Remove this payout? Only unapproved payouts can be deleted.",
                on_confirm: handle_delete,
                on_cancel: move |_| delete_flow.write().cancel(),
            }
        }
    }
}

async fn load_payouts(
    api: &ApiClient,
    object_id: i64,
    mut payouts: Signal<Vec<Payout>>,
    mut error: Signal<Option<String>>,
) {
    match api.list_payouts(Some(object_id)).await {
        Ok(list) => {
            payouts.set(list);
            error.set(None);
        }
        Err(e) => error.set(Some(e.to_string())),
    }
}

#[component]
fn PayoutRow(
    payout: Payout,
    can_decide: bool,
    on_edit: EventHandler<()>,
    on_decide: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = payout.id;
    let date = format::date(payout.date);
    let amount = format::money(payout.amount);
    let status_class = format!("badge badge-{}", payout.status.as_str());
    let comment = payout.comment.clone().unwrap_or_default();
    let open = !payout.status.is_final();

    rsx! {
        tr {
            td { "{date}" }
            td { "{payout.crew}" }
            td { class: "col-amount", "{amount}" }
            td {
                span { class: "{status_class}", "{payout.status.label()}" }
            }
            td { class: "col-comment", "{comment}" }
            td {
                class: "col-actions",
                if open && can_decide {
                    button {
                        class: "icon-btn icon-btn-ok",
                        title: "Approve",
                        onclick: move |_| on_decide.call((id, true)),
                        Icon { icon: FaCheck, width: 12, height: 12 }
                    }
                    button {
                        class: "icon-btn",
                        title: "Cancel payout",
                        onclick: move |_| on_decide.call((id, false)),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
                if open {
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| on_edit.call(()),
                        Icon { icon: FaPen, width: 12, height: 12 }
                    }
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

#[component]
fn PayoutDialog(
    form: PayoutForm,
    object_id: i64,
    on_save: EventHandler<(Option<i64>, PayoutPayload)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let title = if form.id.is_some() { "Edit payout" } else { "New payout" };

    let handle_save = move |_| {
        let draft_now = draft();
        match draft_now.validate(object_id) {
            Ok(payload) => on_save.call((draft_now.id, payload)),
            Err(msg) => error.set(Some(msg)),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }

                if let Some(ref msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "payout-crew", "Crew" }
                    input {
                        id: "payout-crew",
                        r#type: "text",
                        placeholder: "e.g. Brigade 2",
                        value: draft().crew,
                        oninput: move |evt: FormEvent| draft.write().crew = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "payout-amount", "Amount" }
                    input {
                        id: "payout-amount",
                        r#type: "text",
                        inputmode: "decimal",
                        value: draft().amount,
                        oninput: move |evt: FormEvent| draft.write().set_amount(&evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "payout-date", "Date" }
                    input {
                        id: "payout-date",
                        r#type: "date",
                        value: draft().date,
                        oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "payout-comment", "Comment" }
                    input {
                        id: "payout-comment",
                        r#type: "text",
                        value: draft().comment,
                        oninput: move |evt: FormEvent| draft.write().comment = evt.value(),
                    }
                }

                div {
                    class: "modal-actions",
                    button { class: "btn btn-primary", onclick: handle_save, "Save" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn payout_validates_into_payload() {
        let form = PayoutForm {
            id: None,
            crew: "  Brigade 2 ".to_string(),
            amount: "78 000".to_string(),
            date: "2024-05-01".to_string(),
            comment: String::new(),
        };
        let payload = form.validate(3).unwrap();
        assert_eq!(payload.crew, "Brigade 2");
        assert_eq!(payload.amount, 78_000.0);
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(payload.comment, None);
    }

    #[test]
    fn crew_and_positive_amount_are_required() {
        let mut form = PayoutForm::new();
        form.amount = "100".to_string();
        assert!(form.validate(1).is_err());

        form.crew = "Brigade 1".to_string();
        form.amount = "-5".to_string();
        assert!(form.validate(1).is_err());

        form.amount = "100".to_string();
        assert!(form.validate(1).is_ok());
    }

    #[test]
    fn editing_round_trips_a_record() {
        let record = Payout {
            id: 12,
            project_id: 3,
            crew: "Facade crew".to_string(),
            amount: 45_500.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            status: PayoutStatus::Created,
            comment: Some("second floor".to_string()),
            created_at: None,
        };
        let form = PayoutForm::from_record(&record);
        assert_eq!(form.id, Some(12));
        let payload = form.validate(record.project_id).unwrap();
        assert_eq!(payload.crew, record.crew);
        assert_eq!(payload.amount, record.amount);
        assert_eq!(payload.comment.as_deref(), Some("second floor"));
    }
}
