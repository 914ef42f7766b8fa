use api::models::dates;
use api::{ApiClient, CashIn, CashInPayload, Expense, ExpenseCategory, ExpensePayload};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrashCan};
use dioxus_free_icons::Icon;

use crate::confirm::{ConfirmDialog, DeleteFlow, ModalOverlay};
use crate::fields::{apply_amount_edit, opt_string, require_amount_field, require_date_field};
use crate::format;
use crate::services::use_api;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

fn today() -> String {
    dates::format_date(Utc::now().date_naive())
}

/// Raw field state behind the cash-in dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CashInForm {
    pub id: Option<i64>,
    pub date: String,
    pub amount: String,
    pub comment: String,
}

impl CashInForm {
    pub fn new() -> Self {
        Self {
            id: None,
            date: today(),
            amount: String::new(),
            comment: String::new(),
        }
    }

    pub fn from_record(c: &CashIn) -> Self {
        Self {
            id: Some(c.id),
            date: dates::format_date(c.date),
            amount: c.amount.to_string(),
            comment: c.comment.clone().unwrap_or_default(),
        }
    }

    pub fn set_amount(&mut self, raw: &str) {
        apply_amount_edit(&mut self.amount, raw);
    }

    pub fn validate(&self, project_id: i64) -> Result<CashInPayload, String> {
        Ok(CashInPayload {
            project_id,
            date: require_date_field(&self.date, "date")?,
            amount: require_amount_field(&self.amount, "amount")?,
            comment: opt_string(&self.comment),
        })
    }
}

/// Raw field state behind the expense dialog. New expenses start in the
/// materials category, the one crews reach for most.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub id: Option<i64>,
    pub date: String,
    pub amount: String,
    pub category: ExpenseCategory,
    pub comment: String,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self {
            id: None,
            date: today(),
            amount: String::new(),
            category: ExpenseCategory::default(),
            comment: String::new(),
        }
    }

    pub fn from_record(e: &Expense) -> Self {
        Self {
            id: Some(e.id),
            date: dates::format_date(e.date),
            amount: e.amount.to_string(),
            category: e.category,
            comment: e.comment.clone().unwrap_or_default(),
        }
    }

    pub fn set_amount(&mut self, raw: &str) {
        apply_amount_edit(&mut self.amount, raw);
    }

    pub fn validate(&self, project_id: i64) -> Result<ExpensePayload, String> {
        Ok(ExpensePayload {
            project_id,
            date: require_date_field(&self.date, "date")?,
            amount: require_amount_field(&self.amount, "amount")?,
            category: self.category,
            comment: opt_string(&self.comment),
        })
    }
}

/// The object's money ledger: cash received from the client on top,
/// expenses under it. Records open in modal dialogs; rows stay in the
/// order the backend returns them.
#[component]
pub fn FinanceView(object_id: i64) -> Element {
    let api = use_api();

    let mut cash_ins = use_signal(Vec::<CashIn>::new);
    let mut expenses = use_signal(Vec::<Expense>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let mut cash_dialog = use_signal(|| Option::<CashInForm>::None);
    let mut expense_dialog = use_signal(|| Option::<ExpenseForm>::None);
    let mut cash_delete = use_signal(DeleteFlow::default);
    let mut expense_delete = use_signal(DeleteFlow::default);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                loading.set(true);
                load_ledger(&api, object_id, cash_ins, expenses, error).await;
                loading.set(false);
            }
        }
    });

    let handle_save_cash = {
        let api = api.clone();
        move |(id, payload): (Option<i64>, CashInPayload)| {
            let api = api.clone();
            spawn(async move {
                let result = match id {
                    Some(id) => api.update_cash_in(id, &payload).await.map(|_| ()),
                    None => api.create_cash_in(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        cash_dialog.set(None);
                        load_ledger(&api, object_id, cash_ins, expenses, error).await;
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_save_expense = {
        let api = api.clone();
        move |(id, payload): (Option<i64>, ExpensePayload)| {
            let api = api.clone();
            spawn(async move {
                let result = match id {
                    Some(id) => api.update_expense(id, &payload).await.map(|_| ()),
                    None => api.create_expense(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        expense_dialog.set(None);
                        load_ledger(&api, object_id, cash_ins, expenses, error).await;
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete_cash = {
        let api = api.clone();
        move |_| {
            let Some(id) = cash_delete.write().confirm() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete_cash_in(id).await {
                    Ok(()) => load_ledger(&api, object_id, cash_ins, expenses, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete_expense = {
        let api = api.clone();
        move |_| {
            let Some(id) = expense_delete.write().confirm() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete_expense(id).await {
                    Ok(()) => load_ledger(&api, object_id, cash_ins, expenses, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let cash_total = format::money(cash_ins().iter().map(|c| c.amount).sum::<f64>());
    let expense_total = format::money(expenses().iter().map(|e| e.amount).sum::<f64>());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Finance" }

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }
            if loading() {
                p { class: "view-muted", "Loading records..." }
            }

            section {
                class: "ledger-section",
                div {
                    class: "view-head",
                    h2 { class: "view-section-title", "Cash in" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| cash_dialog.set(Some(CashInForm::new())),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Add payment"
                    }
                }
                if cash_ins().is_empty() && !loading() {
                    p { class: "view-muted", "No payments recorded." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { class: "col-amount", "Amount" }
                                th { "Comment" }
                                th { "Recorded by" }
                                th { class: "col-actions", "" }
                            }
                        }
                        tbody {
                            for record in cash_ins() {
                                CashInRow {
                                    key: "{record.id}",
                                    record: record.clone(),
                                    on_edit: move |_| cash_dialog.set(Some(CashInForm::from_record(&record))),
                                    on_delete: move |id| cash_delete.write().request(id),
                                }
                            }
                        }
                        tfoot {
                            tr {
                                td { "Total" }
                                td { class: "col-amount", "{cash_total}" }
                                td { colspan: "3", "" }
                            }
                        }
                    }
                }
            }

            section {
                class: "ledger-section",
                div {
                    class: "view-head",
                    h2 { class: "view-section-title", "Expenses" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| expense_dialog.set(Some(ExpenseForm::new())),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Add expense"
                    }
                }
                if expenses().is_empty() && !loading() {
                    p { class: "view-muted", "No expenses recorded." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { class: "col-amount", "Amount" }
                                th { "Category" }
                                th { "Comment" }
                                th { "Recorded by" }
                                th { class: "col-actions", "" }
                            }
                        }
                        tbody {
                            for record in expenses() {
                                ExpenseRow {
                                    key: "{record.id}",
                                    record: record.clone(),
                                    on_edit: move |_| expense_dialog.set(Some(ExpenseForm::from_record(&record))),
                                    on_delete: move |id| expense_delete.write().request(id),
                                }
                            }
                        }
                        tfoot {
                            tr {
                                td { "Total" }
                                td { class: "col-amount", "{expense_total}" }
                                td { colspan: "4", "" }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = cash_dialog() {
            CashInDialog {
                form: form,
                object_id: object_id,
                on_save: handle_save_cash,
                on_cancel: move |_| cash_dialog.set(None),
            }
        }
        if let Some(form) = expense_dialog() {
            ExpenseDialog {
                form: form,
                object_id: object_id,
                on_save: handle_save_expense,
                on_cancel: move |_| expense_dialog.set(None),
            }
        }
        if cash_delete().pending().is_some() {
            ConfirmDialog {
                title: "Delete payment",
                message: "Remove this payment from the ledger?",
                on_confirm: handle_delete_cash,
                on_cancel: move |_| cash_delete.write().cancel(),
            }
        }
        if expense_delete().pending().is_some() {
            ConfirmDialog {
                title: "Delete expense",
                message: "Remove this expense from the ledger?",
                on_confirm: handle_delete_expense,
                on_cancel: move |_| expense_delete.write().cancel(),
            }
        }
    }
}

async fn load_ledger(
    api: &ApiClient,
    object_id: i64,
    mut cash_ins: Signal<Vec<CashIn>>,
    mut expenses: Signal<Vec<Expense>>,
    mut error: Signal<Option<String>>,
) {
    match api.list_cash_ins(Some(object_id)).await {
        Ok(list) => {
            cash_ins.set(list);
            error.set(None);
        }
        Err(e) => {
            error.set(Some(e.to_string()));
            return;
        }
    }
    match api.list_expenses(Some(object_id)).await {
        Ok(list) => expenses.set(list),
        Err(e) => error.set(Some(e.to_string())),
    }
}

#[component]
fn CashInRow(record: CashIn, on_edit: EventHandler<()>, on_delete: EventHandler<i64>) -> Element {
    let id = record.id;
    let date = format::date(record.date);
    let amount = format::money(record.amount);
    let comment = record.comment.clone().unwrap_or_default();
    let author = record
        .creator
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "\u{2013}".to_string());

    rsx! {
        tr {
            td { "{date}" }
            td { class: "col-amount", "{amount}" }
            td { class: "col-comment", "{comment}" }
            td { "{author}" }
            td {
                class: "col-actions",
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

#[component]
fn ExpenseRow(record: Expense, on_edit: EventHandler<()>, on_delete: EventHandler<i64>) -> Element {
    let id = record.id;
    let date = format::date(record.date);
    let amount = format::money(record.amount);
    let comment = record.comment.clone().unwrap_or_default();
    let author = record
        .creator
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "\u{2013}".to_string());

    rsx! {
        tr {
            td { "{date}" }
            td { class: "col-amount", "{amount}" }
            td { "{record.category.label()}" }
            td { class: "col-comment", "{comment}" }
            td { "{author}" }
            td {
                class: "col-actions",
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

#[component]
fn CashInDialog(
    form: CashInForm,
    object_id: i64,
    on_save: EventHandler<(Option<i64>, CashInPayload)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let title = if form.id.is_some() { "Edit payment" } else { "New payment" };

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
                    label { r#for: "cash-date", "Date" }
                    input {
                        id: "cash-date",
                        r#type: "date",
                        value: draft().date,
                        oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "cash-amount", "Amount" }
                    input {
                        id: "cash-amount",
                        r#type: "text",
                        inputmode: "decimal",
                        value: draft().amount,
                        oninput: move |evt: FormEvent| draft.write().set_amount(&evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "cash-comment", "Comment" }
                    input {
                        id: "cash-comment",
                        r#type: "text",
                        placeholder: "e.g. first tranche",
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

#[component]
fn ExpenseDialog(
    form: ExpenseForm,
    object_id: i64,
    on_save: EventHandler<(Option<i64>, ExpensePayload)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let title = if form.id.is_some() { "Edit expense" } else { "New expense" };

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
                    label { r#for: "expense-date", "Date" }
                    input {
                        id: "expense-date",
                        r#type: "date",
                        value: draft().date,
                        oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "expense-amount", "Amount" }
                    input {
                        id: "expense-amount",
                        r#type: "text",
                        inputmode: "decimal",
                        value: draft().amount,
                        oninput: move |evt: FormEvent| draft.write().set_amount(&evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "expense-category", "Category" }
                    select {
                        id: "expense-category",
                        onchange: move |evt: FormEvent| {
                            if let Some(category) = ExpenseCategory::from_str(&evt.value()) {
                                draft.write().category = category;
                            }
                        },
                        for category in ExpenseCategory::ALL {
                            option {
                                value: "{category.as_str()}",
                                selected: draft().category == category,
                                "{category.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "expense-comment", "Comment" }
                    input {
                        id: "expense-comment",
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
    fn cash_in_validates_into_payload() {
        let form = CashInForm {
            id: None,
            date: "2024-04-15".to_string(),
            amount: "250 000".to_string(),
            comment: "  first tranche ".to_string(),
        };
        let payload = form.validate(3).unwrap();
        assert_eq!(payload.project_id, 3);
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
        assert_eq!(payload.amount, 250_000.0);
        assert_eq!(payload.comment.as_deref(), Some("first tranche"));
    }

    #[test]
    fn cash_in_requires_date_and_positive_amount() {
        let mut form = CashInForm::new();
        form.date = String::new();
        form.amount = "100".to_string();
        assert!(form.validate(1).is_err());

        let mut form = CashInForm::new();
        form.amount = "0".to_string();
        assert!(form.validate(1).is_err());
    }

    #[test]
    fn amount_edits_coerce_as_they_are_typed() {
        let mut form = CashInForm::new();
        form.set_amount("250 000");
        assert_eq!(form.amount, "250 000");

        form.set_amount("250 000r");
        assert_eq!(form.amount, "250 000");
    }

    #[test]
    fn expense_keeps_chosen_category() {
        let mut form = ExpenseForm::new();
        assert_eq!(form.category, ExpenseCategory::Materials);
        form.amount = "500".to_string();
        form.category = ExpenseCategory::Transport;
        let payload = form.validate(2).unwrap();
        assert_eq!(payload.category, ExpenseCategory::Transport);
        assert_eq!(payload.comment, None);
    }

    #[test]
    fn editing_round_trips_a_record() {
        let record = Expense {
            id: 9,
            project_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            amount: 1234.5,
            category: ExpenseCategory::Labor,
            comment: Some("daily crew".to_string()),
            creator: None,
            created_at: None,
        };
        let form = ExpenseForm::from_record(&record);
        assert_eq!(form.id, Some(9));
        let payload = form.validate(record.project_id).unwrap();
        assert_eq!(payload.date, record.date);
        assert_eq!(payload.amount, record.amount);
        assert_eq!(payload.category, ExpenseCategory::Labor);
        assert_eq!(payload.comment.as_deref(), Some("daily crew"));
    }
}
