use api::{ApiClient, Plan, Portal, PortalStatus};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrashCan};
use dioxus_free_icons::Icon;

use crate::confirm::{ConfirmDialog, DeleteFlow};
use crate::format;
use crate::listing::{cmp_str, matches_search, sort_rows, SortDir, SortOrder};
use crate::services::use_api;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalSortField {
    Name,
    Users,
    Created,
}

/// Apply the console's search, filters and sort to the full portal list.
///
/// Every filter is independent: `None` means "don't narrow by this", so
/// clearing one never disturbs what the others matched.
pub fn visible_portals(
    portals: &[Portal],
    query: &str,
    status: Option<PortalStatus>,
    plan: Option<Plan>,
    paid: Option<bool>,
    order: SortOrder<PortalSortField>,
) -> Vec<Portal> {
    let mut rows: Vec<Portal> = portals
        .iter()
        .filter(|p| matches_search(query, &[&p.name, &p.owner_email]))
        .filter(|p| status.map_or(true, |want| p.status == want))
        .filter(|p| plan.map_or(true, |want| p.subscription.plan == want))
        .filter(|p| paid.map_or(true, |want| p.subscription.is_paid == want))
        .cloned()
        .collect();
    match order.field {
        PortalSortField::Name => sort_rows(&mut rows, order.dir, |a, b| cmp_str(&a.name, &b.name)),
        PortalSortField::Users => {
            sort_rows(&mut rows, order.dir, |a, b| a.users_count.cmp(&b.users_count))
        }
        PortalSortField::Created => {
            sort_rows(&mut rows, order.dir, |a, b| a.created_at.cmp(&b.created_at))
        }
    }
    rows
}

async fn load_portals(
    api: &ApiClient,
    mut portals: Signal<Vec<Portal>>,
    mut error: Signal<Option<String>>,
) {
    match api.list_portals().await {
        Ok(rows) => portals.set(rows),
        Err(e) => error.set(Some(e.to_string())),
    }
}

/// Super-admin console: every customer portal in one table.
#[component]
pub fn PortalsView(on_edit: EventHandler<i64>) -> Element {
    let api = use_api();

    let mut portals = use_signal(Vec::<Portal>::new);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| Option::<PortalStatus>::None);
    let mut plan_filter = use_signal(|| Option::<Plan>::None);
    let mut paid_filter = use_signal(|| Option::<bool>::None);
    // Newest portals on top until a column header says otherwise.
    let mut order = use_signal(|| SortOrder {
        field: PortalSortField::Created,
        dir: SortDir::Desc,
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut delete_flow = use_signal(DeleteFlow::default);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                loading.set(true);
                load_portals(&api, portals, error).await;
                loading.set(false);
            }
        }
    });

    // Shared by every row, so it has to be a Copy callback rather than a
    // plain closure.
    let handle_toggle_block = use_callback({
        let api = api.clone();
        move |(id, block): (i64, bool)| {
            let api = api.clone();
            spawn(async move {
                let result = if block {
                    api.block_portal(id).await
                } else {
                    api.unblock_portal(id).await
                };
                match result {
                    Ok(()) => load_portals(&api, portals, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    });

    let handle_delete_request = use_callback(move |id: i64| {
        delete_flow.write().request(id);
    });

    let handle_delete = {
        let api = api.clone();
        move |_| {
            let Some(id) = delete_flow.write().confirm() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete_portal(id).await {
                    Ok(()) => load_portals(&api, portals, error).await,
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let rows = visible_portals(
        &portals(),
        &search(),
        status_filter(),
        plan_filter(),
        paid_filter(),
        order(),
    );
    let order_now = order();
    let name_ind = order_now.indicator(&PortalSortField::Name);
    let users_ind = order_now.indicator(&PortalSortField::Users);
    let created_ind = order_now.indicator(&PortalSortField::Created);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-head",
                h1 { class: "view-title", "Portals" }
            }

            div {
                class: "filter-row",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search by name or owner email",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "filter-select",
                    onchange: move |evt: FormEvent| status_filter.set(PortalStatus::from_str(&evt.value())),
                    option { value: "", "All statuses" }
                    for status in PortalStatus::ALL {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
                select {
                    class: "filter-select",
                    onchange: move |evt: FormEvent| plan_filter.set(Plan::from_str(&evt.value())),
                    option { value: "", "All plans" }
                    for plan in Plan::ALL {
                        option { key: "{plan.as_str()}", value: plan.as_str(), "{plan.label()}" }
                    }
                }
                select {
                    class: "filter-select",
                    onchange: move |evt: FormEvent| {
                        paid_filter.set(match evt.value().as_str() {
                            "paid" => Some(true),
                            "unpaid" => Some(false),
                            _ => None,
                        })
                    },
                    option { value: "", "All billing" }
                    option { value: "paid", "Paid" }
                    option { value: "unpaid", "Unpaid" }
                }
            }

            if let Some(ref msg) = error() {
                p { class: "form-error", "{msg}" }
            }
            if loading() {
                p { class: "view-muted", "Loading portals..." }
            } else if rows.is_empty() {
                p { class: "view-muted", "No portals match." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th {
                                class: "th-sortable",
                                onclick: move |_| order.write().toggle(PortalSortField::Name),
                                "Name{name_ind}"
                            }
                            th { "Owner" }
                            th { "Status" }
                            th { "Plan" }
                            th { "Billing" }
                            th {
                                class: "th-sortable",
                                onclick: move |_| order.write().toggle(PortalSortField::Users),
                                "Users{users_ind}"
                            }
                            th {
                                class: "th-sortable",
                                onclick: move |_| order.write().toggle(PortalSortField::Created),
                                "Created{created_ind}"
                            }
                            th { class: "col-actions", "" }
                        }
                    }
                    tbody {
                        for portal in rows {
                            PortalRow {
                                key: "{portal.id}",
                                portal: portal,
                                on_edit: on_edit,
                                on_toggle_block: handle_toggle_block,
                                on_delete: handle_delete_request,
                            }
                        }
                    }
                }
            }
        }

        if delete_flow().pending().is_some() {
            ConfirmDialog {
                title: "Delete portal",
                message: "The portal and everything in it will be removed.",
                on_confirm: handle_delete,
                on_cancel: move |_| delete_flow.write().cancel(),
            }
        }
    }
}

#[component]
fn PortalRow(
    portal: Portal,
    on_edit: EventHandler<i64>,
    on_toggle_block: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
) -> Element {
    let status_class = format!("badge badge-{}", portal.status.as_str());
    let plan = portal.subscription.plan.label();
    let billing = if portal.subscription.is_paid {
        match portal.subscription.paid_until {
            Some(until) => format!("Paid until {}", format::date(until.date_naive())),
            None => "Paid".to_string(),
        }
    } else {
        "Unpaid".to_string()
    };
    let created = format::date(portal.created_at.date_naive());
    let blocked = portal.status == PortalStatus::Blocked;
    let deleted = portal.status == PortalStatus::Deleted;

    rsx! {
        tr {
            class: if deleted { "row-inactive" } else { "" },
            td { "{portal.name}" }
            td { class: "col-muted", "{portal.owner_email}" }
            td {
                span { class: "{status_class}", "{portal.status.label()}" }
            }
            td { "{plan}" }
            td { "{billing}" }
            td { "{portal.users_count}" }
            td { "{created}" }
            td {
                class: "col-actions",
                if !deleted {
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| on_edit.call(portal.id),
                        Icon { icon: FaPen, width: 12, height: 12 }
                    }
                    if blocked {
                        button {
                            class: "btn btn-sm btn-outline",
                            onclick: move |_| on_toggle_block.call((portal.id, false)),
                            "Unblock"
                        }
                    } else {
                        button {
                            class: "btn btn-sm btn-outline",
                            onclick: move |_| on_toggle_block.call((portal.id, true)),
                            "Block"
                        }
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(portal.id),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{PortalLimits, Subscription};

    fn portal(
        id: i64,
        name: &str,
        email: &str,
        status: PortalStatus,
        plan: Plan,
        is_paid: bool,
        users: u32,
        created: &str,
    ) -> Portal {
        Portal {
            id,
            name: name.to_string(),
            owner_email: email.to_string(),
            status,
            subscription: Subscription {
                plan,
                is_paid,
                paid_until: None,
            },
            limits: PortalLimits {
                max_users: 10,
                max_storage_mb: 1000,
            },
            users_count: users,
            created_at: created.parse().unwrap(),
        }
    }

    fn fixtures() -> Vec<Portal> {
        vec![
            portal(1, "StroyMontazh", "boss@stroymontazh.ru", PortalStatus::Active, Plan::Pro, true, 12, "2023-01-10T00:00:00Z"),
            portal(2, "GorStroy", "info@gorstroy.ru", PortalStatus::Blocked, Plan::Basic, true, 4, "2023-06-01T00:00:00Z"),
            portal(3, "MonolitStroy", "monolit@mail.ru", PortalStatus::Active, Plan::Basic, true, 7, "2024-02-20T00:00:00Z"),
            portal(4, "Vektor", "vektor@mail.ru", PortalStatus::Deleted, Plan::Free, false, 1, "2022-09-05T00:00:00Z"),
        ]
    }

    fn names(rows: &[Portal]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    fn by_created() -> SortOrder<PortalSortField> {
        SortOrder::new(PortalSortField::Created)
    }

    #[test]
    fn search_covers_name_and_owner_email() {
        let all = fixtures();
        let rows = visible_portals(&all, "stroy", None, None, None, by_created());
        assert_eq!(names(&rows), vec!["StroyMontazh", "GorStroy", "MonolitStroy"]);

        let rows = visible_portals(&all, "@mail.ru", None, None, None, by_created());
        assert_eq!(names(&rows), vec!["Vektor", "MonolitStroy"]);
    }

    #[test]
    fn filters_stack_and_lift_independently() {
        let all = fixtures();
        let narrowed = visible_portals(
            &all,
            "stroy",
            Some(PortalStatus::Active),
            Some(Plan::Basic),
            Some(true),
            by_created(),
        );
        assert_eq!(names(&narrowed), vec!["MonolitStroy"]);

        // Lifting only the status filter admits the blocked portal and
        // nothing else.
        let wider = visible_portals(
            &all,
            "stroy",
            None,
            Some(Plan::Basic),
            Some(true),
            by_created(),
        );
        assert_eq!(names(&wider), vec!["GorStroy", "MonolitStroy"]);

        // Lifting only the plan filter brings the Pro portal back instead.
        let wider = visible_portals(
            &all,
            "stroy",
            Some(PortalStatus::Active),
            None,
            Some(true),
            by_created(),
        );
        assert_eq!(names(&wider), vec!["StroyMontazh", "MonolitStroy"]);
    }

    #[test]
    fn sorts_by_users_in_both_directions() {
        let all = fixtures();
        let mut order = SortOrder::new(PortalSortField::Users);
        let rows = visible_portals(&all, "", None, None, None, order);
        assert_eq!(names(&rows), vec!["Vektor", "GorStroy", "MonolitStroy", "StroyMontazh"]);

        order.toggle(PortalSortField::Users);
        let rows = visible_portals(&all, "", None, None, None, order);
        assert_eq!(names(&rows), vec!["StroyMontazh", "MonolitStroy", "GorStroy", "Vektor"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut all = fixtures();
        all.push(portal(5, "gorStroyTrest", "t@t.ru", PortalStatus::Active, Plan::Free, false, 2, "2024-01-01T00:00:00Z"));
        let rows = visible_portals(&all, "gor", None, None, None, SortOrder::new(PortalSortField::Name));
        assert_eq!(names(&rows), vec!["GorStroy", "gorStroyTrest"]);
    }
}
