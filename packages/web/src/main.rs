use api::{ApiClient, Project};
use dioxus::prelude::*;

use ui::views::{
    EmployeeFormView, EmployeesView, FinanceView, LoginView, ObjectFormView, ObjectOverviewView,
    ObjectsView, PayoutsView, PortalEditView, PortalsView, ProfileView, RegisterView,
};
use ui::{
    make_kv, refresh_objects, resolve_current_object, sign_out, use_auth, use_api, use_prefs,
    use_session, AuthProvider, NavItem, Navbar, Prefs, Session, Sidebar, SubscriptionBanner,
    SubscriptionProvider,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/objects")]
        Objects {},
        #[route("/objects/new")]
        ObjectNew {},
        #[route("/objects/:id")]
        ObjectOverview { id: i64 },
        #[route("/objects/:id/edit")]
        ObjectEdit { id: i64 },
        #[route("/objects/:id/finance")]
        Finance { id: i64 },
        #[route("/objects/:id/payouts")]
        Payouts { id: i64 },
        #[route("/employees")]
        Employees {},
        #[route("/employees/new")]
        EmployeeNew {},
        #[route("/employees/:id")]
        EmployeeEdit { id: i64 },
        #[route("/profile")]
        Profile {},
        #[route("/portals")]
        Portals {},
        #[route("/portals/:id")]
        PortalEdit { id: i64 },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client and one store pair for the whole tree.
    use_context_provider(ApiClient::same_origin);
    use_context_provider(|| Session::new(make_kv()));
    use_context_provider(|| Prefs::new(make_kv()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            SubscriptionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Everything behind the login screen: top bar, sidebar and the routed view.
///
/// The shell also owns the shared project list and the "current object"
/// resolution, so the header selector, the sidebar and the views all agree on
/// which object is open.
#[component]
fn Shell() -> Element {
    let api = use_api();
    let session = use_session();
    let prefs = use_prefs();
    let nav = use_navigator();
    let mut auth = use_auth();

    let objects: Signal<Vec<Project>> = use_context_provider(|| Signal::new(Vec::new()));

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                // Reruns when the restore finishes, so a page reload still
                // ends up with the list filled.
                if auth().user.is_some() {
                    refresh_objects(&api, objects).await;
                }
            }
        }
    });

    let route = use_route::<Route>();
    let route_object = match &route {
        Route::ObjectOverview { id }
        | Route::ObjectEdit { id }
        | Route::Finance { id }
        | Route::Payouts { id } => Some(*id),
        _ => None,
    };
    let current_object = resolve_current_object(route_object, prefs.last_object());
    if let Some(id) = route_object {
        // Remember it however the object was reached, link or selector.
        if prefs.last_object() != Some(id) {
            prefs.set_last_object(id);
        }
    }

    let active = match &route {
        Route::ObjectOverview { .. } => NavItem::Overview,
        Route::Finance { .. } => NavItem::Finance,
        Route::Payouts { .. } => NavItem::Payouts,
        Route::Employees {} | Route::EmployeeNew {} | Route::EmployeeEdit { .. } => {
            NavItem::Employees
        }
        Route::Portals {} | Route::PortalEdit { .. } => NavItem::Portals,
        Route::Profile {} => NavItem::Profile,
        _ => NavItem::Objects,
    };

    let on_select_object = {
        let prefs = prefs.clone();
        move |id: i64| {
            prefs.set_last_object(id);
            nav.push(Route::ObjectOverview { id });
        }
    };

    let on_navigate = move |item: NavItem| match item {
        NavItem::Objects => {
            nav.push(Route::Objects {});
        }
        NavItem::Overview => {
            if let Some(id) = current_object {
                nav.push(Route::ObjectOverview { id });
            }
        }
        NavItem::Finance => {
            if let Some(id) = current_object {
                nav.push(Route::Finance { id });
            }
        }
        NavItem::Payouts => {
            if let Some(id) = current_object {
                nav.push(Route::Payouts { id });
            }
        }
        NavItem::Employees => {
            nav.push(Route::Employees {});
        }
        NavItem::Portals => {
            nav.push(Route::Portals {});
        }
        NavItem::Profile => {
            nav.push(Route::Profile {});
        }
    };

    let on_logout = {
        let api = api.clone();
        let session = session.clone();
        move |_| {
            auth.set(sign_out(&api, &session));
            nav.push(Route::Login {});
        }
    };

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "app-loading", "Loading..." }
        };
    }
    if state.user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "app-shell",
            Navbar {
                projects: objects(),
                current_object: current_object,
                on_select_object: on_select_object,
                on_home: move |_| { nav.push(Route::Objects {}); },
                on_profile: move |_| { nav.push(Route::Profile {}); },
                on_logout: on_logout,
            }
            SubscriptionBanner {}
            div {
                class: "app-body",
                Sidebar {
                    current_object: current_object,
                    active: active,
                    on_navigate: on_navigate,
                }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` once the session restore has settled.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();
    if !state.loading {
        if state.user.is_some() {
            nav.replace(Route::Objects {});
        } else {
            nav.replace(Route::Login {});
        }
    }
    rsx! {}
}

#[component]
fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_logged_in: move |_| { nav.push(Route::Objects {}); },
            on_goto_register: move |_| { nav.push(Route::Register {}); },
        }
    }
}

#[component]
fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        RegisterView {
            on_registered: move |_| { nav.push(Route::Objects {}); },
            on_goto_login: move |_| { nav.push(Route::Login {}); },
        }
    }
}

#[component]
fn Objects() -> Element {
    let nav = use_navigator();
    rsx! {
        ObjectsView {
            on_open: move |id| { nav.push(Route::ObjectOverview { id }); },
            on_new: move |_| { nav.push(Route::ObjectNew {}); },
            on_edit: move |id| { nav.push(Route::ObjectEdit { id }); },
        }
    }
}

#[component]
fn ObjectNew() -> Element {
    let nav = use_navigator();
    rsx! {
        ObjectFormView {
            on_saved: move |id| { nav.push(Route::ObjectOverview { id }); },
            on_cancel: move |_| { nav.push(Route::Objects {}); },
        }
    }
}

#[component]
fn ObjectOverview(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        ObjectOverviewView {
            id: id,
            on_edit: move |_| { nav.push(Route::ObjectEdit { id }); },
            on_deleted: move |_| { nav.push(Route::Objects {}); },
        }
    }
}

#[component]
fn ObjectEdit(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        ObjectFormView {
            id: id,
            on_saved: move |id| { nav.push(Route::ObjectOverview { id }); },
            on_cancel: move |_| { nav.push(Route::ObjectOverview { id }); },
        }
    }
}

#[component]
fn Finance(id: i64) -> Element {
    rsx! {
        FinanceView { object_id: id }
    }
}

#[component]
fn Payouts(id: i64) -> Element {
    rsx! {
        PayoutsView { object_id: id }
    }
}

#[component]
fn Employees() -> Element {
    let nav = use_navigator();
    rsx! {
        EmployeesView {
            on_new: move |_| { nav.push(Route::EmployeeNew {}); },
            on_edit: move |id| { nav.push(Route::EmployeeEdit { id }); },
        }
    }
}

#[component]
fn EmployeeNew() -> Element {
    let nav = use_navigator();
    rsx! {
        EmployeeFormView {
            on_saved: move |_| { nav.push(Route::Employees {}); },
            on_cancel: move |_| { nav.push(Route::Employees {}); },
        }
    }
}

#[component]
fn EmployeeEdit(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        EmployeeFormView {
            id: id,
            on_saved: move |_| { nav.push(Route::Employees {}); },
            on_cancel: move |_| { nav.push(Route::Employees {}); },
        }
    }
}

#[component]
fn Profile() -> Element {
    rsx! {
        ProfileView {}
    }
}

#[component]
fn Portals() -> Element {
    let nav = use_navigator();
    rsx! {
        PortalsView {
            on_edit: move |id| { nav.push(Route::PortalEdit { id }); },
        }
    }
}

#[component]
fn PortalEdit(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        PortalEditView {
            id: id,
            on_saved: move |_| { nav.push(Route::Portals {}); },
            on_cancel: move |_| { nav.push(Route::Portals {}); },
        }
    }
}
