//! Route definitions for the application

use dioxus::prelude::*;
use partner_core::routing::{guard, GuardDecision};
use partner_core::{AdminPath, Credential, SearchQuery};

use crate::auth::use_auth;
use crate::components::{AdminShell, Redirect, RequireAuth};
use crate::pages::admin::{
    AdminDashboard, AdminLogin, AdminSearch, CareersManager, ContactsManager, GlobalSettings,
    SliderManager,
};
use crate::pages::public::Home;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    // Admin routes
    #[layout(AdminShell)]
        #[route("/admin/login")]
        AdminLogin {},

        #[layout(RequireAuth)]
            #[route("/admin")]
            AdminDashboard {},

            #[route("/admin/settings")]
            GlobalSettings {},

            #[route("/admin/slider")]
            SliderManager {},

            #[route("/admin/contacts")]
            ContactsManager {},

            #[route("/admin/careers")]
            CareersManager {},

            #[route("/admin/search?:q")]
            AdminSearch { q: SearchQuery },
        #[end_layout]
    #[end_layout]

    // Anything else goes to the dashboard (which is itself guarded)
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

impl Route {
    /// The admin view this route renders, if any
    pub fn admin_path(&self) -> Option<AdminPath> {
        match self {
            Route::AdminLogin {} => Some(AdminPath::Login),
            Route::AdminDashboard {} => Some(AdminPath::Dashboard),
            Route::GlobalSettings {} => Some(AdminPath::Settings),
            Route::SliderManager {} => Some(AdminPath::Slider),
            Route::ContactsManager {} => Some(AdminPath::Contacts),
            Route::CareersManager {} => Some(AdminPath::Careers),
            Route::AdminSearch { q } => Some(AdminPath::search(q.as_str())),
            Route::Home {} | Route::Unmatched { .. } => None,
        }
    }

    /// Session guard for this route. The public home page is never guarded.
    pub fn access(&self, credential: Option<&Credential>) -> Option<GuardDecision> {
        match self {
            Route::Home {} => None,
            route => Some(guard(route.admin_path(), credential)),
        }
    }
}

impl From<AdminPath> for Route {
    fn from(path: AdminPath) -> Self {
        match path {
            AdminPath::Login => Route::AdminLogin {},
            AdminPath::Dashboard => Route::AdminDashboard {},
            AdminPath::Settings => Route::GlobalSettings {},
            AdminPath::Slider => Route::SliderManager {},
            AdminPath::Contacts => Route::ContactsManager {},
            AdminPath::Careers => Route::CareersManager {},
            AdminPath::Search { query } => Route::AdminSearch {
                q: SearchQuery::new(query),
            },
        }
    }
}

/// Catch-all: the guard sends unknown paths to the dashboard
#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    match route.access(auth.credential().as_ref()) {
        Some(GuardDecision::Redirect(path)) => {
            tracing::debug!(path = %segments.join("/"), to = %path, "Unmatched route");
            rsx! {
                Redirect { to: Route::from(path) }
            }
        }
        _ => rsx! {},
    }
}
