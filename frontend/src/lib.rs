//! ArogyaMitra web frontend
//!
//! Leptos shell over the platform-neutral `arogyamitra` core:
//! - `auth`: the browser-backed session and the shared API client
//! - `web::router`: History-API router applying the core auth gate
//! - `components`: pages and feature panels

mod auth;
mod components {
    pub mod chat_panel;
    pub mod dashboard;
    pub mod dashboard_cards;
    pub mod health_assessment;
    pub mod login;
    pub mod nutrition_tracker;
    pub mod register;
    pub mod sidebar;
}

// Browser glue: fetch transport and the router
pub(crate) mod web {
    mod http;
    pub mod router;

    pub use http::FetchHttpClient;
}

use crate::auth::provide_client;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;

use arogyamitra::AppRoute;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // The client owns the session; the router only sees its auth flag.
    let client = provide_client();
    let is_authenticated = client.session().store().flag().signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
