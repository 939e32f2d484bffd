//! Router service
//!
//! Wraps the browser History API. Every navigation runs through the core
//! auth gate (`arogyamitra::route::guard`) before the route signal changes,
//! and the injected auth flag is watched so sign-in and sign-out move the
//! visitor without any component navigating by hand.

use arogyamitra::AppRoute;
use arogyamitra::Navigation;
use arogyamitra::route::{guard, return_destination};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        tracing::warn!(path, error = ?e, "history update failed");
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Path the visitor wanted before being sent to login.
    return_to: RwSignal<Option<String>>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let navigation = guard(&current_path(), is_authenticated.get_untracked());
        let (current_route, set_route) = signal(navigation.route());

        let router = Self {
            current_route,
            set_route,
            return_to: RwSignal::new(None),
            is_authenticated,
        };
        // Landing on a guarded URL rewrites it rather than adding an entry.
        if navigation.is_redirect() {
            router.apply(navigation, false);
        }
        router
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigates to `path` through the gate.
    pub fn navigate(&self, path: &str) {
        let navigation = guard(path, self.is_authenticated.get_untracked());
        self.apply(navigation, true);
    }

    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate(route.to_path());
    }

    fn apply(&self, navigation: Navigation, push: bool) {
        if let Navigation::Redirect { to, return_to } = &navigation {
            tracing::info!(to = %to, "redirecting");
            if let Some(path) = return_to {
                self.return_to.set(Some(path.clone()));
            }
        }
        let route = navigation.route();
        write_history(route.to_path(), push);
        self.set_route.set(route);
    }

    /// Back/forward buttons.
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let navigation = guard(&current_path(), router.is_authenticated.get_untracked());
            router.apply(navigation, false);
        });

        if let Some(window) = web_sys::window() {
            let installed = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            if let Err(e) = installed {
                tracing::warn!(error = ?e, "popstate listener not installed");
            }
        }

        // Listener lives as long as the page.
        closure.forget();
    }

    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                let target = return_destination(router.return_to.get_untracked().as_deref());
                router.return_to.set(None);
                tracing::info!(to = %target, "signed in");
                write_history(target.to_path(), true);
                router.set_route.set(target);
            } else if !is_auth && route.requires_auth() {
                tracing::info!(from = %route, "signed out");
                router.return_to.set(Some(route.to_path().to_string()));
                let target = AppRoute::auth_failure_redirect();
                write_history(target.to_path(), true);
                router.set_route.set(target);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// Renders whatever `matcher` returns for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// In-app link that goes through the router instead of reloading.
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(route);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
