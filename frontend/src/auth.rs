//! Browser session
//!
//! The token lives in `localStorage`; a reactive flag mirrors whether one is
//! present so the router can follow sign-in, sign-out and 401s without the
//! API client knowing anything about navigation.

use crate::web::FetchHttpClient;
use arogyamitra::{ApiClient, AuthFlag, ClientConfig, FlaggedStore, Session, TokenStore};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const TOKEN_STORAGE_KEY: &str = "arogyamitra_token";

pub type BrowserTokenStore = FlaggedStore<LocalTokenStore, SignalFlag>;
pub type AppClient = ApiClient<FetchHttpClient, BrowserTokenStore>;

/// Token persisted in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok()
    }

    fn save(&self, token: &str) {
        if let Err(e) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
            tracing::warn!(error = %e, "could not persist token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

/// Reactive authenticated flag injected into the router.
#[derive(Debug, Clone, Copy)]
pub struct SignalFlag(RwSignal<bool>);

impl SignalFlag {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn signal(&self) -> Signal<bool> {
        let flag = self.0;
        Signal::derive(move || flag.get())
    }
}

impl AuthFlag for SignalFlag {
    fn get(&self) -> bool {
        self.0.get_untracked()
    }

    fn set(&self, value: bool) {
        self.0.set(value);
    }
}

/// Builds the client and puts it in context.
pub fn provide_client() -> AppClient {
    let client = ApiClient::new(
        ClientConfig::from_build_env(),
        FetchHttpClient,
        Session::new(FlaggedStore::new(LocalTokenStore, SignalFlag::new())),
    );
    tracing::debug!(base_url = client.config().base_url(), "api client ready");
    provide_context(client.clone());
    client
}

pub fn use_client() -> AppClient {
    expect_context::<AppClient>()
}
