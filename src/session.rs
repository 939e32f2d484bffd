//! Session token handling
//!
//! `Session` is the explicit session object handed to whoever needs to read
//! or change the token. Where the token actually lives is behind the narrow
//! `TokenStore` trait: browser storage in the web shell, memory elsewhere.

use std::cell::RefCell;
use std::rc::Rc;

/// Persistent backend for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Observable "signed in" bit, e.g. a UI signal the router watches.
pub trait AuthFlag {
    fn get(&self) -> bool;
    fn set(&self, value: bool);
}

/// Wraps a `TokenStore` and mirrors token presence into an `AuthFlag`.
///
/// The flag is only written when its value actually changes, so any number
/// of clears after a 401 produce a single true-to-false transition.
#[derive(Debug, Clone)]
pub struct FlaggedStore<S, F> {
    inner: S,
    flag: F,
}

impl<S: TokenStore, F: AuthFlag> FlaggedStore<S, F> {
    /// Seeds the flag from whatever the inner store already holds.
    pub fn new(inner: S, flag: F) -> Self {
        let store = Self { inner, flag };
        let present = store.inner.load().is_some_and(|t| !t.is_empty());
        store.mirror(present);
        store
    }

    pub fn flag(&self) -> &F {
        &self.flag
    }

    fn mirror(&self, present: bool) {
        if self.flag.get() != present {
            self.flag.set(present);
        }
    }
}

impl<S: TokenStore, F: AuthFlag> TokenStore for FlaggedStore<S, F> {
    fn load(&self) -> Option<String> {
        self.inner.load()
    }

    fn save(&self, token: &str) {
        self.inner.save(token);
        self.mirror(!token.is_empty());
    }

    fn clear(&self) {
        self.inner.clear();
        self.mirror(false);
    }
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_token(&self, token: &str) {
        self.store.save(token);
    }

    /// The stored token; an empty string counts as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn clear_token(&self) {
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
