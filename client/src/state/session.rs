//! Session signal: the process-wide "is someone signed in" value.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth flows (sign-in, sign-up, logout) are the only writers. Route gates
//! and the nav bar are readers. The value lives in browser `localStorage` in
//! the `csr` build and in an in-memory map elsewhere; the backend is injected
//! through `SessionSignal` so nothing reaches into storage directly.
//!
//! DESIGN
//! ======
//! Reads are snapshots. A revision counter is bumped on every write so
//! reactive readers can opt in to re-evaluation with `track()`; a tracked
//! re-evaluation is simply a fresh snapshot. Side effects that must follow
//! writes synchronously (route gate redirects) use `subscribe` instead, which
//! calls back inside `write` with the new token.
//!
//! TRADE-OFFS
//! ==========
//! Token presence is treated as proof of authentication. The token is never
//! verified against the identity provider here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use leptos::prelude::*;

use crate::net::types::SignedInUser;

pub const TOKEN_KEY: &str = "userToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const USER_ID_KEY: &str = "userId";

/// Key/value storage the session signal persists into.
///
/// Implementations swallow their own failures: an unreadable store reads as
/// empty and a failed write is dropped.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for non-browser builds and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Browser `localStorage` backend.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("session storage write failed for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("session storage remove failed for {key}");
            }
        }
    }
}

/// A write issued by an auth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    SignIn(SignedInUser),
    Clear,
}

/// Non-secret identity details kept next to the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub email: String,
    pub user_id: Option<String>,
}

type Listener = Arc<dyn Fn(Option<&str>) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Keeps a `subscribe` callback registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct SessionSubscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.lock() {
                listeners.entries.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

/// Shared handle to the session, provided through Leptos context.
#[derive(Clone)]
pub struct SessionSignal {
    backend: Arc<dyn SessionBackend>,
    revision: ArcRwSignal<u64>,
    listeners: Arc<Mutex<Listeners>>,
}

impl SessionSignal {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend, revision: ArcRwSignal::new(0), listeners: Arc::default() }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// The backend appropriate for the current build target.
    pub fn platform() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(Arc::new(LocalStorageBackend))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::in_memory()
        }
    }

    /// Current token, if any. Untracked snapshot; empty values read as absent.
    pub fn read(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn write(&self, update: SessionUpdate) {
        match update {
            SessionUpdate::SignIn(user) => {
                self.backend.set(TOKEN_KEY, &user.token);
                self.backend.set(EMAIL_KEY, &user.email);
                self.backend.set(USER_ID_KEY, &user.user_id);
                log::info!("session stored for {}", user.email);
            }
            SessionUpdate::Clear => {
                self.backend.remove(TOKEN_KEY);
                self.backend.remove(EMAIL_KEY);
                self.backend.remove(USER_ID_KEY);
                log::info!("session cleared");
            }
        }
        self.revision.update(|rev| *rev += 1);
        self.notify();
    }

    /// Call `listener` with the token snapshot after every write, until the
    /// returned subscription is dropped.
    pub fn subscribe(&self, listener: impl Fn(Option<&str>) + Send + Sync + 'static) -> SessionSubscription {
        let Ok(mut listeners) = self.listeners.lock() else {
            log::warn!("session listeners poisoned; subscription ignored");
            return SessionSubscription { id: 0, listeners: Weak::new() };
        };
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push((id, Arc::new(listener)));
        SessionSubscription { id, listeners: Arc::downgrade(&self.listeners) }
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<Listener> = match self.listeners.lock() {
            Ok(listeners) => listeners.entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        let token = self.read();
        for listener in listeners {
            listener(token.as_deref());
        }
    }

    /// Email and user id of the signed-in user. `None` while anonymous.
    pub fn identity(&self) -> Option<SessionIdentity> {
        self.read()?;
        let email = self.backend.get(EMAIL_KEY).unwrap_or_default();
        let user_id = self.backend.get(USER_ID_KEY).filter(|id| !id.is_empty());
        Some(SessionIdentity { email, user_id })
    }

    /// Token, email and user id together; `None` unless all are present.
    pub fn signed_in_user(&self) -> Option<SignedInUser> {
        let token = self.read()?;
        let identity = self.identity()?;
        Some(SignedInUser { token, email: identity.email, user_id: identity.user_id? })
    }

    /// Subscribe the current reactive scope to session writes.
    pub fn track(&self) {
        self.revision.track();
    }

    pub fn revision(&self) -> u64 {
        self.revision.get_untracked()
    }
}

/// Fetch the session from context, falling back to an empty in-memory one.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>().unwrap_or_else(SessionSignal::in_memory)
}
