//! The once-per-session splash flag and the gate that reads it on page load.
use thiserror::Error;
use tracing::debug;

use std::collections::HashMap;

/// Storage key of the flag written once the splash intro has played.
pub const SPLASH_FLAG_KEY: &str = "splashShown";
/// Value stored under [`SPLASH_FLAG_KEY`].
pub const SPLASH_FLAG_VALUE: &str = "true";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Session-scoped key-value storage.
///
/// The browser implementation wraps `sessionStorage`; hosts without one can use
/// [`MemoryStore`].
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`SessionStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store in which the splash has already been shown.
    pub fn with_splash_shown() -> Self {
        let mut store = Self::new();
        store
            .entries
            .insert(SPLASH_FLAG_KEY.to_string(), SPLASH_FLAG_VALUE.to_string());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns whether the splash flag is set in `store`. Empty values count as unset.
pub fn splash_shown<S: SessionStore + ?Sized>(store: &S) -> bool {
    store
        .get(SPLASH_FLAG_KEY)
        .is_some_and(|value| !value.is_empty())
}

/// Outcome of the page-load check.
#[derive(Debug)]
pub enum GateDecision<S> {
    /// The page has no splash element. Neither the flag nor the lock is touched.
    NoSplash,
    /// The splash already played this session; its element is discarded.
    Skip,
    /// First visit this session. The store moves on to the sequencer, which owns the write.
    Play(S),
}

impl<S> GateDecision<S> {
    pub fn plays_splash(&self) -> bool {
        matches!(self, GateDecision::Play(_))
    }
}

/// Decides, once per page load, whether the splash intro plays.
pub struct SessionGate<S> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        SessionGate { store }
    }

    /// Consumes the gate and reports whether the splash should play.
    pub fn decide(self, splash_present: bool) -> GateDecision<S> {
        if !splash_present {
            debug!("no splash element on this page");
            return GateDecision::NoSplash;
        }

        if splash_shown(&self.store) {
            debug!("splash already shown this session");
            GateDecision::Skip
        } else {
            debug!("first visit this session, playing splash");
            GateDecision::Play(self.store)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_splash_on_first_visit() {
        let decision = SessionGate::new(MemoryStore::new()).decide(true);

        assert!(decision.plays_splash());
    }

    #[test]
    fn skips_splash_once_flag_is_set() {
        let decision = SessionGate::new(MemoryStore::with_splash_shown()).decide(true);

        assert!(matches!(decision, GateDecision::Skip));
    }

    #[test]
    fn ignores_flag_when_page_has_no_splash() {
        let mut store = MockSessionStore::new();
        store.expect_get().never();
        store.expect_set().never();

        let decision = SessionGate::new(store).decide(false);

        assert!(matches!(decision, GateDecision::NoSplash));
    }

    #[test]
    fn treats_empty_flag_value_as_unset() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .withf(|key| key == SPLASH_FLAG_KEY)
            .times(1)
            .returning(|_| Some(String::new()));

        let decision = SessionGate::new(store).decide(true);

        assert!(decision.plays_splash());
    }

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(SPLASH_FLAG_KEY), None);

        store.set(SPLASH_FLAG_KEY, SPLASH_FLAG_VALUE).unwrap();

        assert_eq!(store.get(SPLASH_FLAG_KEY), Some("true".to_string()));
        assert!(splash_shown(&store));
    }
}
