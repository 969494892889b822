//! Session Cache
//!
//! Board id resolution and the last-used board / background cache. Storage
//! is injected so the browser's localStorage and tests share one code path.
//! The background URL is written by whatever picks it; the board only reads it.

use std::cell::RefCell;
use std::collections::HashMap;

pub const CURRENT_BOARD_KEY: &str = "currentBoardId";
pub const BOARD_BACKGROUND_KEY: &str = "boardBackground";

/// Simple string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Path and query of the current location
#[derive(Debug, Clone, Default)]
pub struct RouteHints {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RouteHints {
    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    fn query_value(&self, name: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(k, v)| k == name && !v.is_empty())
            .map(|(_, v)| v.clone())
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Last path segment, when it is purely numeric (the `/board/:id` route parameter)
    fn numeric_tail(&self) -> Option<String> {
        self.segments().last().filter(|s| is_numeric(s)).map(str::to_string)
    }

    /// First purely numeric path segment
    pub fn workspace_id(&self) -> Option<String> {
        self.segments().find(|s| is_numeric(s)).map(str::to_string)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve the board in view: route parameter, query string, then the cached
/// last board. A resolved id is written back to the cache.
pub fn resolve_board_id(hints: &RouteHints, store: &dyn KeyValueStore) -> Option<String> {
    let id = hints
        .numeric_tail()
        .or_else(|| hints.query_value("board"))
        .or_else(|| hints.query_value("id"))
        .or_else(|| store.get(CURRENT_BOARD_KEY).filter(|v| !v.is_empty()));

    if let Some(id) = &id {
        store.set(CURRENT_BOARD_KEY, id);
    }
    id
}

pub fn cached_background(store: &dyn KeyValueStore) -> Option<String> {
    store.get(BOARD_BACKGROUND_KEY).filter(|v| !v.is_empty())
}
