//! Browser Storage
//!
//! `window.localStorage` as the session cache, plus the current location as
//! route hints.

use board_sync::session::{KeyValueStore, RouteHints};

/// Query keys that may carry a board id
const BOARD_QUERY_KEYS: [&str; 2] = ["board", "id"];

pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable, board id will not be remembered");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[storage] could not write {}: {:?}", key, e);
            }
        }
    }
}

/// Path and board-related query values of the current page
pub fn current_route() -> RouteHints {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return RouteHints::default();
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();

    let query = web_sys::UrlSearchParams::new_with_str(&search)
        .map(|params| {
            BOARD_QUERY_KEYS
                .iter()
                .filter_map(|key| params.get(key).map(|value| (key.to_string(), value)))
                .collect()
        })
        .unwrap_or_default();

    RouteHints::new(path, query)
}
