//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use board_sync::{HttpApi, LoadSequence};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the board from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the board from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// One client for the whole page so connections are pooled
    api: StoredValue<HttpApi, LocalStorage>,
    /// Ordering of overlapping board loads
    loads: StoredValue<LoadSequence>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), api: HttpApi) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new_local(api),
            loads: StoredValue::new(LoadSequence::default()),
        }
    }
    
    /// Trigger a reload of the board
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Handle to the shared client (clones share its connection pool)
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Ticket for a board load that is about to start
    pub fn begin_load(&self) -> u64 {
        self.loads.try_update_value(|s| s.begin()).unwrap_or_default()
    }

    /// True when the load behind `ticket` may install its result
    pub fn finish_load(&self, ticket: u64) -> bool {
        self.loads.try_update_value(|s| s.finish(ticket)).unwrap_or(false)
    }

    pub fn abandon_load(&self, ticket: u64) {
        self.loads.update_value(|s| s.abandon(ticket));
    }

    pub fn is_loading(&self) -> bool {
        self.loads.with_value(|s| s.is_loading())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
