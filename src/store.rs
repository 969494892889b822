//! Board View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `board`
//! field is the single source of truth the columns render from.

use leptos::prelude::*;
use reactive_stores::Store;
use board_sync::{Board, BoardError, BoardLoad, MutationOutcome};

use crate::context::AppContext;

/// User-visible message (toast replacement)
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Board page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Lists and cards in view
    pub board: Board,
    /// Board resolved for this session
    pub board_id: Option<String>,
    pub workspace_name: String,
    /// Cached background image URL
    pub background: Option<String>,
    /// A full board load is in flight
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl BoardState {
    pub fn new(workspace_name: &str) -> Self {
        Self {
            workspace_name: workspace_name.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the board with `transition(current)`
pub fn store_apply(store: &BoardStore, transition: impl FnOnce(&Board) -> Board) {
    let current = store.board().get_untracked();
    store.board().set(transition(&current));
}

/// Install a finished load, surfacing a failed board fetch
pub fn store_apply_load(store: &BoardStore, load: BoardLoad) {
    if let Some(error) = &load.failure {
        store_notify_error(store, error);
    }
    store.board().set(load.board());
}

/// Start a board load and show the load indicator
pub fn store_begin_load(store: &BoardStore, ctx: &AppContext) -> u64 {
    let ticket = ctx.begin_load();
    store.loading().set(true);
    ticket
}

/// Settle the load behind `ticket`. `None` means it produced nothing to install;
/// a result older than the board already shown is dropped.
pub fn store_finish_load(store: &BoardStore, ctx: &AppContext, ticket: u64, load: Option<BoardLoad>) {
    match load {
        Some(load) if ctx.finish_load(ticket) => store_apply_load(store, load),
        Some(_) => log::debug!("[store] dropping stale load #{}", ticket),
        None => ctx.abandon_load(ticket),
    }
    store.loading().set(ctx.is_loading());
}

/// Apply a confirmed write to the board as it is now
pub fn store_apply_outcome(store: &BoardStore, outcome: MutationOutcome) {
    match outcome {
        MutationOutcome::Reloaded(load) => store_apply_load(store, load),
        MutationOutcome::Patched(patch) => store_apply(store, |board| patch.apply(board)),
    }
}

pub fn store_notify(store: &BoardStore, text: impl Into<String>) {
    store.notice().set(Some(Notice {
        text: text.into(),
        is_error: false,
    }));
}

/// Show `error` unless it is a silently rejected input
pub fn store_notify_error(store: &BoardStore, error: &BoardError) {
    if error.is_silent() {
        return;
    }
    store.notice().set(Some(Notice {
        text: error.to_string(),
        is_error: true,
    }));
}

pub fn store_clear_notice(store: &BoardStore) {
    store.notice().set(None);
}
