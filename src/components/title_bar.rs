//! Title Bar Component
//!
//! Workspace name, load indicator and manual refresh.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn TitleBar() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    view! {
        <header class="title-bar">
            <h1 class="workspace-name">{move || store.workspace_name().get()}</h1>
            <Show when=move || store.loading().get()>
                <span class="loading-indicator">"Loading…"</span>
            </Show>
            <button
                class="refresh-btn"
                disabled=move || store.board_id().get().is_none()
                on:click=move |_| ctx.reload()
            >
                "Refresh"
            </button>
        </header>
    }
}
