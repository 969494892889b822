//! TaskFlow Board App
//!
//! Resolves which board to show, loads it, and lays out the board page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use board_sync::session::{cached_background, resolve_board_id};
use board_sync::{BoardLoader, HttpApi};

use crate::components::{BoardView, NoticeBar, TitleBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::{current_route, BrowserStore};
use crate::store::{store_begin_load, store_finish_load, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // State
    let store = Store::new(BoardState::new(&config.default_workspace_name));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), HttpApi::new(config.api_base_url.clone()));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Resolve board + background once per session
    let browser_store = BrowserStore::new();
    let route = current_route();
    let board_id = resolve_board_id(&route, &browser_store);
    if board_id.is_none() {
        log::warn!("[APP] No board id found in route, query or cache");
    }
    store.board_id().set(board_id);
    store.background().set(cached_background(&browser_store));

    // Workspace name for the title bar
    if let Some(workspace_id) = route.workspace_id() {
        spawn_local(async move {
            let api = ctx.api();
            let name = BoardLoader::new(&api).workspace_name(&workspace_id).await;
            store.workspace_name().set(name);
        });
    }

    // Load the board when the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(board_id) = store.board_id().get_untracked() else {
            return;
        };
        let ticket = store_begin_load(&store, &ctx);
        log::info!("[APP] Loading board {}, trigger={}, load #{}", board_id, trigger, ticket);
        spawn_local(async move {
            let api = ctx.api();
            let load = BoardLoader::new(&api).load(&board_id).await;
            store_finish_load(&store, &ctx, ticket, Some(load));
        });
    });

    let page_style = move || {
        store
            .background()
            .get()
            .map(|url| format!("background-image: url({}); background-size: cover; background-position: center;", url))
            .unwrap_or_default()
    };

    view! {
        <div class="board-page" style=page_style>
            <TitleBar />
            <NoticeBar />
            <main class="board-main">
                <BoardView />
            </main>
        </div>
    }
}
