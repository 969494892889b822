//! Add List Column Component
//!
//! Trailing column that creates a new list on the board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_sync::{MutationEngine, MutationOutcome};

use crate::context::use_app_context;
use crate::store::{
    store_apply_outcome, store_begin_load, store_finish_load, store_notify_error, use_board_store,
    BoardStateStoreFields,
};

#[component]
pub fn AddListColumn() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        let name = new_name.get_untracked();
        let board_id = store.board_id().get_untracked();
        set_pending.set(true);
        
        spawn_local(async move {
            let api = ctx.api();
            // The reload after a create is ordered with trigger loads
            let ticket = store_begin_load(&store, &ctx);
            match MutationEngine::new(&api).create_list(board_id.as_deref(), &name).await {
                Ok(MutationOutcome::Reloaded(load)) => {
                    store_finish_load(&store, &ctx, ticket, Some(load));
                    set_new_name.set(String::new());
                }
                Ok(outcome) => {
                    store_finish_load(&store, &ctx, ticket, None);
                    store_apply_outcome(&store, outcome);
                    set_new_name.set(String::new());
                }
                Err(e) => {
                    store_finish_load(&store, &ctx, ticket, None);
                    store_notify_error(&store, &e);
                }
            }
            set_pending.set(false);
        });
    };
    
    view! {
        <div class="add-list-column">
            {move || if adding.get() {
                view! {
                    <form class="add-list-form" on:submit=on_add>
                        <p class="add-list-heading">"Create List"</p>
                        <input
                            type="text"
                            placeholder="List name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <div class="form-actions">
                            <button type="submit" disabled=move || pending.get()>"Add"</button>
                            <button type="button" on:click=move |_| set_adding.set(false)>"Cancel"</button>
                        </div>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="add-list-btn" on:click=move |_| set_adding.set(true)>
                        "+ Add List"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
