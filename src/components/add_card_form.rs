//! Add Card Form Component
//!
//! Inline task creation at the bottom of a list. The typed text survives a
//! failed create so it can be retried.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_sync::MutationEngine;

use crate::context::use_app_context;
use crate::store::{store_apply_outcome, store_notify_error, use_board_store};

#[component]
pub fn AddCardForm(list_id: String) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();
    let list_id = StoredValue::new(list_id);

    let (open, set_open) = signal(false);
    let (text, set_text) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let add_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // One create at a time per form
        if pending.get_untracked() { return; }
        let value = text.get_untracked();
        set_pending.set(true);
        
        spawn_local(async move {
            let api = ctx.api();
            match MutationEngine::new(&api).create_card(&list_id.get_value(), &value).await {
                Ok(outcome) => {
                    store_apply_outcome(&store, outcome);
                    set_text.set(String::new());
                    set_open.set(false);
                }
                Err(e) => store_notify_error(&store, &e),
            }
            set_pending.set(false);
        });
    };

    move || if open.get() {
        view! {
            <form class="add-card-form" on:submit=add_card>
                <textarea
                    placeholder="Enter task title..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <div class="form-actions">
                    <button type="submit" disabled=move || pending.get()>"Add"</button>
                    <button
                        type="button"
                        on:click=move |_| {
                            set_open.set(false);
                            set_text.set(String::new());
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        }.into_any()
    } else {
        view! {
            <button class="add-card-btn" on:click=move |_| set_open.set(true)>"+ Add Task"</button>
        }.into_any()
    }
}
