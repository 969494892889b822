//! List Column Component
//!
//! One list: title (inline rename), action menu, its cards and the add-card form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_sync::mutations::{begin_rename, commit_rename, edit_title};
use board_sync::MutationEngine;
use leptos_dragdrop::{make_on_container_mouseenter, make_on_mouseleave, DndSignals};

use crate::components::{AddCardForm, CardTile, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::store::{
    store_apply, store_apply_outcome, store_notify, store_notify_error, use_board_store,
    BoardStateStoreFields,
};

#[component]
pub fn ListColumn(list_id: String, dnd: DndSignals) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    let id = StoredValue::new(list_id.clone());
    let list = Memo::new(move |_| store.board().read().list(&id.get_value()).cloned());

    // Separate memos so typing in the title doesn't rebuild the header
    let editing = Memo::new(move |_| list.get().is_some_and(|l| l.is_editing));
    let menu_open = Memo::new(move |_| list.get().is_some_and(|l| l.show_menu));
    let title = move || list.get().map(|l| l.title).unwrap_or_default();
    let cards = move || list.get().map(|l| l.cards).unwrap_or_default();
    let is_empty = move || list.get().is_some_and(|l| l.cards.is_empty());

    // DnD: the whole column is the drop target
    let on_mouseenter = make_on_container_mouseenter(dnd, list_id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);
    let column_class = move || {
        if dnd.is_target_container(&id.get_value()) { "list-column drop-target" } else { "list-column" }
    };

    let on_delete = Callback::new(move |_| {
        let list_id = id.get_value();
        spawn_local(async move {
            let api = ctx.api();
            match MutationEngine::new(&api).delete_list(&list_id).await {
                Ok(outcome) => {
                    store_apply_outcome(&store, outcome);
                    store_notify(&store, "List deleted");
                }
                Err(e) => store_notify_error(&store, &e),
            }
        });
    });

    view! {
        <div class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="list-header">
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="list-title-input"
                            autofocus=true
                            prop:value=title
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_apply(&store, |board| edit_title(board, &id.get_value(), &value));
                            }
                            on:blur=move |_| store_apply(&store, |board| commit_rename(board, &id.get_value()))
                        />
                    }.into_any()
                } else {
                    view! { <h2 class="list-title">{title}</h2> }.into_any()
                }}
                
                <div class="list-menu">
                    <button
                        class="list-menu-btn"
                        on:click=move |_| store_apply(&store, |board| board.toggle_menu(&id.get_value()))
                    >
                        "⋯"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="list-menu-popup">
                            <button
                                class="list-edit-btn"
                                on:click=move |_| store_apply(&store, |board| begin_rename(board, &id.get_value()))
                            >
                                "Edit"
                            </button>
                            <DeleteConfirmButton
                                button_class="list-delete-btn"
                                label="Delete"
                                on_confirm=on_delete
                            />
                        </div>
                    </Show>
                </div>
            </div>
            
            <div class="list-cards">
                <For
                    each=cards
                    // Text is part of the key so edited cards re-render
                    key=|card| (card.id.clone(), card.text.clone())
                    children=move |card| {
                        view! { <CardTile card=card list_id=id.get_value() dnd=dnd /> }
                    }
                />
                <Show when=is_empty>
                    <p class="list-empty">"No tasks yet."</p>
                </Show>
            </div>
            
            <AddCardForm list_id=list_id />
        </div>
    }
}
