//! Board View Component
//!
//! Renders the list columns and moves cards between them by drag and drop.
//! Drags are local only; the new list membership is not sent to the API.

use leptos::prelude::*;

use board_sync::DragSession;
use leptos_dragdrop::*;

use crate::components::{AddListColumn, ListColumn};
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let store = use_board_store();

    // Create DnD signals
    let dnd = create_dnd_signals();
    let session = StoredValue::new(DragSession::new());

    // Drag start: Idle -> Dragging
    Effect::new(move |_| {
        if let Some(payload) = dnd.dragging_read.get() {
            session.update_value(|s| s.start(&payload.container_id, &payload.item_id));
        }
    });

    // Drop or cancel: back to Idle
    bind_global_mouseup(
        dnd,
        move |payload: DragPayload, target: DropTarget| {
            let mut drag = session.get_value();
            if !drag.is_dragging() {
                // Mouseup can beat the start effect
                drag.start(&payload.container_id, &payload.item_id);
            }
            let board = store.board().get_untracked();
            match drag.drop_on(&board, target.container_id()) {
                Some(next) => store.board().set(next),
                None => log::debug!("[DND] Drop on {} ignored", target.container_id()),
            }
            session.set_value(drag);
        },
        move || session.update_value(|s| s.cancel()),
    );

    let list_ids = move || {
        store
            .board()
            .read()
            .lists()
            .iter()
            .map(|l| l.id.clone())
            .collect::<Vec<_>>()
    };
    let show_empty = move || store.board().read().is_empty() && !store.loading().get();

    view! {
        <div class="board-lists">
            <For
                each=list_ids
                key=|id| id.clone()
                children=move |list_id| {
                    view! { <ListColumn list_id=list_id dnd=dnd /> }
                }
            />
            
            <AddListColumn />
        </div>
        <Show when=show_empty>
            <p class="board-empty">"No lists yet."</p>
        </Show>
    }
}
