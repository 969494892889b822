//! Card Tile Component
//!
//! A single draggable card inside a list column.

use leptos::prelude::*;

use board_sync::Card;
use leptos_dragdrop::{make_on_mousedown, DndSignals, DragPayload};

#[component]
pub fn CardTile(card: Card, list_id: String, dnd: DndSignals) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, DragPayload::new(list_id, card.id.clone()));

    let card_id = card.id.clone();
    let tile_class = move || {
        if dnd.is_dragging_item(&card_id) { "card-tile dragging" } else { "card-tile" }
    };

    view! {
        <div class=tile_class title=card.note.clone() on:mousedown=on_mousedown>
            {card.text.clone()}
        </div>
    }
}
