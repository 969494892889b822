//! Notice Bar Component
//!
//! Shows the latest success or error message until dismissed.

use leptos::prelude::*;

use crate::store::{store_clear_notice, use_board_store, BoardStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_board_store();

    move || {
        store.notice().get().map(|notice| {
            let class = if notice.is_error { "notice notice-error" } else { "notice" };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" on:click=move |_| store_clear_notice(&store)>"×"</button>
                </div>
            }
        })
    }
}
