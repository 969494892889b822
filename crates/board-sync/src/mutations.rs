//! Mutation Engine
//!
//! Create / delete go through the remote API before touching the model;
//! rename and menu state are local only. Two ways of reflecting a confirmed
//! write:
//! - `Reload`: re-fetch the whole board (create list; the new resource's
//!   canonical shape is only known to the server)
//! - `Patch`: a local transition applied to the board as it is when the
//!   response arrives (create card, delete list)
//!
//! A failed write never changes the model and is never retried.

use serde_json::Value;

use crate::api::{self, BoardApi, NewCardPayload, NewListPayload};
use crate::error::{BoardError, BoardResult};
use crate::identity::CREATED_CARD_IDENTITY;
use crate::loader::{BoardLoad, BoardLoader};
use crate::model::{Board, Card, ListPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStrategy {
    Reload,
    Patch,
}

/// Local transition confirmed by the server
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    AppendCard { list_id: String, card: Card },
    RemoveList { list_id: String },
}

impl Patch {
    pub fn apply(&self, board: &Board) -> Board {
        match self {
            Patch::AppendCard { list_id, card } => {
                if board.list(list_id).is_none() {
                    log::warn!("[mutation] card {} created but list {} is no longer in view", card.id, list_id);
                }
                board.append_card(list_id, card.clone())
            }
            Patch::RemoveList { list_id } => board.remove_list(list_id),
        }
    }
}

/// Confirmed write, ready to be applied to the view
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Reloaded(BoardLoad),
    Patched(Patch),
}

impl MutationOutcome {
    pub fn strategy(&self) -> MutationStrategy {
        match self {
            MutationOutcome::Reloaded(_) => MutationStrategy::Reload,
            MutationOutcome::Patched(_) => MutationStrategy::Patch,
        }
    }

    /// Board to render after the write, given the board currently in view
    pub fn apply(&self, current: &Board) -> Board {
        match self {
            MutationOutcome::Reloaded(load) => load.board(),
            MutationOutcome::Patched(patch) => patch.apply(current),
        }
    }
}

fn required<'t>(value: &'t str, field: &'static str) -> BoardResult<&'t str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Validation { field });
    }
    Ok(trimmed)
}

fn response_text(body: &Value, field: &str) -> Option<String> {
    [format!("/data/{}", field), format!("/{}", field)]
        .iter()
        .find_map(|pointer| {
            body.pointer(pointer)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
}

pub struct MutationEngine<'a, A: BoardApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: BoardApi + ?Sized> MutationEngine<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Create a list on the board, then reload the board (`Reload`)
    pub async fn create_list(&self, board_id: Option<&str>, title: &str) -> BoardResult<MutationOutcome> {
        let title = required(title, "title")?;
        let board_id = board_id
            .filter(|id| !id.is_empty())
            .ok_or(BoardError::MissingBoardId)?;

        let payload = NewListPayload::new(board_id, title);
        let body = serde_json::to_value(&payload).map_err(|e| BoardError::network(api::LISTS_PATH, e))?;
        self.api.post(api::LISTS_PATH, &body).await.map_err(|e| {
            log::error!("[mutation] create list '{}' failed: {}", title, e);
            e
        })?;

        log::info!("[mutation] list '{}' created on board {}, reloading", title, board_id);
        let load = BoardLoader::new(self.api).load(board_id).await;
        Ok(MutationOutcome::Reloaded(load))
    }

    /// Create a card; the outcome appends it to `list_id` (`Patch`)
    pub async fn create_card(&self, list_id: &str, text: &str) -> BoardResult<MutationOutcome> {
        let text = required(text, "text")?;

        let payload = NewCardPayload::new(list_id, text);
        let body = serde_json::to_value(&payload).map_err(|e| BoardError::network(api::CARDS_PATH, e))?;
        let response = self.api.post(api::CARDS_PATH, &body).await.map_err(|e| {
            log::error!("[mutation] create card in list {} failed: {}", list_id, e);
            e
        })?;

        let card = Card::new(
            CREATED_CARD_IDENTITY.resolve(&response.body, response.location.as_deref()),
            response_text(&response.body, "title").unwrap_or_else(|| text.to_string()),
            response_text(&response.body, "note").unwrap_or_default(),
        );
        log::debug!("[mutation] card {} created in list {}", card.id, list_id);
        Ok(MutationOutcome::Patched(Patch::AppendCard {
            list_id: list_id.to_string(),
            card,
        }))
    }

    /// Delete a list remotely; the outcome drops it from the board (`Patch`)
    pub async fn delete_list(&self, list_id: &str) -> BoardResult<MutationOutcome> {
        self.api.delete(&api::list_path(list_id)).await.map_err(|e| {
            log::error!("[mutation] delete list {} failed: {}", list_id, e);
            e
        })?;
        log::info!("[mutation] list {} deleted", list_id);
        Ok(MutationOutcome::Patched(Patch::RemoveList {
            list_id: list_id.to_string(),
        }))
    }
}

// ========================
// Local-only transitions
// ========================

/// Open the title editor (closes the menu)
pub fn begin_rename(board: &Board, list_id: &str) -> Board {
    board.patch_list(
        list_id,
        &ListPatch {
            is_editing: Some(true),
            show_menu: Some(false),
            ..Default::default()
        },
    )
}

/// Buffer an in-progress title edit
pub fn edit_title(board: &Board, list_id: &str, title: &str) -> Board {
    board.patch_list(
        list_id,
        &ListPatch {
            title: Some(title.to_string()),
            ..Default::default()
        },
    )
}

/// Close the title editor, keeping whatever was typed
pub fn commit_rename(board: &Board, list_id: &str) -> Board {
    board.patch_list(
        list_id,
        &ListPatch {
            is_editing: Some(false),
            ..Default::default()
        },
    )
}
