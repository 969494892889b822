//! Drag Reorder Protocol
//!
//! Two phases: a drag start records which card left which list; a drop on a
//! list moves it there. Purely local, nothing is sent to the server.

use crate::model::Board;

/// What a drag carries from start to drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source_list_id: String,
    pub card_id: String,
}

impl Transfer {
    /// Build from raw transfer data; `None` when either part is missing
    pub fn from_raw(source_list_id: &str, card_id: &str) -> Option<Self> {
        if source_list_id.is_empty() || card_id.is_empty() {
            return None;
        }
        Some(Self {
            source_list_id: source_list_id.to_string(),
            card_id: card_id.to_string(),
        })
    }

    /// Board after dropping on `target_list_id`, or `None` if the drop is a no-op
    /// (same list, stale ids).
    pub fn apply(&self, board: &Board, target_list_id: &str) -> Option<Board> {
        board.move_card(&self.source_list_id, &self.card_id, target_list_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Transfer),
}

/// Drag lifecycle: Idle -> Dragging -> Idle
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Begin dragging; malformed data leaves the session idle
    pub fn start(&mut self, source_list_id: &str, card_id: &str) {
        self.state = match Transfer::from_raw(source_list_id, card_id) {
            Some(transfer) => {
                log::debug!("[drag] start card {} from list {}", card_id, source_list_id);
                DragState::Dragging(transfer)
            }
            None => DragState::Idle,
        };
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finish the drag over `target_list_id`. Always returns to Idle; yields
    /// the new board only when a card actually moved.
    pub fn drop_on(&mut self, board: &Board, target_list_id: &str) -> Option<Board> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(transfer) => {
                let moved = transfer.apply(board, target_list_id);
                if moved.is_some() {
                    log::debug!(
                        "[drag] card {} moved {} -> {}",
                        transfer.card_id,
                        transfer.source_list_id,
                        target_list_id
                    );
                }
                moved
            }
            DragState::Idle => None,
        }
    }
}
