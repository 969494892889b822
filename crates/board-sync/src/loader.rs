//! Board Loader
//!
//! Fetches a board's lists, then every list's cards in parallel, and
//! normalizes them into the model. Reads never fail outright: a broken
//! board fetch yields an empty board plus the error, a broken card fetch
//! yields that list with no cards.

use futures::future::join_all;
use serde_json::Value;

use crate::api::{self, BoardApi};
use crate::error::BoardError;
use crate::identity::{CARD_IDENTITY, LIST_IDENTITY};
use crate::model::{Board, Card, List};
use crate::shape::{collection, first_text, text_or};

pub const UNTITLED_LIST: &str = "Untitled";
pub const UNTITLED_CARD: &str = "Untitled Task";
pub const DEFAULT_WORKSPACE_NAME: &str = "TaskFlow";

/// A list whose cards could not be fetched
#[derive(Debug, Clone, PartialEq)]
pub struct Degradation {
    pub list_id: String,
    pub error: BoardError,
}

/// Result of one board load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLoad {
    pub lists: Vec<List>,
    /// Set when the board's list collection itself could not be fetched
    pub failure: Option<BoardError>,
    pub degraded: Vec<Degradation>,
}

impl BoardLoad {
    pub fn board(&self) -> Board {
        Board::new(self.lists.clone())
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Build a list (without cards) from one raw API item
pub fn list_from_raw(raw: &Value) -> List {
    List::new(
        LIST_IDENTITY.resolve(raw, None),
        text_or(raw, &["title", "note"], UNTITLED_LIST),
    )
}

/// Build a card from one raw API item
pub fn card_from_raw(raw: &Value) -> Card {
    Card::new(
        CARD_IDENTITY.resolve(raw, None),
        text_or(raw, &["title", "note"], UNTITLED_CARD),
        first_text(raw, &["note"]).unwrap_or_default(),
    )
}

/// Orders overlapping loads of the same board.
///
/// Each load takes a ticket when it starts. A finished load may install its
/// result only if no later-started load has installed one already, so a slow
/// older response never overwrites a newer board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSequence {
    issued: u64,
    installed: u64,
    in_flight: usize,
}

impl LoadSequence {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.in_flight += 1;
        self.issued
    }

    /// Settle `ticket` with a result in hand; true when it should be installed
    pub fn finish(&mut self, ticket: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket > self.installed {
            self.installed = ticket;
            true
        } else {
            false
        }
    }

    /// Settle `ticket` without a result (the request behind it failed early)
    pub fn abandon(&mut self, _ticket: u64) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

pub struct BoardLoader<'a, A: BoardApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: BoardApi + ?Sized> BoardLoader<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Load every list of `board_id` with its cards
    pub async fn load(&self, board_id: &str) -> BoardLoad {
        let path = api::board_lists_path(board_id);
        let response = match self.api.get(&path).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("[loader] board {} lists unavailable: {}", board_id, e);
                return BoardLoad {
                    failure: Some(e),
                    ..Default::default()
                };
            }
        };

        let raw_lists = collection(&response.body, "cards");
        log::debug!("[loader] board {}: {} lists", board_id, raw_lists.len());

        // All-settle: every branch resolves, failures only empty their own list
        let settled = join_all(raw_lists.iter().map(|raw| self.load_list(raw))).await;

        let mut load = BoardLoad::default();
        for (list, degradation) in settled {
            load.lists.push(list);
            load.degraded.extend(degradation);
        }
        log::info!(
            "[loader] board {} loaded: {} lists, {} cards, {} degraded",
            board_id,
            load.lists.len(),
            load.lists.iter().map(|l| l.cards.len()).sum::<usize>(),
            load.degraded.len()
        );
        load
    }

    async fn load_list(&self, raw: &Value) -> (List, Option<Degradation>) {
        let list = list_from_raw(raw);
        match self.api.get(&api::list_cards_path(&list.id)).await {
            Ok(response) => {
                let cards = collection(&response.body, "tasks").iter().map(card_from_raw).collect();
                (list.with_cards(cards), None)
            }
            Err(error) => {
                log::warn!("[loader] no cards for list {}: {}", list.id, error);
                let degradation = Degradation {
                    list_id: list.id.clone(),
                    error,
                };
                (list, Some(degradation))
            }
        }
    }

    /// Display name of a workspace, or the default when it cannot be read
    pub async fn workspace_name(&self, workspace_id: &str) -> String {
        match self.api.get(&api::workspace_path(workspace_id)).await {
            Ok(response) => ["/data/name", "/name", "/data/title"]
                .iter()
                .find_map(|pointer| {
                    response
                        .body
                        .pointer(pointer)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                })
                .unwrap_or(DEFAULT_WORKSPACE_NAME)
                .to_string(),
            Err(e) => {
                log::warn!("[loader] workspace {} name not found: {}", workspace_id, e);
                DEFAULT_WORKSPACE_NAME.to_string()
            }
        }
    }
}
