//! In-memory `BoardApi` and board generators for tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use proptest::prelude::*;
use serde_json::{json, Value};

use crate::api::{ApiResponse, BoardApi};
use crate::error::{BoardError, BoardResult};
use crate::model::{Board, Card, List};

#[derive(Default)]
pub struct FakeApi {
    gets: RefCell<HashMap<String, Value>>,
    failing: HashSet<String>,
    posts: HashMap<String, ApiResponse>,
    /// POST path -> GET path whose array receives the posted resource
    echoes: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
    posted: RefCell<Vec<(String, Value)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(mut self, path: &str, body: Value) -> Self {
        self.gets.get_mut().insert(path.to_string(), body);
        self
    }

    /// Any method on `path` fails with a network error
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn with_post(mut self, path: &str, response: ApiResponse) -> Self {
        self.posts.insert(path.to_string(), response);
        self
    }

    /// Successful POSTs to `post_path` show up in the bare array served at `get_path`
    pub fn echoing(mut self, post_path: &str, get_path: &str) -> Self {
        self.echoes.insert(post_path.to_string(), get_path.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.borrow().clone()
    }

    fn record(&self, method: &str, path: &str) -> BoardResult<()> {
        self.calls.borrow_mut().push(format!("{} {}", method, path));
        if self.failing.contains(path) {
            return Err(BoardError::network(path, "503 Service Unavailable"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl BoardApi for FakeApi {
    async fn get(&self, path: &str) -> BoardResult<ApiResponse> {
        self.record("GET", path)?;
        self.gets
            .borrow()
            .get(path)
            .cloned()
            .map(ApiResponse::json)
            .ok_or_else(|| BoardError::network(path, "404 Not Found"))
    }

    async fn post(&self, path: &str, body: &Value) -> BoardResult<ApiResponse> {
        self.record("POST", path)?;
        self.posted.borrow_mut().push((path.to_string(), body.clone()));
        if let Some(get_path) = self.echoes.get(path) {
            let mut gets = self.gets.borrow_mut();
            let served = gets.entry(get_path.clone()).or_insert_with(|| json!([]));
            if let Some(items) = served.as_array_mut() {
                let id = format!("new-{}", items.len() + 1);
                items.push(json!({ "id": id, "title": body["title"].clone() }));
            }
        }
        Ok(self.posts.get(path).cloned().unwrap_or_default())
    }

    async fn delete(&self, path: &str) -> BoardResult<()> {
        self.record("DELETE", path)
    }
}

/// Upper bound on yields while a card fetch waits for company
const GATE_MAX_YIELDS: usize = 64;

/// Wraps a `FakeApi` and holds every card fetch open until `gate` of them
/// are in flight together (or the yield budget runs out), recording the peak.
pub struct GatedApi {
    inner: FakeApi,
    gate: usize,
    in_flight: Cell<usize>,
    peak: Cell<usize>,
}

impl GatedApi {
    pub fn new(inner: FakeApi, gate: usize) -> Self {
        Self {
            inner,
            gate,
            in_flight: Cell::new(0),
            peak: Cell::new(0),
        }
    }

    /// Most card fetches that were ever pending at once
    pub fn peak(&self) -> usize {
        self.peak.get()
    }
}

#[async_trait(?Send)]
impl BoardApi for GatedApi {
    async fn get(&self, path: &str) -> BoardResult<ApiResponse> {
        if !path.ends_with("/tasks") {
            return self.inner.get(path).await;
        }
        self.in_flight.set(self.in_flight.get() + 1);
        self.peak.set(self.peak.get().max(self.in_flight.get()));
        for _ in 0..GATE_MAX_YIELDS {
            if self.in_flight.get() >= self.gate {
                break;
            }
            tokio::task::yield_now().await;
        }
        let response = self.inner.get(path).await;
        self.in_flight.set(self.in_flight.get() - 1);
        response
    }

    async fn post(&self, path: &str, body: &Value) -> BoardResult<ApiResponse> {
        self.inner.post(path, body).await
    }

    async fn delete(&self, path: &str) -> BoardResult<()> {
        self.inner.delete(path).await
    }
}

/// Boards of 1..6 lists with 0..5 cards each; list and card ids are unique
/// and some menus start open.
pub fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0usize..5, any::<bool>()), 1..6).prop_map(|shape| {
        let lists = shape
            .into_iter()
            .enumerate()
            .map(|(i, (cards, menu_open))| {
                let cards = (0..cards)
                    .map(|j| Card::new(format!("c{}-{}", i, j), format!("card {}", j), ""))
                    .collect();
                let mut list = List::new(format!("l{}", i), format!("List {}", i)).with_cards(cards);
                list.show_menu = menu_open;
                list
            })
            .collect();
        Board::new(lists)
    })
}
