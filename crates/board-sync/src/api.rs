//! Remote API Seam
//!
//! The transport the core talks to. In the browser this is `HttpApi`; tests
//! script an in-memory implementation.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::BoardResult;

/// Parsed body of a successful call plus the `Location` header, if sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub body: Value,
    pub location: Option<String>,
}

impl ApiResponse {
    pub fn json(body: Value) -> Self {
        Self { body, location: None }
    }
}

/// get / post / delete against logical API paths; non-2xx is an error
#[async_trait(?Send)]
pub trait BoardApi {
    async fn get(&self, path: &str) -> BoardResult<ApiResponse>;

    async fn post(&self, path: &str, body: &Value) -> BoardResult<ApiResponse>;

    async fn delete(&self, path: &str) -> BoardResult<()>;
}

// ========================
// Paths
// ========================

pub const LISTS_PATH: &str = "/cards";
pub const CARDS_PATH: &str = "/tasks";

pub fn board_ref(board_id: &str) -> String {
    format!("/boards/{}", board_id)
}

pub fn list_path(list_id: &str) -> String {
    format!("/cards/{}", list_id)
}

pub fn board_lists_path(board_id: &str) -> String {
    format!("/boards/{}/cards", board_id)
}

pub fn list_cards_path(list_id: &str) -> String {
    format!("/cards/{}/tasks", list_id)
}

pub fn workspace_path(workspace_id: &str) -> String {
    format!("/workspaces/{}", workspace_id)
}

// ========================
// Payloads
// ========================

/// Body of `POST /cards` (a list, in board terms)
#[derive(Debug, Serialize)]
pub struct NewListPayload<'a> {
    pub title: &'a str,
    pub note: &'a str,
    pub board: String,
    pub position: i32,
}

impl<'a> NewListPayload<'a> {
    pub fn new(board_id: &str, title: &'a str) -> Self {
        Self {
            title,
            note: title,
            board: board_ref(board_id),
            position: 1,
        }
    }
}

/// Body of `POST /tasks` (a card, in board terms)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardPayload<'a> {
    pub title: &'a str,
    pub note: &'a str,
    pub card: String,
    pub started_at: String,
    pub ended_at: String,
    pub position: i32,
}

impl<'a> NewCardPayload<'a> {
    pub fn new(list_id: &str, text: &'a str) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            title: text,
            note: text,
            card: list_path(list_id),
            started_at: now.clone(),
            ended_at: now,
            position: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(board_lists_path("4"), "/boards/4/cards");
        assert_eq!(list_cards_path("12"), "/cards/12/tasks");
        assert_eq!(list_path("12"), "/cards/12");
        assert_eq!(workspace_path("2"), "/workspaces/2");
    }

    #[test]
    fn test_card_payload_shape() {
        let value = serde_json::to_value(NewCardPayload::new("12", "Write docs")).unwrap();
        assert_eq!(value["title"], "Write docs");
        assert_eq!(value["note"], "Write docs");
        assert_eq!(value["card"], "/cards/12");
        assert_eq!(value["position"], 1);
        assert_eq!(value["startedAt"], value["endedAt"]);
        assert!(value["startedAt"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_list_payload_shape() {
        let value = serde_json::to_value(NewListPayload::new("4", "Backlog")).unwrap();
        assert_eq!(value["board"], "/boards/4");
        assert_eq!(value["title"], "Backlog");
        assert_eq!(value["note"], "Backlog");
    }
}
