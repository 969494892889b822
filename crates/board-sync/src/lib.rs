//! Board Sync Core
//!
//! Layered board state synchronization:
//! - identity / shape: tolerant extraction from loosely shaped API responses
//! - model: the in-memory board (lists of cards) and its transitions
//! - loader: remote board -> model, degrading per list
//! - mutations: create / delete / rename against model + remote
//! - drag: two-phase card transfer between lists
//! - session: board id and background cache over an injected key-value store

pub mod api;
pub mod drag;
pub mod error;
pub mod http;
pub mod identity;
pub mod loader;
pub mod model;
pub mod mutations;
pub mod session;
pub mod shape;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiResponse, BoardApi};
pub use drag::{DragSession, DragState, Transfer};
pub use error::{BoardError, BoardResult};
pub use http::HttpApi;
pub use loader::{BoardLoad, BoardLoader, Degradation, LoadSequence};
pub use model::{Board, Card, List, ListPatch};
pub use mutations::{MutationEngine, MutationOutcome, MutationStrategy, Patch};
pub use session::{KeyValueStore, MemoryStore, RouteHints};
