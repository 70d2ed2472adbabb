//! Highest-random-weight (rendezvous) hashing for deterministic node selection.
//!
//! Every lookup scores each node as `reduce(digest(key ++ node))` and picks
//! the highest score, or ranks the top N. Adding or removing a node only
//! reassigns the keys that node wins or loses; every other key keeps its
//! node. There is no ring and no virtual nodes: scores are recomputed per
//! call from the current node set.
//!
//! - [`Rendezvous`] — the scoring engine, safe to share across threads.
//! - [`PlacementConfig`] — serde-deserializable construction options.
//! - [`migrations`] — which keys move between two engine states.

mod config;
mod engine;
mod migration;
mod selection;


pub use config::{PlacementConfig, RemovalPolicy};
pub use engine::Rendezvous;
pub use migration::{Migration, migrations};
pub use rendezvous_hash::{Digester, HashAlgorithm};
pub use selection::{ScoredNode, Selection};
