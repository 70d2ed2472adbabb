//! Shared fixtures for engine tests.

use rendezvous_hash::HashAlgorithm;

use crate::Rendezvous;

/// The eight single-letter nodes used by the golden scenarios.
pub const LETTERS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

/// Engine over [`LETTERS`] with the given digest.
pub fn letters(algorithm: HashAlgorithm) -> Rendezvous {
    Rendezvous::with_algorithm(algorithm, LETTERS)
}

/// `count` distinct keys: `key-0`, `key-1`, ...
pub fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i}")).collect()
}
