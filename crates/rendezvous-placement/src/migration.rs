//! Key movement between two engine states.

use crate::engine::Rendezvous;

/// A key whose winning node changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// The key that must move.
    pub key: Vec<u8>,
    /// Node that won the key before the change.
    pub from: String,
    /// Node that wins it after the change.
    pub to: String,
}

/// Compute which keys change owner between `old` and `new`.
///
/// Keys with no owner on either side (empty node set) are skipped. With
/// rendezvous hashing, adding a node only yields migrations *to* that node
/// and removing one only yields migrations *from* it.
pub fn migrations<K: AsRef<[u8]>>(
    old: &Rendezvous,
    new: &Rendezvous,
    keys: &[K],
) -> Vec<Migration> {
    let mut moved = Vec::new();

    for key in keys {
        let key = key.as_ref();
        let before = old.get_score(key);
        let after = new.get_score(key);
        if before.is_none() || after.is_none() || before.node == after.node {
            continue;
        }
        moved.push(Migration {
            key: key.to_vec(),
            from: before.node,
            to: after.node,
        });
    }

    moved
}
