//! Construction options for [`Rendezvous`](crate::Rendezvous).

use rendezvous_hash::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// How [`Rendezvous::remove_nodes`](crate::Rendezvous::remove_nodes) treats
/// its argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Remove exactly the nodes named; keep everything else.
    #[default]
    Exact,
    /// Empty the node set when the removal list is at least as long as the
    /// node set, whether or not the names match. Shorter lists fall back to
    /// exact removal. Kept for parity with older deployments.
    ClearWhenOversized,
}

/// `[placement]` options: digest, starting membership, removal policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Digest used to score nodes.
    pub algorithm: HashAlgorithm,
    /// Initial node identifiers.
    pub nodes: Vec<String>,
    /// Removal behavior.
    pub removal: RemovalPolicy,
}
