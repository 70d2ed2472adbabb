//! Results returned by selection calls.

use std::fmt;

/// The winning node for a key, and its score.
///
/// An empty node set yields [`Selection::none`]: an empty identifier with
/// score zero. Check [`is_none`](Selection::is_none) before routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Identifier of the winning node.
    pub node: String,
    /// The winning score.
    pub score: u64,
}

impl Selection {
    /// The "no eligible node" sentinel.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this is the empty-set sentinel.
    pub fn is_none(&self) -> bool {
        self.node.is_empty() && self.score == 0
    }

    /// The winning node, or `None` for the sentinel.
    pub fn node(&self) -> Option<&str> {
        if self.is_none() {
            None
        } else {
            Some(&self.node)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("<no node>")
        } else {
            write!(f, "{} (score {})", self.node, self.score)
        }
    }
}

/// A node paired with its score for one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredNode {
    /// Node identifier.
    pub node: String,
    /// Score for the key this ranking was computed for.
    pub score: u64,
}

impl From<ScoredNode> for Selection {
    fn from(scored: ScoredNode) -> Self {
        Self {
            node: scored.node,
            score: scored.score,
        }
    }
}
