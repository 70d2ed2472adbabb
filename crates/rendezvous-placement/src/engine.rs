//! The rendezvous scoring engine.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use rendezvous_hash::{Digester, HashAlgorithm, score_with};
use tracing::{debug, trace};

use crate::config::{PlacementConfig, RemovalPolicy};
use crate::selection::{ScoredNode, Selection};

/// Highest-random-weight node selector.
///
/// Holds an ordered node set and a digest context. Every selection scores
/// each node as `reduce(digest(key ++ node))` from scratch, so the result
/// for a key depends only on the key and the current membership.
///
/// All operations, reads included, take one lock end-to-end: the digest
/// context is reused across nodes and calls, and feeding it from two threads
/// at once would mix their inputs. Share an engine with `Arc<Rendezvous>`.
///
/// Node identifiers are expected to be distinct. Adding the same identifier
/// twice is accepted but leaves ranking between the copies undefined.
pub struct Rendezvous {
    inner: Mutex<Inner>,
    removal: RemovalPolicy,
}

struct Inner {
    /// Membership in insertion order. Ties are broken by this order.
    nodes: Vec<String>,
    digester: Box<dyn Digester>,
}

impl Rendezvous {
    /// Create an engine scoring with `digester`, seeded with `nodes`.
    pub fn new<I, S>(digester: Box<dyn Digester>, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes: Vec<String> = nodes.into_iter().map(Into::into).collect();
        debug!(
            nodes = nodes.len(),
            digest_size = digester.output_size(),
            "created rendezvous engine"
        );
        Self {
            inner: Mutex::new(Inner { nodes, digester }),
            removal: RemovalPolicy::default(),
        }
    }

    /// Create an engine using one of the built-in digests.
    pub fn with_algorithm<I, S>(algorithm: HashAlgorithm, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(algorithm.digester(), nodes)
    }

    /// Create an engine using the default digest (SHA-256).
    pub fn from_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_algorithm(HashAlgorithm::default(), nodes)
    }

    /// Create an engine from a `[placement]` config section.
    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::with_algorithm(config.algorithm, config.nodes.iter().cloned())
            .with_removal_policy(config.removal)
    }

    /// Set how [`remove_nodes`](Self::remove_nodes) interprets its argument.
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal = policy;
        self
    }

    /// The active removal policy.
    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal
    }

    /// Append nodes to the set.
    pub fn add_nodes<I, S>(&self, nodes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inner = self.lock();
        let before = inner.nodes.len();
        inner.nodes.extend(nodes.into_iter().map(Into::into));
        debug!(
            added = inner.nodes.len() - before,
            nodes = inner.nodes.len(),
            "added nodes"
        );
    }

    /// Remove nodes from the set and return how many were dropped.
    ///
    /// Under [`RemovalPolicy::Exact`] every node whose identifier appears in
    /// `nodes` is removed and the rest keep their relative order. Under
    /// [`RemovalPolicy::ClearWhenOversized`] a list at least as long as the
    /// node set empties it outright.
    pub fn remove_nodes<I, S>(&self, nodes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<S> = nodes.into_iter().collect();
        let mut inner = self.lock();
        let before = inner.nodes.len();

        if self.removal == RemovalPolicy::ClearWhenOversized && requested.len() >= before {
            inner.nodes.clear();
        } else {
            let doomed: HashSet<&str> = requested.iter().map(|name| AsRef::<str>::as_ref(name)).collect();
            inner.nodes.retain(|node| !doomed.contains(node.as_str()));
        }

        let removed = before - inner.nodes.len();
        debug!(
            requested = requested.len(),
            removed,
            nodes = inner.nodes.len(),
            "removed nodes"
        );
        removed
    }

    /// Select the highest-scoring node for `key`.
    ///
    /// The first node in membership order wins among equal scores. An empty
    /// node set returns [`Selection::none`].
    pub fn get_score(&self, key: &[u8]) -> Selection {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let mut best: Option<(usize, u64)> = None;
        for (idx, node) in inner.nodes.iter().enumerate() {
            let score = score_with(inner.digester.as_mut(), key, node);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        let Some((idx, score)) = best else {
            trace!("no nodes to select from");
            return Selection::none();
        };

        let node = inner.nodes[idx].clone();
        trace!(%node, score, "selected node");
        Selection { node, score }
    }

    /// The `n` highest-scoring nodes for `key`, best first.
    ///
    /// When `n` is zero or covers the whole set, every node is returned in
    /// membership order without scoring. Otherwise exactly `n` nodes are
    /// returned in descending score order, equal scores keeping membership
    /// order.
    pub fn get_n_top(&self, n: usize, key: &[u8]) -> Vec<String> {
        let mut inner = self.lock();
        if n == 0 || n >= inner.nodes.len() {
            return inner.nodes.clone();
        }

        let mut ranked = inner.ranked(key);
        ranked.truncate(n);
        ranked.into_iter().map(|scored| scored.node).collect()
    }

    /// Every node with its score for `key`, best first.
    pub fn rank(&self, key: &[u8]) -> Vec<ScoredNode> {
        self.lock().ranked(key)
    }

    /// Snapshot of the node set in membership order.
    pub fn nodes(&self) -> Vec<String> {
        self.lock().nodes.clone()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.lock().nodes.len()
    }

    /// Whether the node set is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().nodes.is_empty()
    }

    /// Whether `node` is a member.
    pub fn contains(&self, node: &str) -> bool {
        self.lock().nodes.iter().any(|n| n == node)
    }

    /// Length in bytes of the digests behind each score.
    pub fn digest_size(&self) -> usize {
        self.lock().digester.output_size()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("rendezvous lock poisoned")
    }
}

impl Inner {
    /// Score every node and sort descending. The sort is stable, so equal
    /// scores stay in membership order.
    fn ranked(&mut self, key: &[u8]) -> Vec<ScoredNode> {
        let mut ranked: Vec<ScoredNode> = self
            .nodes
            .iter()
            .map(|node| ScoredNode {
                node: node.clone(),
                score: score_with(self.digester.as_mut(), key, node),
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl Default for Rendezvous {
    fn default() -> Self {
        Self::from_nodes(Vec::<String>::new())
    }
}

impl fmt::Debug for Rendezvous {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Rendezvous")
            .field("nodes", &inner.nodes)
            .field("digest_size", &inner.digester.output_size())
            .field("removal", &self.removal)
            .finish()
    }
}
