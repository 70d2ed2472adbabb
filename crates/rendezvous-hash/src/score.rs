//! Digest-to-score reduction and the per-node scoring protocol.

use crate::digester::Digester;

/// Reduce a digest to a score by summing its bytes.
///
/// A `u64` accumulator cannot overflow for any digest shorter than
/// 2^56 bytes.
pub fn reduce(digest: &[u8]) -> u64 {
    digest.iter().map(|&b| u64::from(b)).sum()
}

/// Score one `(key, node)` pair: `reduce(digest(key ++ node))`.
///
/// The context is reset before the key is fed and left reset by
/// `finalize_reset`, so the result depends only on `key` and `node`
/// no matter what the context saw before.
pub fn score_with(digester: &mut dyn Digester, key: &[u8], node: &str) -> u64 {
    digester.reset();
    digester.update(key);
    digester.update(node.as_bytes());
    let digest = digester.finalize_reset();
    debug_assert_eq!(
        digest.len(),
        digester.output_size(),
        "digester returned a digest of the wrong length"
    );
    reduce(&digest)
}
