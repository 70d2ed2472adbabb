//! Error types for hash algorithm selection.

/// Errors that can occur while resolving a hash primitive.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The algorithm name is not one of the built-in digests.
    #[error("unknown hash algorithm {0:?} (expected one of: md5, sha1, sha256, blake3)")]
    UnknownAlgorithm(String),
}
