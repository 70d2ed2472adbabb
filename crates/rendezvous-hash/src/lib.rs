//! Hash primitives for rendezvous scoring.
//!
//! This crate provides:
//! - [`Digester`] — the injected hash capability: a resettable, fixed-length digest.
//! - [`HashAlgorithm`] — configuration enum naming the built-in digests
//!   (MD5, SHA-1, SHA-256, BLAKE3), resolved once into a boxed [`Digester`].
//! - [`reduce`] and [`score_with`] — the fixed digest-to-score reduction and
//!   the `key ++ node` scoring protocol shared by every selection.

mod algorithm;
mod digester;
mod error;
mod score;

pub use algorithm::HashAlgorithm;
pub use digester::Digester;
pub use error::HashError;
pub use score::{reduce, score_with};
