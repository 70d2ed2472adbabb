//! Built-in hash algorithms selectable by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digester::Digester;
use crate::error::HashError;

/// Names a built-in digest family.
///
/// Resolved once into a [`Digester`] when an engine is built; nothing
/// downstream branches on the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5, 16-byte digest.
    Md5,
    /// SHA-1, 20-byte digest.
    Sha1,
    /// SHA-256, 32-byte digest.
    #[default]
    Sha256,
    /// BLAKE3, 32-byte digest.
    Blake3,
}

impl HashAlgorithm {
    /// Every built-in algorithm, in declaration order.
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Blake3];

    /// Build a fresh digest context for this algorithm.
    pub fn digester(self) -> Box<dyn Digester> {
        match self {
            Self::Md5 => Box::new(md5::Md5::default()),
            Self::Sha1 => Box::new(sha1::Sha1::default()),
            Self::Sha256 => Box::new(sha2::Sha256::default()),
            Self::Blake3 => Box::new(blake3::Hasher::new()),
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 | Self::Blake3 => 32,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == wanted)
            .ok_or_else(|| HashError::UnknownAlgorithm(s.to_string()))
    }
}
