//! The hash capability injected into the scoring engine.

/// A resettable digest context producing fixed-length output.
///
/// Implementations may carry incremental state between `update` calls, so
/// callers that reuse one context for several inputs must start each input
/// from a reset context. [`finalize_reset`](Digester::finalize_reset) leaves
/// the context reset, which is what [`score_with`](crate::score_with) relies on.
///
/// Must be `Send` so an engine holding a boxed digester can be shared across
/// threads behind a lock.
pub trait Digester: Send {
    /// Feed more input into the context.
    fn update(&mut self, data: &[u8]);

    /// Produce the digest of everything fed since the last reset and reset
    /// the context.
    fn finalize_reset(&mut self) -> Vec<u8>;

    /// Discard any buffered input.
    fn reset(&mut self);

    /// Length in bytes of every digest this context produces.
    fn output_size(&self) -> usize;
}

macro_rules! impl_rustcrypto_digester {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Digester for $ty {
                fn update(&mut self, data: &[u8]) {
                    digest::Digest::update(self, data);
                }

                fn finalize_reset(&mut self) -> Vec<u8> {
                    digest::Digest::finalize_reset(self).to_vec()
                }

                fn reset(&mut self) {
                    digest::Digest::reset(self);
                }

                fn output_size(&self) -> usize {
                    <$ty as digest::Digest>::output_size()
                }
            }
        )*
    };
}

impl_rustcrypto_digester!(md5::Md5, sha1::Sha1, sha2::Sha256);

impl Digester for blake3::Hasher {
    fn update(&mut self, data: &[u8]) {
        blake3::Hasher::update(self, data);
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        let hash = self.finalize();
        blake3::Hasher::reset(self);
        hash.as_bytes().to_vec()
    }

    fn reset(&mut self) {
        blake3::Hasher::reset(self);
    }

    fn output_size(&self) -> usize {
        blake3::OUT_LEN
    }
}
