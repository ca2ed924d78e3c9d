//! [`core::hash::Hasher`] integration, for `HashMap` and friends.

use core::hash::{BuildHasher, Hasher};
use std::sync::OnceLock;

use crate::PolymurHash;

const DEFAULT_SEED: u64 = 0x243f6a8885a308d3;

fn default_hash() -> &'static PolymurHash {
    static DEFAULT: OnceLock<PolymurHash> = OnceLock::new();
    DEFAULT.get_or_init(|| PolymurHash::from_u64_seed(DEFAULT_SEED))
}

/// A streaming [`Hasher`] built on [`PolymurHash`].
///
/// Each `write` hashes its bytes with the digest so far as the tweak, so
/// the result depends on how the input was split across writes. That is
/// fine for `Hash` impls, which always write the same way.
#[derive(Clone, Debug)]
pub struct PolymurHasher {
    hash: PolymurHash,
    state: u64,
}

impl PolymurHasher {
    pub fn with_hash(hash: PolymurHash) -> Self {
        let state = hash.tweak0();
        Self { hash, state }
    }
}

impl Default for PolymurHasher {
    fn default() -> Self {
        Self::with_hash(*default_hash())
    }
}

impl Hasher for PolymurHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = self.hash.hash_with_exact_tweak(bytes, self.state);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Creates [`PolymurHasher`]s sharing one set of parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolymurBuildHasher {
    hash: PolymurHash,
}

impl PolymurBuildHasher {
    pub fn new(hash: PolymurHash) -> Self {
        Self { hash }
    }
}

impl Default for PolymurBuildHasher {
    fn default() -> Self {
        Self::new(*default_hash())
    }
}

impl BuildHasher for PolymurBuildHasher {
    type Hasher = PolymurHasher;

    fn build_hasher(&self) -> PolymurHasher {
        PolymurHasher::with_hash(self.hash)
    }
}

pub type PolymurHashMap<K, V> = std::collections::HashMap<K, V, PolymurBuildHasher>;
pub type PolymurHashSet<T> = std::collections::HashSet<T, PolymurBuildHasher>;
