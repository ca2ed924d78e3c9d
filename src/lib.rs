//! PolymurHash: a seed-keyed universal hash over byte buffers.
//!
//! The input is evaluated as a polynomial over the field of integers modulo
//! `2^61 - 1`, at a secret point derived from the seed, and the result is
//! passed through a murmur-style finalizer. For a random seed, two distinct
//! inputs of at most `n` bytes collide with probability at most about
//! `n * 2^-60.2`. This is not a MAC: it offers no protection once the seed
//! leaks.
//!
//! Digests are bit-compatible with the PolymurHash 2.0 reference.
//!
//! ```
//! use polymur_hasher::PolymurHash;
//!
//! let hasher = PolymurHash::from_u64_seed(42);
//! let h = hasher.hash(b"hello");
//! assert_eq!(h, hasher.hash("hello"));
//! ```
//!
//! # Tweaks
//!
//! A tweak derives independent hash values from one set of parameters. A
//! tweak of `0` passed to [`PolymurHash::hash_with_tweak`] does not mean
//! "zero": it stands for the hasher's default tweak, [`PolymurHash::tweak0`].
//! Use [`PolymurHash::hash_with_exact_tweak`] or [`PolymurHash::hash_opt`]
//! when a literal zero tweak is needed.

mod config;
mod error;
mod field;
mod hasher;
mod params;
mod poly;

pub use config::{HasherConfig, KeySource};
pub use error::{Error, Result};
pub use hasher::{PolymurBuildHasher, PolymurHashMap, PolymurHashSet, PolymurHasher};
pub use params::HashParameters;

/// A hasher: derived parameters plus a default tweak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolymurHash {
    params: HashParameters,
    tweak0: u64,
}

impl PolymurHash {
    /// Creates a hasher from a 128-bit seed.
    pub fn new(seed: u128) -> Self {
        Self::from_params(HashParameters::new(seed))
    }

    /// Creates a hasher from a 64-bit seed.
    pub fn from_u64_seed(seed: u64) -> Self {
        Self::from_params(HashParameters::from_u64_seed(seed))
    }

    /// Creates a hasher from an explicit `(k, s)` seed pair.
    pub fn from_u64x2_seed(k_seed: u64, s_seed: u64) -> Self {
        Self::from_params(HashParameters::from_u64x2_seed(k_seed, s_seed))
    }

    pub fn from_params(params: HashParameters) -> Self {
        Self { params, tweak0: 0 }
    }

    /// Sets the tweak substituted for a zero tweak.
    pub fn with_tweak0(mut self, tweak0: u64) -> Self {
        self.tweak0 = tweak0;
        self
    }

    pub fn params(&self) -> &HashParameters {
        &self.params
    }

    pub fn tweak0(&self) -> u64 {
        self.tweak0
    }

    /// Hashes `buf` with the default tweak.
    pub fn hash(&self, buf: impl AsRef<[u8]>) -> u64 {
        hash(buf.as_ref(), &self.params, self.tweak0)
    }

    /// Hashes `buf` with `tweak`, or with the default tweak if `tweak` is `0`.
    pub fn hash_with_tweak(&self, buf: impl AsRef<[u8]>, tweak: u64) -> u64 {
        hash(buf.as_ref(), &self.params, self.resolve(tweak))
    }

    /// Hashes `buf` with exactly `tweak`, zero included.
    pub fn hash_with_exact_tweak(&self, buf: impl AsRef<[u8]>, tweak: u64) -> u64 {
        hash(buf.as_ref(), &self.params, tweak)
    }

    /// Hashes `buf` with `tweak`, or with the default tweak if `None`.
    pub fn hash_opt(&self, buf: impl AsRef<[u8]>, tweak: Option<u64>) -> u64 {
        hash(buf.as_ref(), &self.params, tweak.unwrap_or(self.tweak0))
    }

    /// Hashes the first `len` bytes of `buf`.
    ///
    /// Fails if `buf` holds fewer than `len` bytes. A zero `tweak` selects the
    /// default tweak.
    pub fn hash_prefix(&self, buf: &[u8], len: usize, tweak: u64) -> Result<u64> {
        let prefix = buf.get(..len).ok_or(Error::LengthOutOfBounds {
            len,
            available: buf.len(),
        })?;
        Ok(self.hash_with_tweak(prefix, tweak))
    }

    /// Hashes the UTF-8 encoding of `s`, without any terminator.
    pub fn hash_str(&self, s: &str, tweak: u64) -> u64 {
        self.hash_with_tweak(s.as_bytes(), tweak)
    }

    /// [`hash_with_tweak`](Self::hash_with_tweak), reinterpreted as a native
    /// signed integer.
    #[cfg(target_pointer_width = "64")]
    pub fn hash_int(&self, buf: impl AsRef<[u8]>, tweak: u64) -> isize {
        self.hash_with_tweak(buf, tweak) as isize
    }

    #[cfg(target_pointer_width = "64")]
    pub fn hash_str_int(&self, s: &str, tweak: u64) -> isize {
        self.hash_str(s, tweak) as isize
    }

    #[inline(always)]
    fn resolve(&self, tweak: u64) -> u64 {
        if tweak != 0 {
            tweak
        } else {
            self.tweak0
        }
    }
}

/// Derives parameters from an explicit `(k, s)` pair.
pub fn derive_parameters(k: u64, s: u64) -> HashParameters {
    HashParameters::from_u64x2_seed(k, s)
}

/// Derives parameters from a 64-bit seed.
pub fn derive_parameters_from_seed(seed: u64) -> HashParameters {
    HashParameters::from_u64_seed(seed)
}

/// Hashes `buf` with `params`, using `tweak` as given.
#[inline]
pub fn hash(buf: &[u8], params: &HashParameters, tweak: u64) -> u64 {
    let h = poly::poly1611(params, buf, tweak);
    poly::mix(h).wrapping_add(params.s)
}
