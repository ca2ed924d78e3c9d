//! Declarative hasher configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HashParameters, PolymurHash};

/// Where the parameters of a hasher come from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// A single 64-bit seed, expanded into a key pair.
    Seed(u64),
    /// A 128-bit seed: the low half keys the polynomial, the high half the
    /// output offset.
    Seed128(u128),
    /// An explicit key pair.
    Pair { k: u64, s: u64 },
}

impl Default for KeySource {
    fn default() -> Self {
        KeySource::Seed(0)
    }
}

impl KeySource {
    pub fn derive(self) -> HashParameters {
        match self {
            KeySource::Seed(seed) => HashParameters::from_u64_seed(seed),
            KeySource::Seed128(seed) => HashParameters::new(seed),
            KeySource::Pair { k, s } => HashParameters::from_u64x2_seed(k, s),
        }
    }
}

/// Configuration for a [`PolymurHash`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasherConfig {
    pub key: KeySource,
    /// Tweak used whenever a caller passes a tweak of `0`.
    pub tweak0: u64,
}

impl HasherConfig {
    pub fn new(key: KeySource) -> Self {
        Self { key, tweak0: 0 }
    }

    pub fn tweak0(mut self, tweak0: u64) -> Self {
        self.tweak0 = tweak0;
        self
    }

    pub fn build(&self) -> PolymurHash {
        log::debug!("building polymur hasher from {:?}", self.key);
        PolymurHash::from_params(self.key.derive()).with_tweak0(self.tweak0)
    }
}

impl From<HasherConfig> for PolymurHash {
    fn from(config: HasherConfig) -> Self {
        config.build()
    }
}
