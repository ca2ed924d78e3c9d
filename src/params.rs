use crate::field::{extrared611, mul128, red611};
use crate::poly::mix;

const POLYMUR_ARBITRARY1: u64 = 0x6a09e667f3bcc908;
const POLYMUR_ARBITRARY2: u64 = 0xbb67ae8584caa73b;
const POLYMUR_ARBITRARY3: u64 = 0x3c6ef372fe94f82b;
const POLYMUR_ARBITRARY4: u64 = 0xa54ff53a5f1d36f1;

/// `37^(2^32) mod 2^61 - 1`.
const POW37_2_32: u64 = 559096694736811184;

/// Keys derived from a seed.
///
/// `k` is a generator of the multiplicative group modulo `2^61 - 1` (hence
/// never `0` or `1`), `k2` and `k7` are its precomputed powers, and `s` is
/// added to the mixed polynomial value. Values of this type can only be
/// obtained through the derivation functions and never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashParameters {
    pub(crate) k: u64,
    pub(crate) k2: u64,
    pub(crate) k7: u64,
    pub(crate) s: u64,
}

impl core::fmt::Debug for HashParameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashParameters").finish_non_exhaustive()
    }
}

impl HashParameters {
    /// Derives parameters from a 128-bit seed: the low half seeds `k`, the
    /// high half seeds `s`.
    pub fn new(seed: u128) -> Self {
        let k_seed = seed as u64;
        let s_seed = (seed >> 64) as u64;
        Self::from_u64x2_seed(k_seed, s_seed)
    }

    /// Derives parameters from a single 64-bit seed, expanding it into a
    /// `(k, s)` seed pair first.
    pub fn from_u64_seed(seed: u64) -> Self {
        let (k_seed, s_seed) = split_seed(seed);
        Self::from_u64x2_seed(k_seed, s_seed)
    }

    /// Derives parameters from an explicit `(k, s)` seed pair.
    ///
    /// Every input is accepted. Candidate keys that would weaken the
    /// polynomial are skipped deterministically, so the same pair always
    /// yields the same parameters.
    pub fn from_u64x2_seed(mut k_seed: u64, s_seed: u64) -> Self {
        let s = s_seed ^ POLYMUR_ARBITRARY1;
        let pow37 = pow37_table();

        let mut rejected = 0u32;
        loop {
            k_seed = k_seed.wrapping_add(POLYMUR_ARBITRARY2);
            match generator_candidate(&pow37, k_seed) {
                Some((k, k2, k7)) => {
                    log::trace!("derived polymur parameters after {rejected} rejected candidates");
                    return Self { k, k2, k7, s };
                }
                None => rejected += 1,
            }
        }
    }
}

/// Splits a 64-bit seed into the `(k_seed, s_seed)` pair used by
/// [`HashParameters::from_u64_seed`].
#[inline]
pub(crate) fn split_seed(seed: u64) -> (u64, u64) {
    (
        mix(seed.wrapping_add(POLYMUR_ARBITRARY3)),
        mix(seed.wrapping_add(POLYMUR_ARBITRARY4)),
    )
}

/// `pow37[i] = 37^(2^i)` and `pow37[32 + i] = 37^(2^(32 + i))`.
fn pow37_table() -> [u64; 64] {
    let mut pow37 = [0u64; 64];
    pow37[0] = 37;
    pow37[32] = POW37_2_32;
    for i in 0..31 {
        pow37[i + 1] = extrared611(red611(mul128(pow37[i], pow37[i])));
        pow37[i + 33] = extrared611(red611(mul128(pow37[i + 32], pow37[i + 32])));
    }
    pow37
}

/// Turns a seed into `(k, k^2, k^7)`, or `None` if the candidate must be
/// skipped.
///
/// `k = 37^e` is a generator only when `e` shares no factor with
/// `2^61 - 2 = 2 * 3^2 * 5^2 * 7 * 11 * 13 * 31 * 41 * 61 * 151 * 331 * 1321`.
fn generator_candidate(pow37: &[u64; 64], k_seed: u64) -> Option<(u64, u64, u64)> {
    let mut e = (k_seed >> 3) | 1;
    if e % 3 == 0 {
        return None;
    }
    if ((e % 5) & (e % 7)) == 0 {
        return None;
    }
    if ((e % 11) & (e % 13) & (e % 31)) == 0 {
        return None;
    }
    if ((e % 41) & (e % 61) & (e % 151) & (e % 331) & (e % 1321)) == 0 {
        return None;
    }

    let (mut ka, mut kb): (u64, u64) = (1, 1);
    let mut i: usize = 0;
    while e > 0 {
        if (e & 1) != 0 {
            ka = extrared611(red611(mul128(ka, pow37[i])));
        }
        if (e & 2) != 0 {
            kb = extrared611(red611(mul128(kb, pow37[i + 1])));
        }
        e >>= 2;
        i += 2;
    }
    let k = extrared611(extrared611(red611(mul128(ka, kb))));
    let k2 = extrared611(red611(mul128(k, k)));
    let k3 = red611(mul128(k, k2));
    let k4 = red611(mul128(k2, k2));
    let k7 = extrared611(red611(mul128(k3, k4)));

    // Keeps `k7 + m` and the block sums of the bulk loop from overflowing.
    if k7 < (1_u64 << 60) - (1_u64 << 56) {
        Some((k, k2, k7))
    } else {
        None
    }
}
