//! Arithmetic modulo the Mersenne prime `2^61 - 1`.

/// The field prime, `2^61 - 1`.
pub(crate) const P611: u64 = 0x1fffffffffffffff;

#[inline(always)]
pub(crate) fn mul128(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Folds a 128-bit product into 64 bits, congruent modulo `P611`.
///
/// Only a partial reduction: the result is below `2^62` for inputs below
/// `2^125`, not necessarily below `P611`.
#[inline(always)]
pub(crate) fn red611(x: u128) -> u64 {
    ((x as u64) & P611) + ((x >> 61) as u64)
}

#[inline(always)]
pub(crate) fn extrared611(x: u64) -> u64 {
    (x & P611) + (x >> 61)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical611(x: u64) -> u64 {
        let x = extrared611(extrared611(x));
        if x >= P611 {
            x - P611
        } else {
            x
        }
    }

    #[test]
    fn red_is_congruent() {
        let cases = [
            (0u64, 0u64),
            (P611, P611),
            ((1 << 62) - 1, (1 << 62) - 1),
            (0x123456789abcdef, 0xfedcba987654321),
            (P611 - 1, 2),
        ];
        for (a, b) in cases {
            let expected = (mul128(a, b) % P611 as u128) as u64;
            assert_eq!(canonical611(red611(mul128(a, b))), expected);
        }
    }

    #[test]
    fn canonical_representatives() {
        assert_eq!(canonical611(0), 0);
        assert_eq!(canonical611(P611), 0);
        assert_eq!(canonical611(P611 + 1), 1);
        assert_eq!(canonical611(u64::MAX), u64::MAX % P611);
        assert_eq!(canonical611(1 << 61), 1);
    }

    #[test]
    fn extrared_folds_top_bits() {
        assert_eq!(extrared611(1 << 61), 1);
        assert_eq!(extrared611(P611), P611);
        assert_eq!(extrared611(3 << 61), 3);
    }
}
