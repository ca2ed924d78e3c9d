use crate::field::{extrared611, mul128, red611};
use crate::params::HashParameters;

const MASK56: u64 = 0x00ffffffffffffff;

/// Evaluates the polynomial over `buf`, starting from `tweak`.
///
/// Inputs of 50 bytes or more go through 49-byte blocks of seven 56-bit
/// words; whatever remains, or a short input, is handled by the
/// size-specific tails, each of which injects the length.
pub(crate) fn poly1611(params: &HashParameters, mut buf: &[u8], tweak: u64) -> u64 {
    let HashParameters { k, k2, k7, .. } = *params;
    let mut m = [0u64; 7];
    let mut poly_acc = tweak;
    if buf.len() <= 7 {
        m[0] = le_u64_0_8(buf);
        return poly_acc.wrapping_add(red611(mul128(
            k.wrapping_add(m[0]),
            k2.wrapping_add(buf.len() as u64),
        )));
    }

    let k3 = red611(mul128(k, k2));
    let k4 = red611(mul128(k2, k2));
    if buf.len() >= 50 {
        let k5 = extrared611(red611(mul128(k, k4)));
        let k6 = extrared611(red611(mul128(k2, k4)));
        let k3 = extrared611(k3);
        let k4 = extrared611(k4);
        let mut h: u64 = 0;
        loop {
            for (i, w) in m.iter_mut().enumerate() {
                *w = le_u64(&buf[7 * i..]) & MASK56;
            }
            let t0 = mul128(k + m[0], k6 + m[1]);
            let t1 = mul128(k2 + m[2], k5 + m[3]);
            let t2 = mul128(k3 + m[4], k4 + m[5]);
            let t3 = mul128(h + m[6], k7);
            let s = t0.wrapping_add(t1).wrapping_add(t2).wrapping_add(t3);
            h = red611(s);
            buf = &buf[49..];
            if buf.len() < 50 {
                break;
            }
        }
        let k14 = red611(mul128(k7, k7));
        let hk14 = red611(mul128(extrared611(h), k14));
        poly_acc = poly_acc.wrapping_add(extrared611(hk14));
    }

    let len = buf.len();
    if len >= 8 {
        m[0] = le_u64(buf) & MASK56;
        m[1] = le_u64(&buf[(len - 7) / 2..]) & MASK56;
        m[2] = le_u64(&buf[len - 8..]) >> 8;
        let t0 = mul128(k2 + m[0], k7.wrapping_add(m[1]));
        let t1 = mul128(k + m[2], k3.wrapping_add(len as u64));
        if len <= 21 {
            return poly_acc.wrapping_add(red611(t0.wrapping_add(t1)));
        }
        m[3] = le_u64(&buf[7..]) & MASK56;
        m[4] = le_u64(&buf[14..]) & MASK56;
        m[5] = le_u64(&buf[len - 21..]) & MASK56;
        m[6] = le_u64(&buf[len - 14..]) & MASK56;
        let t0r = red611(t0);
        let t2 = mul128(k2 + m[3], k7 + m[4]);
        let t3 = mul128(t0r + m[5], k4 + m[6]);
        let s = t1.wrapping_add(t2).wrapping_add(t3);
        return poly_acc.wrapping_add(red611(s));
    }

    // 1 to 7 bytes left over from the bulk loop.
    m[0] = le_u64_0_8(buf);
    poly_acc.wrapping_add(red611(mul128(
        k.wrapping_add(m[0]),
        k2.wrapping_add(len as u64),
    )))
}

/// Murmur-style finalizer applied to the polynomial value.
#[inline(always)]
pub(crate) fn mix(mut x: u64) -> u64 {
    x ^= x >> 32;
    x = x.wrapping_mul(0xe9846af9b1a615d);
    x ^= x >> 32;
    x = x.wrapping_mul(0xe9846af9b1a615d);
    x ^= x >> 28;
    x
}

/// Reads 8 little-endian bytes from the start of `buf`.
#[inline(always)]
fn le_u64(buf: &[u8]) -> u64 {
    let mut tmp = [0u8; 8];
    tmp.copy_from_slice(&buf[..8]);
    u64::from_le_bytes(tmp)
}

/// Packs up to 8 bytes into a word. Short inputs use the first, middle and
/// last byte; longer ones two overlapping 32-bit loads.
#[inline(always)]
fn le_u64_0_8(buf: &[u8]) -> u64 {
    let len = buf.len();
    if len < 4 {
        if len == 0 {
            return 0;
        }
        let mut v = buf[0] as u64;
        v |= (buf[len / 2] as u64) << (8 * (len / 2));
        v |= (buf[len - 1] as u64) << (8 * (len - 1));
        return v;
    }

    let mut tmp = [0u8; 4];
    tmp.copy_from_slice(&buf[0..4]);
    let lo = u32::from_le_bytes(tmp) as u64;
    tmp.copy_from_slice(&buf[len - 4..][..4]);
    let hi = u32::from_le_bytes(tmp) as u64;

    lo | (hi << (8 * (len - 4)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_loads() {
        assert_eq!(le_u64_0_8(&[]), 0);
        assert_eq!(le_u64_0_8(&[0xab]), 0xab);
        assert_eq!(le_u64_0_8(&[1, 2]), 0x0201);
        assert_eq!(le_u64_0_8(&[1, 2, 3]), 0x030201);
        assert_eq!(le_u64_0_8(&[1, 2, 3, 4]), 0x04030201);
        assert_eq!(le_u64_0_8(&[1, 2, 3, 4, 5, 6, 7]), 0x07060504030201);
        assert_eq!(le_u64_0_8(&[1, 2, 3, 4, 5, 6, 7, 8]), 0x0807060504030201);
    }

    #[test]
    fn mix_fixed_points() {
        assert_eq!(mix(0), 0);
        assert_ne!(mix(1), 1);
        assert_ne!(mix(1), mix(2));
    }

    #[test]
    fn tweak_is_the_initial_accumulator() {
        let params = HashParameters::from_u64_seed(9);
        for len in [0, 5, 8, 30, 49, 50, 200] {
            let buf = vec![0x5au8; len];
            let base = poly1611(&params, &buf, 0);
            assert_eq!(poly1611(&params, &buf, 1234), base.wrapping_add(1234));
            assert_eq!(poly1611(&params, &buf, u64::MAX), base.wrapping_sub(1));
        }
    }

    #[test]
    fn every_tail_length_differs() {
        let params = HashParameters::from_u64_seed(3);
        let buf = [0u8; 160];
        let mut seen = std::collections::HashSet::new();
        for len in 0..=buf.len() {
            assert!(seen.insert(poly1611(&params, &buf[..len], 0)), "len {len}");
        }
    }
}
