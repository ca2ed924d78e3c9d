use std::collections::HashSet;

use polymur_hasher::{derive_parameters, hash, HasherConfig, KeySource, PolymurHash};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

#[test]
fn boundary_sizes() {
    let hasher = PolymurHash::from_u64_seed(37);
    let expected: [(usize, u64); 14] = [
        (0, 0x109ba9e6c0efc6c5),
        (1, 0x1c7ab669c7ca1a7d),
        (7, 0x23cdd8069dd19554),
        (8, 0x47fb75aa37556ddc),
        (9, 0x279706249162aed9),
        (15, 0x79f7f7314632aeed),
        (16, 0xa5d80f69dbca2c68),
        (17, 0xafceaf1d2f79abf0),
        (21, 0xbb4fee93d3f983d5),
        (22, 0x63b0cada392c8c9e),
        (49, 0x078b5eb649e19cd3),
        (50, 0xf32ba900f45139cf),
        (99, 0x000c7355752870c1),
        (10_000, 0x12ef6801089288dc),
    ];
    let mut seen = HashSet::new();
    for (len, digest) in expected {
        let buf = pattern(len);
        assert_eq!(hasher.hash(&buf), digest, "len {len}");
        assert_eq!(hasher.hash(&buf), digest, "len {len} repeated");
        assert!(seen.insert(digest));
    }
}

#[test]
fn appending_a_byte_changes_the_hash() {
    let hasher = PolymurHash::from_u64_seed(0xdeadbeef);
    for len in [0, 1, 6, 7, 8, 20, 21, 48, 49, 50, 97, 98, 1000] {
        let buf = pattern(len);
        for x in [0u8, 1, 0x80, 0xff] {
            let mut longer = buf.clone();
            longer.push(x);
            assert_ne!(hasher.hash(&buf), hasher.hash(&longer), "len {len} + {x:#x}");
        }
    }
}

#[test]
fn zero_key_does_not_collapse() {
    let params = derive_parameters(0, 0);
    let a = hash(&[0, 0, 0, 0], &params, 0);
    let b = hash(&[1, 0, 0, 0], &params, 0);
    assert_eq!(a, 0x6cacc297f5643b3f);
    assert_eq!(b, 0x2113a6d38b7e5941);
}

#[test]
fn long_text() {
    let hasher = HasherConfig::new(KeySource::Pair {
        k: (1 << 31) - 1,
        s: (1 << 61) - 1,
    })
    .build();
    let long = vec!["abc"; 100_000].join("d");
    assert_eq!(long.len(), 399_999);
    let h = hasher.hash_str(&long, 0);
    assert_eq!(h, 0x84500f3e43455231);
    assert_eq!(hasher.hash_str(&long, 0), h);
}

#[test]
fn seeds_and_pairs_do_not_collide() {
    let seeds = [0, 1, (1u64 << 31) - 1, u64::MAX];
    let buf = [11u8, 13, 17, 19];
    let mut seen = HashSet::new();
    for seed in seeds {
        for hasher in [
            PolymurHash::from_u64_seed(seed),
            PolymurHash::from_u64x2_seed(seed, seed),
        ] {
            assert!(seen.insert(hasher.hash(buf)), "seed {seed}");
        }
    }
}

#[test]
fn shared_across_threads() {
    let hasher = PolymurHash::from_u64_seed(5);
    let expected: Vec<u64> = (0..64).map(|n| hasher.hash(pattern(n))).collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (n, digest) in expected.iter().enumerate() {
                    assert_eq!(hasher.hash(pattern(n)), *digest);
                }
            });
        }
    });
}
