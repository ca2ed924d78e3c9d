use polymur_hasher::{HasherConfig, KeySource};

fn main() {
    let hasher = HasherConfig::new(KeySource::Seed128(42)).tweak0(0x1234).build();

    let data = b"Important message";

    println!("Hashing {:?} with different tweaks:", data);
    for tweak in 0..5 {
        let hash = hasher.hash_with_tweak(data, tweak);
        println!("  Tweak {}: 0x{:016x}", tweak, hash);
    }

    // Tweak 0 stands for the configured default, not for zero
    assert_eq!(hasher.hash_with_tweak(data, 0), hasher.hash_with_tweak(data, 0x1234));
    assert_eq!(hasher.hash(data), hasher.hash_with_tweak(data, 0x1234));
    println!(
        "\nLiteral zero tweak: 0x{:016x}",
        hasher.hash_with_exact_tweak(data, 0)
    );

    // Simple bloom filter with three hash functions
    let num_bits = 64;
    let mut bloom_filter = vec![false; num_bits];
    let item = b"example@email.com";
    for k in 1..=3 {
        let bit_index = (hasher.hash_with_tweak(item, k) % num_bits as u64) as usize;
        bloom_filter[bit_index] = true;
        println!("  Set bit {} for hash function {}", bit_index, k);
    }
}
