use polymur_hasher::PolymurHash;

fn main() {
    // Create a hasher with a default seed
    let hasher = PolymurHash::new(0);

    let data = b"Hello, world!";
    let hash = hasher.hash(data);
    println!("Hash of {:?}: 0x{:016x}", data, hash);

    // Text is hashed as its UTF-8 bytes
    assert_eq!(hasher.hash_str("Hello, world!", 0), hash);

    // Using different seeds produces different hashes
    let hasher_with_seed = PolymurHash::from_u64_seed(0xDEADBEEF);
    println!("Hash with custom seed: 0x{:016x}", hasher_with_seed.hash(data));

    // Lengths are checked instead of trusted
    match hasher.hash_prefix(data, 64, 0) {
        Ok(h) => println!("Prefix hash: 0x{:016x}", h),
        Err(e) => println!("Rejected: {}", e),
    }
}
