use polymur_hasher::{PolymurBuildHasher, PolymurHash, PolymurHashMap, PolymurHasher};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

type DefaultPolymurMap<K, V> = HashMap<K, V, BuildHasherDefault<PolymurHasher>>;

fn main() {
    let mut scores: DefaultPolymurMap<String, u32> = DefaultPolymurMap::default();
    scores.insert("Alice".to_string(), 100);
    scores.insert("Bob".to_string(), 87);
    scores.insert("Charlie".to_string(), 95);

    println!("Scores:");
    for (name, score) in &scores {
        println!("  {}: {}", name, score);
    }

    // A map keyed with its own seed
    let build = PolymurBuildHasher::new(PolymurHash::from_u64_seed(0x5eed));
    let mut seeded: PolymurHashMap<&str, u32> = PolymurHashMap::with_hasher(build);
    seeded.insert("David", 78);
    seeded.entry("Eve").or_insert(92);
    println!("\nSeeded map: {} entries, David = {:?}", seeded.len(), seeded.get("David"));
}
