//! Tests for the `std::hash` adapter

#[cfg(test)]
mod tests {
    use palettemath::hashing::water::hash_lanes64;
    use palettemath::hashing::{BuildWaterHasher, WaterHash, WaterHasher, WaterMap};
    use std::hash::{BuildHasher, Hasher};

    // Tests an untouched hasher finishes with the empty-input hash
    // Verified by returning zero from an empty buffer
    #[test]
    fn test_empty_hasher() {
        let hasher = WaterHasher::default();
        let empty: [u8; 0] = [];
        assert_eq!(hasher.finish(), hash_lanes64(&empty));
    }

    // Tests integer writes feed their native-endian bytes
    // Verified by discarding integer writes
    #[test]
    fn test_integer_writes_are_bytes() {
        let mut hasher = WaterHasher::default();
        hasher.write_u32(0x0403_0201);
        assert_eq!(hasher.finish(), hash_lanes64(&0x0403_0201_u32.to_ne_bytes()));
    }

    // Tests hashers from the builder agree for equal keys
    // Verified by seeding each built hasher differently
    #[test]
    fn test_builder_is_deterministic() {
        let build = BuildWaterHasher;
        assert_eq!(build.hash_one("key"), build.hash_one("key"));
        assert_ne!(build.hash_one("key"), build.hash_one("kez"));
    }

    // Tests the map type stores and overwrites entries
    // Verified by making every key hash to the same bucket and comparing nothing
    #[test]
    fn test_water_map() {
        let mut map: WaterMap<u32, &str> = WaterMap::default();
        map.insert(1, "one");
        map.insert(2, "two");
        map.insert(1, "uno");
        assert_eq!(map.get(&1), Some(&"uno"));
        assert_eq!(map.len(), 2);
    }

    // Tests the hasher returns the Water hash of the written bytes
    // Verified by finishing with the 32-bit hash widened
    #[test]
    fn test_finish_matches_byte_hash() {
        let mut hasher = WaterHasher::default();
        hasher.write(b"palette");
        assert_eq!(hasher.finish(), b"palette".water_hash64());
    }

    // Tests split writes hash like one write of the concatenation
    // Verified by hashing each write separately and mixing the results
    #[test]
    fn test_split_writes_concatenate() {
        let mut split = WaterHasher::default();
        split.write(b"pal");
        split.write(b"ette");

        let mut whole = WaterHasher::default();
        whole.write(b"palette");

        assert_eq!(split.finish(), whole.finish());
    }
}
