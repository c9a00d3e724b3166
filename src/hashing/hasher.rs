//! `std::hash` adapter so Water hashes can key standard collections

use crate::hashing::water::hash_lanes64;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

/// Streaming hasher that buffers written bytes and Water-hashes them on finish
#[derive(Clone, Debug, Default)]
pub struct WaterHasher {
    bytes: Vec<u8>,
}

impl Hasher for WaterHasher {
    fn finish(&self) -> u64 {
        hash_lanes64(&self.bytes)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}

/// Builds fresh [`WaterHasher`]s
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildWaterHasher;

impl BuildHasher for BuildWaterHasher {
    type Hasher = WaterHasher;

    fn build_hasher(&self) -> WaterHasher {
        WaterHasher::default()
    }
}

/// `HashMap` keyed through the Water hash
pub type WaterMap<K, V> = HashMap<K, V, BuildWaterHasher>;
