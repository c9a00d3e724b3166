//! The Water hash: 4-wide unrolled mixing with branchless-style tail cases
//!
//! Bulk input is consumed four lanes at a time. Two lane pairs are mixed,
//! the first pair is folded into the running seed, and the result is mixed
//! with the second pair. The final 0-3 lanes go through a fixed tail switch
//! whose cases use distinct constants, then the seed is salted with the length
//! and avalanched.

use crate::hashing::lanes::Lane;

/// Salt for the length multiplier in the finalizer
pub const B0: u64 = 0xA076_1D64_78BD_642F;
/// First lane mask
pub const B1: u64 = 0xE703_7ED1_A0B4_28DB;
/// Second lane mask
pub const B2: u64 = 0x8EBC_6AF0_9C88_C6E3;
/// Third lane mask
pub const B3: u64 = 0x5899_65CC_7537_4CC3;
/// Fourth lane mask
pub const B4: u64 = 0x1D8E_4E27_C47D_124F;
/// Tail mask for the wide path
pub const B5: u64 = 0xEB44_ACCA_B455_D165;

/// Initial seed for narrow lanes, 64-bit output
pub const NARROW_SEED_64: u64 = 0x7DDC_1606_C2A7_53B9;
/// Initial seed for narrow lanes, 32-bit output
pub const NARROW_SEED_32: u64 = 0xFC63_7ED1_A0C7_A964;
/// Initial seed for wide lanes, 64-bit output
pub const WIDE_SEED_64: u64 = 0x1E98_AE18_CA35_1B7D;
/// Initial seed for wide lanes, 32-bit output
pub const WIDE_SEED_32: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Multiply two lanes and fold the upper 32 bits back into the product
#[inline]
pub const fn mum(a: u64, b: u64) -> u64 {
    let n = a.wrapping_mul(b);
    n.wrapping_sub(n >> 32)
}

/// Rotate-xor both operands into each other before multiplying
///
/// Used for 64-bit lanes, where a plain multiply leaves too much of the
/// upper half unmixed.
#[inline]
pub const fn wow(a: u64, b: u64) -> u64 {
    let n = (a ^ b.rotate_left(39)).wrapping_mul(b ^ a.rotate_left(39));
    n ^ (n >> 32)
}

fn narrow<T: Lane>(data: &[T], mut seed: u64) -> u64 {
    let len = data.len() as u64;
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        if let &[a, b, c, d] = chunk {
            seed = mum(
                mum(a.lane() ^ B1, b.lane() ^ B2).wrapping_add(seed),
                mum(c.lane() ^ B3, d.lane() ^ B4),
            );
        }
    }
    seed = match *chunks.remainder() {
        [] => mum(B1 ^ seed, B4.wrapping_add(seed)),
        [x] => mum(seed ^ B3, B4 ^ x.lane()),
        [x, y] => mum(seed ^ x.lane(), B3 ^ y.lane()),
        [x, y, z, ..] => mum(seed ^ x.lane() ^ (y.lane() << 16), B1 ^ z.lane()),
    };
    (seed ^ (seed << 16)).wrapping_mul(len ^ B0)
}

fn wide<T: Lane>(data: &[T], mut seed: u64) -> u64 {
    let len = data.len() as u64;
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        if let &[a, b, c, d] = chunk {
            seed = wow(
                wow(a.lane() ^ B1, b.lane() ^ B2).wrapping_add(seed),
                wow(c.lane() ^ B3, d.lane() ^ B4),
            );
        }
    }
    seed = match *chunks.remainder() {
        [] => wow(B1.wrapping_sub(seed), B4.wrapping_add(seed)),
        [x] => wow(B5.wrapping_sub(seed), B3 ^ x.lane()),
        [x, y] => wow(x.lane().wrapping_sub(seed), B0 ^ y.lane()),
        [x, y, z, ..] => wow(x.lane().wrapping_sub(seed), B2 ^ y.lane())
            .wrapping_add(wow(B5 ^ seed, B4 ^ z.lane())),
    };
    (seed ^ (seed << 16)).wrapping_mul(len ^ B0 ^ (seed >> 32))
}

const fn avalanche64(seed: u64) -> u64 {
    seed.wrapping_sub(seed >> 31).wrapping_add(seed << 33)
}

const fn fold32(seed: u64) -> u32 {
    seed.wrapping_sub(seed >> 32) as u32
}

/// 64-bit Water hash of a lane slice
pub fn hash_lanes64<T: Lane>(data: &[T]) -> u64 {
    if T::WIDE {
        avalanche64(wide(data, WIDE_SEED_64))
    } else {
        avalanche64(narrow(data, NARROW_SEED_64))
    }
}

/// 32-bit Water hash of a lane slice
pub fn hash_lanes32<T: Lane>(data: &[T]) -> u32 {
    if T::WIDE {
        fold32(wide(data, WIDE_SEED_32))
    } else {
        fold32(narrow(data, NARROW_SEED_32))
    }
}

/// Anything that has a Water hash
///
/// Implemented for lane slices, arrays and vectors, strings, smart pointers
/// and `Option`, where `None` plays the role of a null reference and hashes to 0.
pub trait WaterHash {
    /// 32-bit fingerprint
    fn water_hash32(&self) -> u32;

    /// 64-bit fingerprint
    fn water_hash64(&self) -> u64;
}

impl<T: Lane> WaterHash for [T] {
    fn water_hash32(&self) -> u32 {
        hash_lanes32(self)
    }

    fn water_hash64(&self) -> u64 {
        hash_lanes64(self)
    }
}

impl<T: Lane, const N: usize> WaterHash for [T; N] {
    fn water_hash32(&self) -> u32 {
        hash_lanes32(self.as_slice())
    }

    fn water_hash64(&self) -> u64 {
        hash_lanes64(self.as_slice())
    }
}

impl<T: Lane> WaterHash for Vec<T> {
    fn water_hash32(&self) -> u32 {
        hash_lanes32(self.as_slice())
    }

    fn water_hash64(&self) -> u64 {
        hash_lanes64(self.as_slice())
    }
}

// Strings hash their UTF-16 code units, like a char sequence would
impl WaterHash for str {
    fn water_hash32(&self) -> u32 {
        let units: Vec<u16> = self.encode_utf16().collect();
        hash_lanes32(&units)
    }

    fn water_hash64(&self) -> u64 {
        let units: Vec<u16> = self.encode_utf16().collect();
        hash_lanes64(&units)
    }
}

impl WaterHash for String {
    fn water_hash32(&self) -> u32 {
        self.as_str().water_hash32()
    }

    fn water_hash64(&self) -> u64 {
        self.as_str().water_hash64()
    }
}

impl<T: WaterHash + ?Sized> WaterHash for &T {
    fn water_hash32(&self) -> u32 {
        (**self).water_hash32()
    }

    fn water_hash64(&self) -> u64 {
        (**self).water_hash64()
    }
}

impl<T: WaterHash + ?Sized> WaterHash for Box<T> {
    fn water_hash32(&self) -> u32 {
        (**self).water_hash32()
    }

    fn water_hash64(&self) -> u64 {
        (**self).water_hash64()
    }
}

impl<T: WaterHash> WaterHash for Option<T> {
    fn water_hash32(&self) -> u32 {
        self.as_ref().map_or(0, WaterHash::water_hash32)
    }

    fn water_hash64(&self) -> u64 {
        self.as_ref().map_or(0, WaterHash::water_hash64)
    }
}

/// 64-bit hash of possibly-absent data; `None` hashes to 0
pub fn hash64<T: WaterHash + ?Sized>(data: Option<&T>) -> u64 {
    data.map_or(0, WaterHash::water_hash64)
}

/// 32-bit hash of possibly-absent data; `None` hashes to 0
pub fn hash32<T: WaterHash + ?Sized>(data: Option<&T>) -> u32 {
    data.map_or(0, WaterHash::water_hash32)
}

fn item_hashes<I>(items: I) -> Vec<i32>
where
    I: IntoIterator,
    I::Item: WaterHash,
{
    items
        .into_iter()
        .map(|item| item.water_hash32() as i32)
        .collect()
}

/// 64-bit hash of a sequence of hashable items
///
/// Each item is reduced to its 32-bit hash first, so nested arrays and
/// generic containers all go through the narrow path.
pub fn hash64_items<I>(items: I) -> u64
where
    I: IntoIterator,
    I::Item: WaterHash,
{
    hash_lanes64(&item_hashes(items))
}

/// 32-bit hash of a sequence of hashable items
pub fn hash32_items<I>(items: I) -> u32
where
    I: IntoIterator,
    I::Item: WaterHash,
{
    hash_lanes32(&item_hashes(items))
}
