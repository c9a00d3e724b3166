//! Widening of primitive element types into 64-bit hash lanes
//!
//! Narrow elements (up to 32 bits) are mixed with the multiply-fold `mum`
//! step; wide elements (64 bits) need the rotating `wow` step to pass the
//! same statistical tests.

/// Lane pattern used for `true`
pub const TRUE_LANE: u64 = 0x9E37_79B9;
/// Lane pattern used for `false`
pub const FALSE_LANE: u64 = 0x7F4A_7C15;

const CANONICAL_NAN_32: u32 = 0x7FC0_0000;
const CANONICAL_NAN_64: u64 = 0x7FF8_0000_0000_0000;

/// An element type that can be fed to the Water hash
///
/// Signed integers sign-extend into the lane, unsigned integers zero-extend.
/// Floating-point values contribute their bit pattern, with every NaN
/// collapsed to the canonical quiet NaN so that equal-looking inputs hash equally.
pub trait Lane: Copy {
    /// Whether this element is 64 bits wide and uses the wide mixing path
    const WIDE: bool;

    /// Widen the element into a 64-bit lane
    fn lane(self) -> u64;
}

impl Lane for bool {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        if self { TRUE_LANE } else { FALSE_LANE }
    }
}

impl Lane for u8 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        u64::from(self)
    }
}

impl Lane for i8 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        i64::from(self) as u64
    }
}

impl Lane for u16 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        u64::from(self)
    }
}

impl Lane for i16 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        i64::from(self) as u64
    }
}

impl Lane for char {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        u64::from(u32::from(self))
    }
}

impl Lane for u32 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        u64::from(self)
    }
}

impl Lane for i32 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        i64::from(self) as u64
    }
}

impl Lane for f32 {
    const WIDE: bool = false;

    fn lane(self) -> u64 {
        let bits = if self.is_nan() {
            CANONICAL_NAN_32
        } else {
            self.to_bits()
        };
        // Float bits behave like a signed 32-bit integer in the lane
        i64::from(bits as i32) as u64
    }
}

impl Lane for u64 {
    const WIDE: bool = true;

    fn lane(self) -> u64 {
        self
    }
}

impl Lane for i64 {
    const WIDE: bool = true;

    fn lane(self) -> u64 {
        self as u64
    }
}

impl Lane for f64 {
    const WIDE: bool = true;

    fn lane(self) -> u64 {
        if self.is_nan() {
            CANONICAL_NAN_64
        } else {
            self.to_bits()
        }
    }
}
