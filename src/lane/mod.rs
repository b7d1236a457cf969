//! Packed 64-bit lanes and the primitive operations the generator
//! recurrences are written against.
//!
//! The packed types (`U64x2`, `U64x4`, `U64x8`) are opaque: which hardware
//! register backs them is decided at build time from the target's advertised
//! vector extensions. The backing changes how many lanes advance per
//! instruction, never the produced sequences.

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub(crate) mod neon;

pub(crate) mod portable;

/// Highest lane count any packed type exposes.
pub(crate) const MAX_LANES: usize = 8;

/// A fixed-width pack of independent 64-bit lanes.
///
/// Every operation is lane-wise; no implementation may move data across
/// lanes. Lane `k` is element `k` in memory order on extraction.
pub trait Lanes: Copy + core::fmt::Debug {
    /// Number of independent 64-bit lanes.
    const WIDTH: usize;

    /// Broadcasts one word into every lane.
    fn splat(word: u64) -> Self;

    /// Builds a pack by calling `f` once per lane, in ascending lane order.
    fn from_lane_fn(f: impl FnMut(usize) -> u64) -> Self;

    /// Writes the lanes into `out` in ascending lane order.
    ///
    /// `out` must hold exactly `WIDTH` words.
    fn store(self, out: &mut [u64]);

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Lane-wise low 64 bits of the product.
    fn wrapping_mul(self, rhs: Self) -> Self;

    fn xor(self, rhs: Self) -> Self;

    fn or(self, rhs: Self) -> Self;

    /// Lane-wise logical shift left. `k` must be in `0..64`.
    fn shl(self, k: u32) -> Self;

    /// Lane-wise logical shift right. `k` must be in `0..64`.
    fn shr(self, k: u32) -> Self;

    /// Lane-wise 64-bit circular left shift. `k` must be in `1..64`.
    #[inline(always)]
    fn rotl(self, k: u32) -> Self {
        // sanity check: k == 0 would turn the complement shift into x >> 64
        debug_assert!(k >= 1 && k < 64);
        self.shl(k).or(self.shr(64 - k))
    }

    /// True iff every lane matches exactly.
    fn lanes_eq(self, rhs: Self) -> bool;
}

impl Lanes for u64 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn splat(word: u64) -> Self {
        word
    }

    #[inline(always)]
    fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
        f(0)
    }

    #[inline(always)]
    fn store(self, out: &mut [u64]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out[0] = self;
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        debug_assert!(k < 64);
        self << k
    }

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        debug_assert!(k < 64);
        self >> k
    }

    #[inline(always)]
    fn rotl(self, k: u32) -> Self {
        debug_assert!(k >= 1 && k < 64);
        self.rotate_left(k)
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> bool {
        self == rhs
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
pub use self::x86::U64x2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub use self::neon::U64x2;
#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
pub use self::portable::U64x2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use self::x86::U64x4;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub use self::portable::U64x4;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512dq"
))]
pub use self::x86::U64x8;
#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512dq"
)))]
pub use self::portable::U64x8;
