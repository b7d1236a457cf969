//! aarch64 backing: NEON `uint64x2_t` for two lanes.
//!
//! NEON is baseline on aarch64. The four- and eight-lane types are composed
//! from pairs of this type by `portable.rs`.

use core::arch::aarch64::*;
use core::fmt;

use super::Lanes;

#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct U64x2(uint64x2_t);

impl U64x2 {
    #[inline(always)]
    pub fn new(words: [u64; 2]) -> Self {
        Self(unsafe { vld1q_u64(words.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [u64; 2] {
        let mut out = [0u64; 2];
        unsafe { vst1q_u64(out.as_mut_ptr(), self.0) };
        out
    }
}

impl fmt::Debug for U64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("U64x2").field(&self.to_array()).finish()
    }
}

impl Lanes for U64x2 {
    const WIDTH: usize = 2;

    #[inline(always)]
    fn splat(word: u64) -> Self {
        Self(unsafe { vdupq_n_u64(word) })
    }

    #[inline(always)]
    fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
        let w0 = f(0);
        let w1 = f(1);
        Self::new([w0, w1])
    }

    #[inline(always)]
    fn store(self, out: &mut [u64]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        unsafe { vst1q_u64(out.as_mut_ptr(), self.0) };
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        // NEON has no 64-bit lane multiply; go through the scalar units
        let a = self.to_array();
        let b = rhs.to_array();
        Self::new([a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])])
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(k as i64)) })
    }

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        debug_assert!(k < 64);
        // USHL with a negative count is a logical right shift
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(-(k as i64))) })
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> bool {
        unsafe {
            let m = vceqq_u64(self.0, rhs.0);
            vgetq_lane_u64::<0>(m) & vgetq_lane_u64::<1>(m) == u64::MAX
        }
    }
}
