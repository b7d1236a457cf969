//! Portable backings for targets (or widths) without a matching vector
//! extension.
//!
//! `U64x2` falls back to a plain two-word array only when neither SSE2 nor
//! NEON is available. The wider types compose two packs of the next width
//! down, so a four-lane generator still runs on 128-bit registers when only
//! SSE2 or NEON is present.

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
pub use self::two::U64x2;

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
mod two {
    use crate::lane::Lanes;

    #[derive(Clone, Copy, Debug)]
    pub struct U64x2([u64; 2]);

    impl U64x2 {
        #[inline(always)]
        pub fn new(words: [u64; 2]) -> Self {
            Self(words)
        }

        #[inline(always)]
        pub fn to_array(self) -> [u64; 2] {
            self.0
        }
    }

    impl Lanes for U64x2 {
        const WIDTH: usize = 2;

        #[inline(always)]
        fn splat(word: u64) -> Self {
            Self([word; 2])
        }

        #[inline(always)]
        fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
            let w0 = f(0);
            let w1 = f(1);
            Self([w0, w1])
        }

        #[inline(always)]
        fn store(self, out: &mut [u64]) {
            debug_assert_eq!(out.len(), Self::WIDTH);
            out.copy_from_slice(&self.0);
        }

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_add(rhs.0[0]),
                self.0[1].wrapping_add(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn wrapping_mul(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_mul(rhs.0[0]),
                self.0[1].wrapping_mul(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn xor(self, rhs: Self) -> Self {
            Self([self.0[0] ^ rhs.0[0], self.0[1] ^ rhs.0[1]])
        }

        #[inline(always)]
        fn or(self, rhs: Self) -> Self {
            Self([self.0[0] | rhs.0[0], self.0[1] | rhs.0[1]])
        }

        #[inline(always)]
        fn shl(self, k: u32) -> Self {
            debug_assert!(k < 64);
            Self([self.0[0] << k, self.0[1] << k])
        }

        #[inline(always)]
        fn shr(self, k: u32) -> Self {
            debug_assert!(k < 64);
            Self([self.0[0] >> k, self.0[1] >> k])
        }

        #[inline(always)]
        fn lanes_eq(self, rhs: Self) -> bool {
            self.0 == rhs.0
        }
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub use self::four::U64x4;

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
mod four {
    use crate::lane::{Lanes, U64x2};

    /// Four lanes as a pair of two-lane packs.
    #[derive(Clone, Copy, Debug)]
    pub struct U64x4([U64x2; 2]);

    impl U64x4 {
        #[inline(always)]
        pub fn new(words: [u64; 4]) -> Self {
            Self([
                U64x2::new([words[0], words[1]]),
                U64x2::new([words[2], words[3]]),
            ])
        }

        #[inline(always)]
        pub fn to_array(self) -> [u64; 4] {
            let lo = self.0[0].to_array();
            let hi = self.0[1].to_array();
            [lo[0], lo[1], hi[0], hi[1]]
        }
    }

    impl Lanes for U64x4 {
        const WIDTH: usize = 4;

        #[inline(always)]
        fn splat(word: u64) -> Self {
            Self([U64x2::splat(word); 2])
        }

        #[inline(always)]
        fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
            let lo = U64x2::from_lane_fn(&mut f);
            let hi = U64x2::from_lane_fn(|k| f(k + 2));
            Self([lo, hi])
        }

        #[inline(always)]
        fn store(self, out: &mut [u64]) {
            debug_assert_eq!(out.len(), Self::WIDTH);
            self.0[0].store(&mut out[..2]);
            self.0[1].store(&mut out[2..]);
        }

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_add(rhs.0[0]),
                self.0[1].wrapping_add(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn wrapping_mul(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_mul(rhs.0[0]),
                self.0[1].wrapping_mul(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn xor(self, rhs: Self) -> Self {
            Self([self.0[0].xor(rhs.0[0]), self.0[1].xor(rhs.0[1])])
        }

        #[inline(always)]
        fn or(self, rhs: Self) -> Self {
            Self([self.0[0].or(rhs.0[0]), self.0[1].or(rhs.0[1])])
        }

        #[inline(always)]
        fn shl(self, k: u32) -> Self {
            Self([self.0[0].shl(k), self.0[1].shl(k)])
        }

        #[inline(always)]
        fn shr(self, k: u32) -> Self {
            Self([self.0[0].shr(k), self.0[1].shr(k)])
        }

        #[inline(always)]
        fn lanes_eq(self, rhs: Self) -> bool {
            self.0[0].lanes_eq(rhs.0[0]) && self.0[1].lanes_eq(rhs.0[1])
        }
    }
}

#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512dq"
)))]
pub use self::eight::U64x8;

#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512dq"
)))]
mod eight {
    use crate::lane::{Lanes, U64x4};

    /// Eight lanes as a pair of four-lane packs.
    #[derive(Clone, Copy, Debug)]
    pub struct U64x8([U64x4; 2]);

    impl U64x8 {
        #[inline(always)]
        pub fn new(words: [u64; 8]) -> Self {
            Self([
                U64x4::new([words[0], words[1], words[2], words[3]]),
                U64x4::new([words[4], words[5], words[6], words[7]]),
            ])
        }

        #[inline(always)]
        pub fn to_array(self) -> [u64; 8] {
            let mut out = [0u64; 8];
            self.0[0].store(&mut out[..4]);
            self.0[1].store(&mut out[4..]);
            out
        }
    }

    impl Lanes for U64x8 {
        const WIDTH: usize = 8;

        #[inline(always)]
        fn splat(word: u64) -> Self {
            Self([U64x4::splat(word); 2])
        }

        #[inline(always)]
        fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
            let lo = U64x4::from_lane_fn(&mut f);
            let hi = U64x4::from_lane_fn(|k| f(k + 4));
            Self([lo, hi])
        }

        #[inline(always)]
        fn store(self, out: &mut [u64]) {
            debug_assert_eq!(out.len(), Self::WIDTH);
            self.0[0].store(&mut out[..4]);
            self.0[1].store(&mut out[4..]);
        }

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_add(rhs.0[0]),
                self.0[1].wrapping_add(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn wrapping_mul(self, rhs: Self) -> Self {
            Self([
                self.0[0].wrapping_mul(rhs.0[0]),
                self.0[1].wrapping_mul(rhs.0[1]),
            ])
        }

        #[inline(always)]
        fn xor(self, rhs: Self) -> Self {
            Self([self.0[0].xor(rhs.0[0]), self.0[1].xor(rhs.0[1])])
        }

        #[inline(always)]
        fn or(self, rhs: Self) -> Self {
            Self([self.0[0].or(rhs.0[0]), self.0[1].or(rhs.0[1])])
        }

        #[inline(always)]
        fn shl(self, k: u32) -> Self {
            Self([self.0[0].shl(k), self.0[1].shl(k)])
        }

        #[inline(always)]
        fn shr(self, k: u32) -> Self {
            Self([self.0[0].shr(k), self.0[1].shr(k)])
        }

        #[inline(always)]
        fn lanes_eq(self, rhs: Self) -> bool {
            self.0[0].lanes_eq(rhs.0[0]) && self.0[1].lanes_eq(rhs.0[1])
        }
    }
}
