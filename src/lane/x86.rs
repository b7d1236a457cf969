//! x86_64 backings: SSE2 for two lanes, AVX2 for four, AVX-512 for eight.
//!
//! SSE2 is baseline on x86_64, so `U64x2` is always register-backed here. The
//! wider types require the corresponding extension at build time; without it
//! the portable composition in `portable.rs` is exported instead.

use core::arch::x86_64::*;
use core::fmt;

use super::Lanes;

#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct U64x2(__m128i);

impl U64x2 {
    #[inline(always)]
    pub fn new(words: [u64; 2]) -> Self {
        Self(unsafe { _mm_set_epi64x(words[1] as i64, words[0] as i64) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [u64; 2] {
        let mut out = [0u64; 2];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
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
        Self(unsafe { _mm_set1_epi64x(word as i64) })
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
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        // SSE2 has no 64-bit lane multiply; assemble the low 64 bits from
        // three 32x32 partial products.
        unsafe {
            let lo = _mm_mul_epu32(self.0, rhs.0);
            let a_hi = _mm_srli_epi64(self.0, 32);
            let b_hi = _mm_srli_epi64(rhs.0, 32);
            let cross = _mm_add_epi64(
                _mm_mul_epu32(a_hi, rhs.0),
                _mm_mul_epu32(self.0, b_hi),
            );
            Self(_mm_add_epi64(lo, _mm_slli_epi64(cross, 32)))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm_sll_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm_srl_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi32(self.0, rhs.0)) == 0xffff }
    }
}

#[cfg(target_feature = "avx2")]
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct U64x4(__m256i);

#[cfg(target_feature = "avx2")]
impl U64x4 {
    #[inline(always)]
    pub fn new(words: [u64; 4]) -> Self {
        Self(unsafe {
            _mm256_setr_epi64x(
                words[0] as i64,
                words[1] as i64,
                words[2] as i64,
                words[3] as i64,
            )
        })
    }

    #[inline(always)]
    pub fn to_array(self) -> [u64; 4] {
        let mut out = [0u64; 4];
        unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0) };
        out
    }
}

#[cfg(target_feature = "avx2")]
impl fmt::Debug for U64x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("U64x4").field(&self.to_array()).finish()
    }
}

#[cfg(target_feature = "avx2")]
impl Lanes for U64x4 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn splat(word: u64) -> Self {
        Self(unsafe { _mm256_set1_epi64x(word as i64) })
    }

    #[inline(always)]
    fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
        let w0 = f(0);
        let w1 = f(1);
        let w2 = f(2);
        let w3 = f(3);
        Self::new([w0, w1, w2, w3])
    }

    #[inline(always)]
    fn store(self, out: &mut [u64]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0) };
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        // same 32x32 partial-product assembly as the SSE2 backing
        unsafe {
            let lo = _mm256_mul_epu32(self.0, rhs.0);
            let a_hi = _mm256_srli_epi64(self.0, 32);
            let b_hi = _mm256_srli_epi64(rhs.0, 32);
            let cross = _mm256_add_epi64(
                _mm256_mul_epu32(a_hi, rhs.0),
                _mm256_mul_epu32(self.0, b_hi),
            );
            Self(_mm256_add_epi64(lo, _mm256_slli_epi64(cross, 32)))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm256_sll_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm256_srl_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpeq_epi64(self.0, rhs.0)) == -1 }
    }
}

#[cfg(all(target_feature = "avx512f", target_feature = "avx512dq"))]
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct U64x8(__m512i);

#[cfg(all(target_feature = "avx512f", target_feature = "avx512dq"))]
impl U64x8 {
    #[inline(always)]
    pub fn new(words: [u64; 8]) -> Self {
        Self(unsafe {
            _mm512_setr_epi64(
                words[0] as i64,
                words[1] as i64,
                words[2] as i64,
                words[3] as i64,
                words[4] as i64,
                words[5] as i64,
                words[6] as i64,
                words[7] as i64,
            )
        })
    }

    #[inline(always)]
    pub fn to_array(self) -> [u64; 8] {
        let mut out = [0u64; 8];
        unsafe { _mm512_storeu_si512(out.as_mut_ptr() as *mut __m512i, self.0) };
        out
    }
}

#[cfg(all(target_feature = "avx512f", target_feature = "avx512dq"))]
impl fmt::Debug for U64x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("U64x8").field(&self.to_array()).finish()
    }
}

#[cfg(all(target_feature = "avx512f", target_feature = "avx512dq"))]
impl Lanes for U64x8 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn splat(word: u64) -> Self {
        Self(unsafe { _mm512_set1_epi64(word as i64) })
    }

    #[inline(always)]
    fn from_lane_fn(mut f: impl FnMut(usize) -> u64) -> Self {
        let mut words = [0u64; 8];
        for (k, w) in words.iter_mut().enumerate() {
            *w = f(k);
        }
        Self::new(words)
    }

    #[inline(always)]
    fn store(self, out: &mut [u64]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        unsafe { _mm512_storeu_si512(out.as_mut_ptr() as *mut __m512i, self.0) };
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        // AVX512DQ supplies the real 64-bit lane multiply
        Self(unsafe { _mm512_mullo_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_xor_si512(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_or_si512(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm512_sll_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        debug_assert!(k < 64);
        Self(unsafe { _mm512_srl_epi64(self.0, _mm_cvtsi32_si128(k as i32)) })
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> bool {
        unsafe { _mm512_cmpeq_epi64_mask(self.0, rhs.0) == 0xff }
    }
}
