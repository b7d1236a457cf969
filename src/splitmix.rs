//! splitmix64: a one-word generator and the canonical seed spreader.
//!
//! Repeated calls walk the state forward by a fixed odd increment, so the
//! additive component visits a full period before repeating; that makes the
//! output stream the standard source of independent-looking seed words for
//! the other families.

use crate::lane::{Lanes, MAX_LANES};

/// Golden-ratio derived odd increment.
pub(crate) const INCREMENT: u64 = 0x9e3779b97f4a7c15;

const MIX_MUL_0: u64 = 0xbf58476d1ce4e5b9;
const MIX_MUL_1: u64 = 0x94d049bb133111eb;

#[derive(Clone, Copy, Debug)]
pub struct SplitMix64<L: Lanes = u64> {
    state: L,
}

pub type SplitMix64x2 = SplitMix64<crate::lane::U64x2>;
pub type SplitMix64x4 = SplitMix64<crate::lane::U64x4>;
pub type SplitMix64x8 = SplitMix64<crate::lane::U64x8>;

impl<L: Lanes> SplitMix64<L> {
    #[inline(always)]
    pub fn new(state: L) -> Self {
        Self { state }
    }

    /// Seeds lane `k` with `seed + k * increment`, the stagger the scalar
    /// stream itself would reach after `k` steps of the additive walk.
    #[inline(always)]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: L::from_lane_fn(|k| seed.wrapping_add(INCREMENT.wrapping_mul(k as u64))),
        }
    }

    /// Current packed state.
    #[inline(always)]
    pub fn state(&self) -> L {
        self.state
    }

    #[inline(always)]
    pub fn next(&mut self) -> L {
        self.state = self.state.wrapping_add(L::splat(INCREMENT));

        let mut z = self.state;
        z = z.xor(z.shr(30)).wrapping_mul(L::splat(MIX_MUL_0));
        z = z.xor(z.shr(27)).wrapping_mul(L::splat(MIX_MUL_1));
        z.xor(z.shr(31))
    }
}

impl<L: Lanes> PartialEq for SplitMix64<L> {
    fn eq(&self, other: &Self) -> bool {
        self.state.lanes_eq(other.state)
    }
}

impl<L: Lanes> Eq for SplitMix64<L> {}

/// One independent scalar spreader per lane, from per-lane seeds.
///
/// Only the first `L::WIDTH` entries are live; the slice length must match.
pub(crate) fn per_lane_spreaders<L: Lanes>(seeds: &[u64]) -> [SplitMix64; MAX_LANES] {
    assert_eq!(
        seeds.len(),
        L::WIDTH,
        "expected {} lane seeds, got {}",
        L::WIDTH,
        seeds.len()
    );

    let mut spreaders: [SplitMix64; MAX_LANES] = [SplitMix64::new(0); MAX_LANES];

    for (sp, &seed) in spreaders.iter_mut().zip(seeds) {
        *sp = SplitMix64::new(seed);
    }

    spreaders
}

#[cfg(feature = "rand_core")]
mod rand_core_impl {
    use super::SplitMix64;
    use rand_core::{Error, RngCore, SeedableRng};

    impl RngCore for SplitMix64<u64> {
        #[inline(always)]
        fn next_u32(&mut self) -> u32 {
            (self.next() >> 32) as u32
        }

        #[inline(always)]
        fn next_u64(&mut self) -> u64 {
            self.next()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            crate::fill_bytes_u64(dest, || self.next());
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl SeedableRng for SplitMix64<u64> {
        type Seed = [u8; 8];

        fn from_seed(seed: Self::Seed) -> Self {
            Self::new(u64::from_le_bytes(seed))
        }
    }
}
