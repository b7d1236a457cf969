//! xoshiro256++: four words, shift/rotate scramble, rotated-sum output.
//!
//! The output scrambler here rotates `s0 + s1` by 23 and adds `s0` back in,
//! so the raw state words never appear on the output stream directly.

use crate::lane::Lanes;
use crate::splitmix::{per_lane_spreaders, SplitMix64};

#[derive(Clone, Copy, Debug)]
pub struct Xoshiro256PlusPlus<L: Lanes = u64> {
    s: [L; 4],
}

pub type Xoshiro256PlusPlusx2 = Xoshiro256PlusPlus<crate::lane::U64x2>;
pub type Xoshiro256PlusPlusx4 = Xoshiro256PlusPlus<crate::lane::U64x4>;
pub type Xoshiro256PlusPlusx8 = Xoshiro256PlusPlus<crate::lane::U64x8>;

impl<L: Lanes> Xoshiro256PlusPlus<L> {
    #[inline(always)]
    pub fn new(s: [L; 4]) -> Self {
        Self { s }
    }

    /// Four spreader draws per lane, state word by state word.
    #[inline(always)]
    pub fn from_seeder(seeder: &mut SplitMix64) -> Self {
        Self {
            s: core::array::from_fn(|_| L::from_lane_fn(|_| seeder.next())),
        }
    }

    /// One independent spreader per lane, so lane `k` matches a scalar
    /// generator built from `SplitMix64::new(seeds[k])`.
    pub fn from_lane_seeds(seeds: &[u64]) -> Self {
        let mut spreaders = per_lane_spreaders::<L>(seeds);
        Self {
            s: core::array::from_fn(|_| L::from_lane_fn(|k| spreaders[k].next())),
        }
    }

    /// Current packed state words.
    #[inline(always)]
    pub fn state(&self) -> [L; 4] {
        self.s
    }

    #[inline(always)]
    pub fn next(&mut self) -> L {
        let result = self.s[0]
            .wrapping_add(self.s[1])
            .rotl(23)
            .wrapping_add(self.s[0]);

        // each xor below consumes the word the previous line just updated
        let t = self.s[1].shl(17);

        self.s[2] = self.s[2].xor(self.s[0]);
        self.s[3] = self.s[3].xor(self.s[1]);
        self.s[1] = self.s[1].xor(self.s[2]);
        self.s[0] = self.s[0].xor(self.s[3]);

        self.s[2] = self.s[2].xor(t);
        self.s[3] = self.s[3].rotl(45);

        result
    }
}

impl<L: Lanes> PartialEq for Xoshiro256PlusPlus<L> {
    fn eq(&self, other: &Self) -> bool {
        self.s
            .iter()
            .zip(&other.s)
            .all(|(&a, &b)| a.lanes_eq(b))
    }
}

impl<L: Lanes> Eq for Xoshiro256PlusPlus<L> {}

#[cfg(feature = "rand_core")]
mod rand_core_impl {
    use super::Xoshiro256PlusPlus;
    use rand_core::{Error, RngCore, SeedableRng};

    impl RngCore for Xoshiro256PlusPlus<u64> {
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

    impl SeedableRng for Xoshiro256PlusPlus<u64> {
        type Seed = [u8; 32];

        fn from_seed(seed: Self::Seed) -> Self {
            let s = core::array::from_fn(|i| {
                u64::from_le_bytes(seed[i * 8..(i + 1) * 8].try_into().unwrap())
            });
            Self::new(s)
        }
    }
}
