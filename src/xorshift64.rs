//! xorshift64: one word, three xor-shift steps, output equals new state.
//!
//! The all-zero state is a fixed point. Constructors do not reject it;
//! supplying a non-zero seed is the caller's responsibility.

use crate::lane::Lanes;
use crate::splitmix::SplitMix64;

#[derive(Clone, Copy, Debug)]
pub struct Xorshift64<L: Lanes = u64> {
    state: L,
}

pub type Xorshift64x2 = Xorshift64<crate::lane::U64x2>;
pub type Xorshift64x4 = Xorshift64<crate::lane::U64x4>;
pub type Xorshift64x8 = Xorshift64<crate::lane::U64x8>;

impl<L: Lanes> Xorshift64<L> {
    /// Raw state; lane `k` seeds lane `k`'s stream directly.
    #[inline(always)]
    pub fn new(state: L) -> Self {
        Self { state }
    }

    /// One spreader draw per lane, in ascending lane order.
    #[inline(always)]
    pub fn from_seeder(seeder: &mut SplitMix64) -> Self {
        Self {
            state: L::from_lane_fn(|_| seeder.next()),
        }
    }

    /// Current packed state.
    #[inline(always)]
    pub fn state(&self) -> L {
        self.state
    }

    #[inline(always)]
    pub fn next(&mut self) -> L {
        let mut s = self.state;
        s = s.xor(s.shl(13));
        s = s.xor(s.shr(17));
        s = s.xor(s.shl(5));
        self.state = s;
        s
    }
}

impl<L: Lanes> PartialEq for Xorshift64<L> {
    fn eq(&self, other: &Self) -> bool {
        self.state.lanes_eq(other.state)
    }
}

impl<L: Lanes> Eq for Xorshift64<L> {}

#[cfg(feature = "rand_core")]
mod rand_core_impl {
    use super::Xorshift64;
    use rand_core::{Error, RngCore, SeedableRng};

    impl RngCore for Xorshift64<u64> {
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

    impl SeedableRng for Xorshift64<u64> {
        type Seed = [u8; 8];

        fn from_seed(seed: Self::Seed) -> Self {
            Self::new(u64::from_le_bytes(seed))
        }
    }
}
