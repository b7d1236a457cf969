//! Lane equivalence: lane `k` of every packed generator must reproduce,
//! bit for bit, an independently seeded scalar generator stepped the same
//! number of times.

use proptest::prelude::*;
use widerng::{
    Lanes, SplitMix64, Xoroshiro128Plus, Xorshift128Plus, Xorshift64, Xoshiro256PlusPlus, U64x2,
    U64x4, U64x8,
};

const STEPS: usize = 10_000;

fn words<L: Lanes>(v: L) -> Vec<u64> {
    let mut out = vec![0u64; L::WIDTH];
    v.store(&mut out);
    out
}

fn check_splitmix<L: Lanes>(seeds: &[u64], steps: usize) {
    let mut wide = SplitMix64::<L>::new(L::from_lane_fn(|k| seeds[k]));
    let mut scalars: Vec<SplitMix64> = seeds.iter().map(|&s| SplitMix64::new(s)).collect();

    for step in 0..steps {
        let out = words(wide.next());

        for (k, sc) in scalars.iter_mut().enumerate() {
            assert_eq!(
                out[k],
                sc.next(),
                "splitmix64 lane {} diverged at step {}",
                k,
                step
            );
        }
    }
}

fn check_xorshift64<L: Lanes>(seeds: &[u64], steps: usize) {
    let mut wide = Xorshift64::<L>::new(L::from_lane_fn(|k| seeds[k]));
    let mut scalars: Vec<Xorshift64> = seeds.iter().map(|&s| Xorshift64::new(s)).collect();

    for step in 0..steps {
        let out = words(wide.next());

        for (k, sc) in scalars.iter_mut().enumerate() {
            assert_eq!(
                out[k],
                sc.next(),
                "xorshift64 lane {} diverged at step {}",
                k,
                step
            );
        }
    }
}

fn check_xorshift128plus<L: Lanes>(seeds: &[u64], steps: usize) {
    let mut wide = Xorshift128Plus::<L>::from_lane_seeds(seeds);
    let mut scalars: Vec<Xorshift128Plus> = seeds
        .iter()
        .map(|&s| Xorshift128Plus::from_lane_seeds(&[s]))
        .collect();

    for step in 0..steps {
        let out = words(wide.next());

        for (k, sc) in scalars.iter_mut().enumerate() {
            assert_eq!(
                out[k],
                sc.next(),
                "xorshift128+ lane {} diverged at step {}",
                k,
                step
            );
        }
    }
}

fn check_xoroshiro128plus<L: Lanes>(seeds: &[u64], steps: usize) {
    let mut wide = Xoroshiro128Plus::<L>::from_lane_seeds(seeds);
    let mut scalars: Vec<Xoroshiro128Plus> = seeds
        .iter()
        .map(|&s| Xoroshiro128Plus::from_lane_seeds(&[s]))
        .collect();

    for step in 0..steps {
        let out = words(wide.next());

        for (k, sc) in scalars.iter_mut().enumerate() {
            assert_eq!(
                out[k],
                sc.next(),
                "xoroshiro128+ lane {} diverged at step {}",
                k,
                step
            );
        }
    }
}

fn check_xoshiro256plusplus<L: Lanes>(seeds: &[u64], steps: usize) {
    let mut wide = Xoshiro256PlusPlus::<L>::from_lane_seeds(seeds);
    let mut scalars: Vec<Xoshiro256PlusPlus> = seeds
        .iter()
        .map(|&s| Xoshiro256PlusPlus::from_lane_seeds(&[s]))
        .collect();

    for step in 0..steps {
        let out = words(wide.next());

        for (k, sc) in scalars.iter_mut().enumerate() {
            assert_eq!(
                out[k],
                sc.next(),
                "xoshiro256++ lane {} diverged at step {}",
                k,
                step
            );
        }
    }
}

fn seeds_for(width: usize) -> Vec<u64> {
    // deliberately hostile values mixed w/ plain counters
    let pool = [
        1u64,
        u64::MAX,
        0x9e3779b97f4a7c15,
        0x8000000000000000,
        2,
        3,
        0xDEADBEEF,
        0x0123456789ABCDEF,
    ];
    pool[..width].to_vec()
}

#[test]
fn test_splitmix64_all_widths() {
    check_splitmix::<U64x2>(&seeds_for(2), STEPS);
    check_splitmix::<U64x4>(&seeds_for(4), STEPS);
    check_splitmix::<U64x8>(&seeds_for(8), STEPS);
}

#[test]
fn test_xorshift64_all_widths() {
    check_xorshift64::<U64x2>(&seeds_for(2), STEPS);
    check_xorshift64::<U64x4>(&seeds_for(4), STEPS);
    check_xorshift64::<U64x8>(&seeds_for(8), STEPS);
}

#[test]
fn test_xorshift128plus_all_widths() {
    check_xorshift128plus::<U64x2>(&seeds_for(2), STEPS);
    check_xorshift128plus::<U64x4>(&seeds_for(4), STEPS);
    check_xorshift128plus::<U64x8>(&seeds_for(8), STEPS);
}

#[test]
fn test_xoroshiro128plus_all_widths() {
    check_xoroshiro128plus::<U64x2>(&seeds_for(2), STEPS);
    check_xoroshiro128plus::<U64x4>(&seeds_for(4), STEPS);
    check_xoroshiro128plus::<U64x8>(&seeds_for(8), STEPS);
}

#[test]
fn test_xoshiro256plusplus_all_widths() {
    check_xoshiro256plusplus::<U64x2>(&seeds_for(2), STEPS);
    check_xoshiro256plusplus::<U64x4>(&seeds_for(4), STEPS);
    check_xoshiro256plusplus::<U64x8>(&seeds_for(8), STEPS);
}

proptest! {
    #[test]
    fn prop_splitmix64_x4_lanes_match(seeds in prop::array::uniform4(any::<u64>()),
                                      steps in 1usize..256) {
        check_splitmix::<U64x4>(&seeds, steps);
    }

    #[test]
    fn prop_xorshift64_x8_lanes_match(seeds in prop::array::uniform8(1u64..),
                                      steps in 1usize..256) {
        check_xorshift64::<U64x8>(&seeds, steps);
    }

    #[test]
    fn prop_xorshift128plus_x2_lanes_match(seeds in prop::array::uniform2(any::<u64>()),
                                           steps in 1usize..256) {
        check_xorshift128plus::<U64x2>(&seeds, steps);
    }

    #[test]
    fn prop_xoroshiro128plus_x4_lanes_match(seeds in prop::array::uniform4(any::<u64>()),
                                            steps in 1usize..256) {
        check_xoroshiro128plus::<U64x4>(&seeds, steps);
    }

    #[test]
    fn prop_xoshiro256plusplus_x8_lanes_match(seeds in prop::array::uniform8(any::<u64>()),
                                              steps in 1usize..256) {
        check_xoshiro256plusplus::<U64x8>(&seeds, steps);
    }

    #[test]
    fn prop_equal_generators_stay_equal(seed in any::<u64>(), steps in 0usize..128) {
        let mut a = Xoshiro256PlusPlus::<U64x4>::from_lane_seeds(&[seed, seed ^ 1, seed ^ 2, seed ^ 3]);
        let mut b = Xoshiro256PlusPlus::<U64x4>::from_lane_seeds(&[seed, seed ^ 1, seed ^ 2, seed ^ 3]);

        for _ in 0..steps {
            prop_assert_eq!(a.next().to_array(), b.next().to_array());
        }

        prop_assert!(a == b);
    }
}
