mod lane;
mod splitmix;
mod xoroshiro128plus;
mod xorshift128plus;
mod xorshift64;
mod xoshiro256plusplus;

pub use lane::{Lanes, U64x2, U64x4, U64x8};
pub use splitmix::{SplitMix64, SplitMix64x2, SplitMix64x4, SplitMix64x8};
pub use xoroshiro128plus::{
    Xoroshiro128Plus, Xoroshiro128Plusx2, Xoroshiro128Plusx4, Xoroshiro128Plusx8,
};
pub use xorshift128plus::{
    Xorshift128Plus, Xorshift128Plusx2, Xorshift128Plusx4, Xorshift128Plusx8,
};
pub use xorshift64::{Xorshift64, Xorshift64x2, Xorshift64x4, Xorshift64x8};
pub use xoshiro256plusplus::{
    Xoshiro256PlusPlus, Xoshiro256PlusPlusx2, Xoshiro256PlusPlusx4, Xoshiro256PlusPlusx8,
};

/// Generate a non-deterministic seed w/ help of underlying hardware.
///
/// This is the only non-deterministic entry point in the crate; everything
/// built from an explicit seed stays reproducible.
#[inline(always)]
pub fn platform_seed() -> u64 {
    // NOTE: On x86_64, the `rdtsc` is reliable and generally available in all three OS.
    // It's fast as it avoids syscall overhead.
    #[cfg(target_arch = "x86_64")]
    unsafe {
        use std::arch::asm;

        let mut lo: u32;
        let mut hi: u32;

        asm!("rdtsc", out("eax") lo, out("edx") hi);

        ((hi as u64) << 32) | (lo as u64)
    }

    // NOTE: On aarch64, we read the virtual counter `cntvct`. It provides high-res
    // monotonic value w/o syscall overhead.
    #[cfg(target_arch = "aarch64")]
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "ios"))]
    unsafe {
        use std::arch::asm;

        let cnt: u64;
        asm!("mrs {0}, cntvct_el0", out(reg) cnt);

        cnt
    }

    // WARN: On Win-Aarch64, as usual, `cntvct` is not available (deemed as illegal
    // instructions), so wall-clock time is the only viable option.
    #[cfg(not(any(
        target_arch = "x86_64",
        all(
            target_arch = "aarch64",
            any(target_os = "linux", target_os = "macos", target_os = "ios")
        )
    )))]
    {
        // a pre-epoch clock folds to a zero duration instead of aborting
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Combine seconds and nanoseconds into a u64
        ((now.as_secs() as u64) << 32) ^ (now.subsec_nanos() as u64)
    }
}

#[cfg(feature = "rand_core")]
pub(crate) fn fill_bytes_u64(dest: &mut [u8], mut next: impl FnMut() -> u64) {
    let mut chunks = dest.chunks_exact_mut(8);

    for chunk in chunks.by_ref() {
        chunk.copy_from_slice(&next().to_le_bytes());
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let word = next().to_le_bytes();
        rem.copy_from_slice(&word[..rem.len()]);
    }
}
