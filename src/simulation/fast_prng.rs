//! Fast PRNG for sweeps — SplitMix64 behind `rand::RngCore`.
//!
//! SplitMix64 keeps a single u64 of state, so deriving one independent stream
//! per critical index is just `SplitMix64::new(base_seed + index)`. Consecutive
//! seeds are fine: the output mixer decorrelates them.
//!
//! Implementing [`RngCore`] makes it usable wherever the simulators take an
//! `R: Rng`; uniform `f64` draws come from the top 53 bits of `next_u64`.

use rand::RngCore;

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl RngCore for SplitMix64 {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
