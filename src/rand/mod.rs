//! Random number generation with hardware entropy.
//!
//! Everything that draws randomness goes through [`Source`], so the generator
//! can run on the hardware-mixed [`Rand`] in production and on a seeded
//! [`SplitMix`] when output has to be reproducible.

mod hw;
mod primes;
mod splitmix;

use zeroize::Zeroize;

use primes::PRIMES;

pub use splitmix::SplitMix;

/// A stream of random words.
pub trait Source {
    fn next_u64(&mut self) -> u64;

    /// Index in `0..n`. `n` must be non-zero.
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "below(0)");
        (self.next_u64() % n as u64) as usize
    }
}

pub fn entropy_source() -> &'static str {
    hw::SOURCE
}

// =============================================================================
// RNG
// =============================================================================

/// Default generator: state mixed with a fresh hardware reading on every draw.
pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Self {
            state: hw::read(),
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for Rand {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::read();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        finalize(self.state)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

/// SplitMix64 output finalizer.
#[inline(always)]
fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
