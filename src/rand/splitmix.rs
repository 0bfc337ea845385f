//! Seedable generator for reproducible runs.

use zeroize::Zeroize;

use super::{Source, finalize};

const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64. The same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Source for SplitMix {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GAMMA);
        finalize(self.state)
    }
}

impl Drop for SplitMix {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
