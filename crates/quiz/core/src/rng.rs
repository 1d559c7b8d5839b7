//! RNG oracle for deterministic shuffling.
//!
//! Random mode draws its rounds from a seeded generator so a session can be
//! replayed exactly from its seed. All implementations must be deterministic:
//! the same seed always yields the same sequence.

/// Source of random numbers for round generation.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `[0, bound)`. Returns 0 when `bound <= 1`.
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        // Multiply-shift keeps the result in range without modulo bias
        // for any bound that fits in u32.
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: same seed always produces the same stream
/// - **Small state**: only 64 bits
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose stream is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix-style avalanche so nearby seeds start far apart.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: RngOracle + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
