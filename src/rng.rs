// Deterministic xorshift32 RNG for lightweight randomness (no external crate).
// Visual: only the Randomize button uses it, to pick new curve frequencies.

#[derive(Clone)]
pub struct Rng32 {
    state: u32,
}

impl Rng32 {
    /// `seed | 1` keeps the state non-zero; all-zeros is a fixed point of xorshift.
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Xorshift—fast and good enough for picking frequencies
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform f64 in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform f64 in [min, max).
    #[inline]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}
