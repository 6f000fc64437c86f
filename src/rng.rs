//! Random sources shared by both front-ends.
//!
//! The game draws the computer's move and the catalog picks the "surprise"
//! surah through [`RandomSource`], so tests can swap in a scripted or seeded
//! source instead of browser entropy.

/// Uniform random draws. Implementors only provide raw 32-bit words.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `0..len`; 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let n = len.min(u32::MAX as usize) as u32;
        // Rejection zone keeps the modulo unbiased.
        let limit = u32::MAX - u32::MAX % n;
        loop {
            let v = self.next_u32();
            if v < limit {
                return (v % n) as usize;
            }
        }
    }

    /// Uniform float in `[0, 1)`, used for visual jitter only.
    fn unit(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}

/// Small deterministic RNG (LCG) for replays and tests.
#[derive(Clone, Debug)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
}

/// OS / browser entropy via `getrandom` (the `js` backend on wasm32).
pub struct EntropyRng {
    fallback: SimpleRng,
    warned: bool,
}

impl EntropyRng {
    pub fn new() -> Self {
        let mut seed = [0u8; 8];
        let seed = match getrandom::getrandom(&mut seed) {
            Ok(()) => u64::from_le_bytes(seed),
            Err(_) => 0x5EED_CAFE,
        };
        Self {
            fallback: SimpleRng::new(seed),
            warned: false,
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(err) => {
                if !self.warned {
                    log::warn!("entropy unavailable ({err}); using seeded fallback");
                    self.warned = true;
                }
                self.fallback.next_u32()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn index_of_empty_or_single_is_zero() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn index_stays_in_range() {
        let mut rng = SimpleRng::new(42);
        for len in [2usize, 3, 5, 114] {
            for _ in 0..500 {
                assert!(rng.index(len) < len);
            }
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        let xs: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn unit_is_half_open() {
        assert_eq!(Fixed(0).unit(), 0.0);
        assert!(Fixed(u32::MAX).unit() < 1.0);
    }

    #[test]
    fn all_three_choices_are_reachable() {
        let mut rng = EntropyRng::new();
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[rng.index(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
