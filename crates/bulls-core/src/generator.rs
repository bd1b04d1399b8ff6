use crate::code::{digit_range, digits_of, has_unique_digits, Code, MAX_DIGITS};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Secret number generator.
///
/// Also the game's shared random source, so hint digits come from the same
/// stream as the secrets.
#[derive(Clone)]
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a `digit_count`-digit number with pairwise distinct digits.
    ///
    /// Rejection sampling over the whole range keeps every valid secret
    /// equally likely.
    pub fn generate(&mut self, digit_count: usize) -> Code {
        debug_assert!((1..=MAX_DIGITS).contains(&digit_count));
        let (min, max) = digit_range(digit_count);
        let mut rejected = 0u32;
        loop {
            let value = self.rng.gen_range(min..=max);
            let digits = digits_of(value);
            if has_unique_digits(&digits) {
                log::debug!(
                    "generated {}-digit secret after {} rejections",
                    digit_count,
                    rejected
                );
                return Code::from_unique(value, digits);
            }
            rejected += 1;
        }
    }

    /// Pick one digit of `code` uniformly at random
    pub fn pick_digit(&mut self, code: &Code) -> Option<u8> {
        code.digits().choose(&mut self.rng).copied()
    }
}
