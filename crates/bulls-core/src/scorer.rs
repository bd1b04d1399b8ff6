use crate::code::Code;

/// Bulls and cows for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Right digit, right position
    pub bulls: usize,
    /// Right digit, wrong position
    pub cows: usize,
}

impl Score {
    pub fn is_win(&self, digit_count: usize) -> bool {
        self.bulls == digit_count
    }
}

pub fn score(secret: &Code, guess: &Code) -> Score {
    score_digits(secret.digits(), guess.digits())
}

/// Score two equal-length digit sequences.
///
/// Cows use the multiset overlap, so the count stays correct even when a
/// sequence repeats a digit.
pub fn score_digits(secret: &[u8], guess: &[u8]) -> Score {
    debug_assert_eq!(secret.len(), guess.len());

    let bulls = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count();

    let mut secret_counts = [0usize; 10];
    let mut guess_counts = [0usize; 10];
    for &d in secret {
        secret_counts[d as usize] += 1;
    }
    for &d in guess {
        guess_counts[d as usize] += 1;
    }
    let common: usize = secret_counts
        .iter()
        .zip(guess_counts.iter())
        .map(|(s, g)| (*s).min(*g))
        .sum();

    Score {
        bulls,
        cows: common - bulls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    fn code(s: &str) -> Code {
        validate(s, s.len()).unwrap()
    }

    #[test]
    fn test_examples() {
        assert_eq!(score(&code("1234"), &code("1243")), Score { bulls: 2, cows: 2 });
        assert_eq!(score(&code("1234"), &code("4321")), Score { bulls: 0, cows: 4 });
        assert_eq!(score(&code("1234"), &code("5678")), Score { bulls: 0, cows: 0 });
    }

    #[test]
    fn test_exact_match() {
        let s = score(&code("307"), &code("307"));
        assert_eq!(s, Score { bulls: 3, cows: 0 });
        assert!(s.is_win(3));
    }

    #[test]
    fn test_repeated_digits_not_double_counted() {
        // Secret 1123 vs guess 1111: two bulls, no cows
        assert_eq!(score_digits(&[1, 1, 2, 3], &[1, 1, 1, 1]), Score { bulls: 2, cows: 0 });
        assert_eq!(score_digits(&[1, 1, 2, 3], &[2, 1, 1, 5]), Score { bulls: 1, cows: 2 });
    }

    #[test]
    fn test_total_never_exceeds_length() {
        for a in 0..10u8 {
            for b in 0..10u8 {
                let secret = [a, (a + 3) % 10, (a + 7) % 10, 4];
                let guess = [b, 4, (b + 3) % 10, (a + b) % 10];
                let s = score_digits(&secret, &guess);
                assert!(s.bulls + s.cows <= 4, "{:?} vs {:?}", secret, guess);
            }
        }
    }
}
