use std::fmt;

/// Longest code a `u32` can hold with distinct digits and no leading zero
pub const MAX_DIGITS: usize = 9;

/// Split a number into its decimal digits, most significant first
pub fn digits_of(value: u32) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = value;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Whether no digit appears twice
pub fn has_unique_digits(digits: &[u8]) -> bool {
    let mut seen = 0u16;
    for &d in digits {
        let bit = 1u16 << d;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// Smallest and largest numbers with exactly `digit_count` digits.
///
/// `digit_count` must be in `1..=MAX_DIGITS`.
pub fn digit_range(digit_count: usize) -> (u32, u32) {
    debug_assert!((1..=MAX_DIGITS).contains(&digit_count));
    let min = 10u32.pow(digit_count as u32 - 1);
    let max = 10u32.pow(digit_count as u32) - 1;
    (min, max)
}

/// A secret or a validated guess: a number whose digits are pairwise distinct.
///
/// Only the generator and the validator build codes, so every `Code` upholds
/// the distinct-digit invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    value: u32,
    digits: Vec<u8>,
}

impl Code {
    pub(crate) fn from_unique(value: u32, digits: Vec<u8>) -> Self {
        debug_assert!(has_unique_digits(&digits));
        Self { value, digits }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of(307), vec![3, 0, 7]);
        assert_eq!(digits_of(987654), vec![9, 8, 7, 6, 5, 4]);
        assert_eq!(digits_of(0), vec![0]);
    }

    #[test]
    fn test_unique_digits() {
        assert!(has_unique_digits(&[1, 2, 3, 4]));
        assert!(!has_unique_digits(&[1, 1, 2, 3]));
        assert!(!has_unique_digits(&[9, 0, 9]));
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(digit_range(3), (100, 999));
        assert_eq!(digit_range(6), (100_000, 999_999));
        assert_eq!(digit_range(1), (1, 9));
        assert_eq!(digit_range(MAX_DIGITS), (100_000_000, 999_999_999));
    }
}
