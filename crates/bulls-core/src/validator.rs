use crate::code::{digit_range, digits_of, has_unique_digits, Code, MAX_DIGITS};
use thiserror::Error;

/// Why a guess was rejected. Variants are listed in check order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a valid number.")]
    InvalidNumber,
    #[error("Please enter a {0}-digit number.")]
    WrongDigitCount(usize),
    #[error("Number should not have repeated digits.")]
    RepeatedDigits,
}

/// Validate raw player input as a guess of `digit_count` digits
pub fn validate(raw: &str, digit_count: usize) -> Result<Code, GuessError> {
    let trimmed = raw.trim();
    // `u32::from_str` accepts a leading '+', which is not a number a player types
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::InvalidNumber);
    }

    // No guess can match a length no code can have
    if !(1..=MAX_DIGITS).contains(&digit_count) {
        return Err(GuessError::WrongDigitCount(digit_count));
    }

    let (min, max) = digit_range(digit_count);
    let value = match trimmed.parse::<u64>() {
        Ok(v) => v,
        // All-digit input that overflows u64 is certainly too long
        Err(_) => return Err(GuessError::WrongDigitCount(digit_count)),
    };
    if value < u64::from(min) || value > u64::from(max) {
        return Err(GuessError::WrongDigitCount(digit_count));
    }

    let value = value as u32;
    let digits = digits_of(value);
    if !has_unique_digits(&digits) {
        return Err(GuessError::RepeatedDigits);
    }

    Ok(Code::from_unique(value, digits))
}
