//! When hints are shown, and what they reveal.

use crate::code::Code;
use crate::generator::Generator;

/// Hints only reveal anything once more than half the tries are used
pub fn hint_available(attempts: u32, max_tries: u32) -> bool {
    attempts > max_tries / 2
}

/// Whether the automatic hint fires before the next prompt.
///
/// Fires every `max_tries / 3` attempts. A cadence of zero never fires.
pub fn auto_hint_due(attempts: u32, max_tries: u32) -> bool {
    let cadence = max_tries / 3;
    attempts > 0 && cadence > 0 && attempts % cadence == 0
}

/// Reveal a random digit of the secret, or nothing if hints are not yet available
pub fn reveal_digit(
    secret: &Code,
    attempts: u32,
    max_tries: u32,
    generator: &mut Generator,
) -> Option<u8> {
    if !hint_available(attempts, max_tries) {
        return None;
    }
    generator.pick_digit(secret)
}
