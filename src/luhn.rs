//! Luhn mod-10 checksum over digit strings.
//!
//! The Luhn check catches single-digit typos and most adjacent
//! transpositions. It is a checksum, not a security control.
//!
//! Input is taken as-is: the whole string must be ASCII digits, and
//! separators are not stripped. Callers that accept formatted input must
//! normalize it first.

/// Doubled-and-reduced digit values: double the digit, subtract 9 when
/// the result reaches 10. Indexed by the original digit.
const DOUBLE_TABLE: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates `number` against the Luhn mod-10 checksum.
///
/// Returns `false` for the empty string and for any string containing a
/// non-digit character. Otherwise, walks the digits right to left,
/// doubling every second digit (starting with the second from the
/// right), and accepts when the reduced sum is a multiple of 10.
///
/// # Example
///
/// ```
/// use card_identifier::luhn;
///
/// assert!(luhn::validate("4012001037141112"));
/// assert!(!luhn::validate("4012001037141113"));
/// assert!(!luhn::validate("4012-0010-3714-1112"));
/// assert!(!luhn::validate(""));
/// ```
pub fn validate(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut total = 0u32;
    let mut double = false;

    for ch in number.chars().rev() {
        let Some(value) = ch.to_digit(10) else {
            return false;
        };
        total += if double {
            DOUBLE_TABLE[value as usize]
        } else {
            value
        };
        double = !double;
    }

    total % 10 == 0
}
