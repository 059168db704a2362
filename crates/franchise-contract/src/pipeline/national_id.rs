//! CPF (Brazilian taxpayer number) checksum validation and progressive masking.

/// Number of digits in a complete CPF.
pub const NATIONAL_ID_DIGITS: usize = 11;

/// Keep only the ASCII digits of `value`.
pub fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Whether the CPF checksum should be enforced for an input with `digit_len` digits.
///
/// The field is only judged once it is complete; partial input never shows an error.
pub const fn should_validate(digit_len: usize) -> bool {
    digit_len == NATIONAL_ID_DIGITS
}

/// Validate a CPF, ignoring any punctuation.
///
/// Anything that does not reduce to eleven digits, and the eleven-identical-digit
/// sequences, are invalid.
pub fn is_valid(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != NATIONAL_ID_DIGITS {
        return false;
    }

    if digits.iter().all(|digit| *digit == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted-sum-mod-11 check digit over `body`; weights run from `body.len() + 1` down to 2.
fn check_digit(body: &[u32]) -> u32 {
    let top_weight = body.len() as u32 + 1;
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (top_weight - index as u32))
        .sum();

    (sum * 10) % 11 % 10
}

/// Reformat keystrokes into `ddd.ddd.ddd-dd`, dropping anything past the eleventh digit.
///
/// A separator is only emitted once the segment in front of it is complete and the next
/// segment has started, so partial input renders as typed.
pub fn mask(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(NATIONAL_ID_DIGITS)
        .collect();

    let mut masked = String::with_capacity(NATIONAL_ID_DIGITS + 3);
    for (index, digit) in digits.iter().enumerate() {
        match index {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(*digit);
    }

    masked
}
