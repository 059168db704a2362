//! Brazilian real masking for the investment fields.
//!
//! The transform reads every digit of its input as minor units, so it is one-directional:
//! it must see what the user typed, never a value it already produced. [`CurrencyInput`]
//! makes that explicit at the call site.

/// Marker prefixed to every formatted amount.
pub const CURRENCY_MARKER: &str = "R$";

/// Where a currency string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyInput<'a> {
    /// Raw field contents as typed, to be interpreted as cents.
    Keystrokes(&'a str),
    /// A value this module already produced; passed through untouched.
    Formatted(&'a str),
}

/// Mask a currency field.
pub fn mask(input: CurrencyInput<'_>) -> String {
    match input {
        CurrencyInput::Formatted(value) => value.to_string(),
        CurrencyInput::Keystrokes(value) => mask_keystrokes(value),
    }
}

fn mask_keystrokes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == CURRENCY_MARKER {
        return String::new();
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    format_cents(&digits)
}

/// Format a string of minor-unit digits as `R$ 1.234,56`.
///
/// Works on the digit string directly so arbitrarily long amounts keep every digit.
pub fn format_cents(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (integer, cents) = padded.split_at(padded.len() - 2);

    format!("{CURRENCY_MARKER} {},{cents}", group_thousands(integer))
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Whether `value` has the canonical `R$ d.ddd,dd` shape.
pub fn is_formatted(value: &str) -> bool {
    let Some(amount) = value.strip_prefix("R$ ") else {
        return false;
    };
    let Some((integer, cents)) = amount.split_once(',') else {
        return false;
    };
    if cents.len() != 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let groups: Vec<&str> = integer.split('.').collect();
    let Some((head, tail)) = groups.split_first() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len()) && head.chars().all(|c| c.is_ascii_digit());
    let leading_zero = head.len() > 1 && head.starts_with('0');
    head_ok
        && !leading_zero
        && tail
            .iter()
            .all(|group| group.len() == 3 && group.chars().all(|c| c.is_ascii_digit()))
}
