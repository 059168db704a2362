//! Presentation of `YYYY-MM-DD` dates inside the contract body.

use chrono::{Datelike, NaiveDate};

/// Rendered in place of an unfilled short date.
pub const SHORT_DATE_PLACEHOLDER: &str = "___/___/____";
/// Rendered in place of an unfilled long-form date.
pub const LONG_DATE_PLACEHOLDER: &str = "___ de ______________ de ______";

/// Resolves month names for the long-form date.
pub trait CalendarLocale {
    /// Full month name for `month` in `1..=12`, or `None` when it cannot be resolved.
    fn month_name(&self, month: u32) -> Option<&str>;
}

/// Brazilian Portuguese month names.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseCalendar;

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

impl CalendarLocale for PortugueseCalendar {
    fn month_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        PT_BR_MONTHS.get(index).copied()
    }
}

/// `2025-10-30` becomes `30/10/2025`.
///
/// Input without three non-empty leading parts is returned unchanged; parts past the
/// third are ignored.
pub fn format_short(value: &str) -> String {
    if value.is_empty() {
        return SHORT_DATE_PLACEHOLDER.to_string();
    }

    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day))
            if !year.is_empty() && !month.is_empty() && !day.is_empty() =>
        {
            format!("{day}/{month}/{year}")
        }
        _ => value.to_string(),
    }
}

/// `2025-10-30` becomes `30 DE OUTUBRO DE 2025` with the default calendar.
pub fn format_long(value: &str) -> String {
    format_long_with(value, &PortugueseCalendar)
}

/// Long-form date with an explicit month-name source.
///
/// Falls back to the raw input when the date does not parse or the locale cannot name
/// the month.
pub fn format_long_with<L: CalendarLocale + ?Sized>(value: &str, locale: &L) -> String {
    if value.is_empty() {
        return LONG_DATE_PLACEHOLDER.to_string();
    }

    let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") else {
        return value.to_string();
    };

    match locale.month_name(date.month()) {
        Some(month) => format!(
            "{:02} DE {} DE {}",
            date.day(),
            month.to_uppercase(),
            date.year()
        ),
        None => value.to_string(),
    }
}
