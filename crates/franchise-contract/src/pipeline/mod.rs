//! Pure validation and formatting steps applied to user input before it reaches the
//! contract template.

pub mod currency;
pub mod date;
pub mod national_id;

pub use currency::{CurrencyInput, CURRENCY_MARKER};
pub use date::{
    CalendarLocale, PortugueseCalendar, LONG_DATE_PLACEHOLDER, SHORT_DATE_PLACEHOLDER,
};
pub use national_id::{should_validate, NATIONAL_ID_DIGITS};
