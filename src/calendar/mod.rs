//! Lunisolar date resolution for observance annotations.
//!
//! - [`hebrew`] - Arithmetic Hebrew calendar; the conversion capability
//! - [`resolver`] - Forward search for the next Gregorian date matching a predicate
//! - [`holidays`] - Fixed observance table rendered as display strings
//!
//! Every failure here is soft: an unavailable calendar or an unmatched predicate
//! yields `None`, and callers show no annotation.

pub mod hebrew;
pub mod holidays;
pub mod resolver;

use chrono::NaiveDate;

pub use hebrew::HebrewCalendar;
pub use holidays::{HolidayKey, HolidayTable, build_holidays};
pub use resolver::DateResolver;

/// Projection of a Gregorian date onto a lunisolar calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunisolarFields {
    pub day: u32,
    pub month: String,
    pub year: i64,
}

impl LunisolarFields {
    /// Case-insensitive month comparison
    pub fn month_is(&self, name: &str) -> bool {
        self.month.eq_ignore_ascii_case(name)
    }

    /// Adar in a common year or Adar II in a leap year. Adar I is a distinct month.
    pub fn is_adar(&self) -> bool {
        let month = self.month.to_ascii_lowercase();
        month.starts_with("adar") && month != "adar i"
    }
}

/// Format-only conversion from Gregorian dates to lunisolar fields
pub trait LunisolarCalendar {
    fn fields(&self, date: NaiveDate) -> Option<LunisolarFields>;
}
