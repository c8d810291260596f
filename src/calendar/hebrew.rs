use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

use super::{LunisolarCalendar, LunisolarFields};

/// Fixed day number (days since 0001-01-01 proleptic Gregorian, that day = 1)
/// of 1 Tishri AM 1
const HEBREW_EPOCH: i64 = -1_373_427;

/// Months are numbered from Nisan = 1; the civil year begins at Tishri = 7
const NISAN: u32 = 1;
const TISHRI: u32 = 7;
const ADAR: u32 = 12;
const ADAR_II: u32 = 13;

/// Arithmetic Hebrew calendar (molad of Tishri with the four postponement rules)
#[derive(Debug, Clone, Copy)]
pub struct HebrewCalendar {
    _private: (),
}

impl HebrewCalendar {
    /// Build the calendar and check it against a known date (1 Tishri 5785 = 2024-10-03)
    pub fn new() -> Result<Self> {
        let calendar = Self { _private: () };
        let Some(probe) = NaiveDate::from_ymd_opt(2024, 10, 3) else {
            bail!("calendar self-check date is invalid");
        };
        let fields = calendar.convert(probe);
        if fields != (5785, TISHRI, 1) {
            bail!("calendar self-check failed: 2024-10-03 resolved to {:?}", fields);
        }
        Ok(calendar)
    }

    /// (year, month, day) for a Gregorian date
    fn convert(&self, date: NaiveDate) -> (i64, u32, u32) {
        hebrew_from_fixed(i64::from(date.num_days_from_ce()))
    }
}

impl LunisolarCalendar for HebrewCalendar {
    fn fields(&self, date: NaiveDate) -> Option<LunisolarFields> {
        let (year, month, day) = self.convert(date);
        Some(LunisolarFields { day, month: month_name(month, year).to_string(), year })
    }
}

pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

fn last_month_of_year(year: i64) -> u32 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

pub fn month_name(month: u32, year: i64) -> &'static str {
    match month {
        1 => "Nisan",
        2 => "Iyar",
        3 => "Sivan",
        4 => "Tamuz",
        5 => "Av",
        6 => "Elul",
        7 => "Tishri",
        8 => "Heshvan",
        9 => "Kislev",
        10 => "Tevet",
        11 => "Shevat",
        ADAR if is_leap_year(year) => "Adar I",
        ADAR => "Adar",
        _ => "Adar II",
    }
}

/// Days from the epoch to the molad of Tishri of `year`, after the weekday postponement
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(25_920);
    if (3 * (days + 1)).rem_euclid(7) < 3 { days + 1 } else { days }
}

/// Keeps year lengths within 353..=355 / 383..=385
fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);

    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn days_in_year(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

fn last_day_of_month(month: u32, year: i64) -> u32 {
    let length = days_in_year(year);
    let short = match month {
        2 | 4 | 6 | 10 | ADAR_II => true,
        ADAR => !is_leap_year(year),
        8 => !matches!(length, 355 | 385),
        9 => matches!(length, 353 | 383),
        _ => false,
    };
    if short { 29 } else { 30 }
}

fn fixed_from_hebrew(year: i64, month: u32, day: u32) -> i64 {
    let month_days = |range: std::ops::RangeInclusive<u32>| -> i64 {
        range.map(|m| i64::from(last_day_of_month(m, year))).sum()
    };

    let mut fixed = new_year(year) + i64::from(day) - 1;
    if month < TISHRI {
        fixed += month_days(TISHRI..=last_month_of_year(year));
        if month > NISAN {
            fixed += month_days(NISAN..=month - 1);
        }
    } else if month > TISHRI {
        fixed += month_days(TISHRI..=month - 1);
    }
    fixed
}

fn hebrew_from_fixed(fixed: i64) -> (i64, u32, u32) {
    // Mean year length is 35975351/98496 days; the estimate is never more than a year high
    let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) + 1;
    let mut year = approx - 1;
    while new_year(year + 1) <= fixed {
        year += 1;
    }

    let mut month = if fixed < fixed_from_hebrew(year, NISAN, 1) { TISHRI } else { NISAN };
    while fixed > fixed_from_hebrew(year, month, last_day_of_month(month, year)) {
        month += 1;
    }

    let day = fixed - fixed_from_hebrew(year, month, 1) + 1;
    (year, month, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(y: i32, m: u32, d: u32) -> LunisolarFields {
        let calendar = HebrewCalendar::new().unwrap();
        calendar.fields(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn test_new_passes_self_check() {
        assert!(HebrewCalendar::new().is_ok());
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(
            fields(2024, 10, 3),
            LunisolarFields { day: 1, month: "Tishri".to_string(), year: 5785 }
        );
        assert_eq!(
            fields(2025, 9, 23),
            LunisolarFields { day: 1, month: "Tishri".to_string(), year: 5786 }
        );
        assert_eq!(
            fields(2025, 12, 15),
            LunisolarFields { day: 25, month: "Kislev".to_string(), year: 5786 }
        );
        assert_eq!(
            fields(2026, 4, 2),
            LunisolarFields { day: 15, month: "Nisan".to_string(), year: 5786 }
        );
        assert_eq!(
            fields(2026, 10, 19),
            LunisolarFields { day: 8, month: "Heshvan".to_string(), year: 5787 }
        );
    }

    #[test]
    fn test_adar_naming_by_year_type() {
        // 5785 is a common year
        assert_eq!(fields(2025, 3, 14).month, "Adar");
        // 5784 is a leap year
        assert_eq!(fields(2024, 2, 23).month, "Adar I");
        assert_eq!(fields(2024, 3, 24).month, "Adar II");
        assert_eq!(fields(2024, 3, 24).day, 14);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        assert!(!is_leap_year(5786));
        assert!(is_leap_year(5787));
    }

    #[test]
    fn test_year_lengths_are_valid() {
        for year in 5700..5900 {
            let length = days_in_year(year);
            assert!(
                matches!(length, 353..=355 | 383..=385),
                "year {} has {} days",
                year,
                length
            );
        }
    }

    #[test]
    fn test_round_trip_over_a_span() {
        let start = i64::from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().num_days_from_ce());
        for fixed in start..start + 1500 {
            let (year, month, day) = hebrew_from_fixed(fixed);
            assert_eq!(fixed_from_hebrew(year, month, day), fixed);
        }
    }
}
