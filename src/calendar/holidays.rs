use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use super::resolver::DateResolver;
use super::{LunisolarCalendar, LunisolarFields};

/// Fixed set of observances, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HolidayKey {
    Purim,
    ShushanPurim,
    ErevPesach,
    Pesach,
    Shavuos,
    RoshHashana,
    YomKippur,
    Sukkos,
    Chanukah,
    RoshChodesh,
}

/// Observance key to display string, e.g. `"Pesach: Apr 13 - Apr 20, 2025"`.
/// Observances the resolver could not place are absent.
pub type HolidayTable = BTreeMap<HolidayKey, String>;

impl HolidayKey {
    pub const ALL: [HolidayKey; 10] = [
        HolidayKey::Purim,
        HolidayKey::ShushanPurim,
        HolidayKey::ErevPesach,
        HolidayKey::Pesach,
        HolidayKey::Shavuos,
        HolidayKey::RoshHashana,
        HolidayKey::YomKippur,
        HolidayKey::Sukkos,
        HolidayKey::Chanukah,
        HolidayKey::RoshChodesh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKey::Purim => "purim",
            HolidayKey::ShushanPurim => "shushan_purim",
            HolidayKey::ErevPesach => "erev_pesach",
            HolidayKey::Pesach => "pesach",
            HolidayKey::Shavuos => "shavuos",
            HolidayKey::RoshHashana => "rosh_hashana",
            HolidayKey::YomKippur => "yom_kippur",
            HolidayKey::Sukkos => "sukkos",
            HolidayKey::Chanukah => "chanukah",
            HolidayKey::RoshChodesh => "rosh_chodesh",
        }
    }

    /// Display name; Rosh Chodesh is labelled with its month at format time
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKey::Purim => "Purim",
            HolidayKey::ShushanPurim => "Shushan Purim",
            HolidayKey::ErevPesach => "Erev Pesach",
            HolidayKey::Pesach => "Pesach",
            HolidayKey::Shavuos => "Shavuos",
            HolidayKey::RoshHashana => "Rosh Hashana",
            HolidayKey::YomKippur => "Yom Kippur",
            HolidayKey::Sukkos => "Sukkos",
            HolidayKey::Chanukah => "Chanukah",
            HolidayKey::RoshChodesh => "Rosh Chodesh",
        }
    }

    /// Lowercase phrases that tie a question's text to this observance
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            HolidayKey::Purim => &["purim", "megillah", "mishloach manos"],
            HolidayKey::ShushanPurim => &["shushan purim"],
            HolidayKey::ErevPesach => &["erev pesach", "chametz", "bedikas", "biur"],
            HolidayKey::Pesach => &["pesach", "passover", "matzah", "matza", "seder"],
            HolidayKey::Shavuos => &["shavuos", "shavuot"],
            HolidayKey::RoshHashana => &["rosh hashana", "shofar"],
            HolidayKey::YomKippur => &["yom kippur"],
            HolidayKey::Sukkos => &["sukkos", "sukkot", "sukkah", "lulav", "esrog"],
            HolidayKey::Chanukah => &["chanukah", "hanukkah", "menorah"],
            HolidayKey::RoshChodesh => &["rosh chodesh", "new moon"],
        }
    }

    /// (lunisolar day, month, span length in days)
    fn rule(&self) -> Option<(u32, Month, u64)> {
        let rule = match self {
            HolidayKey::Purim => (14, Month::Adar, 1),
            HolidayKey::ShushanPurim => (15, Month::Adar, 1),
            HolidayKey::ErevPesach => (14, Month::Named("nisan"), 1),
            HolidayKey::Pesach => (15, Month::Named("nisan"), 8),
            HolidayKey::Shavuos => (6, Month::Named("sivan"), 2),
            HolidayKey::RoshHashana => (1, Month::Named("tishri"), 2),
            HolidayKey::YomKippur => (10, Month::Named("tishri"), 1),
            HolidayKey::Sukkos => (15, Month::Named("tishri"), 7),
            HolidayKey::Chanukah => (25, Month::Named("kislev"), 8),
            HolidayKey::RoshChodesh => return None,
        };
        Some(rule)
    }
}

#[derive(Debug, Clone, Copy)]
enum Month {
    /// Adar or Adar II, never Adar I
    Adar,
    Named(&'static str),
}

impl Month {
    fn matches(&self, fields: &LunisolarFields) -> bool {
        match self {
            Month::Adar => fields.is_adar(),
            Month::Named(name) => fields.month_is(name),
        }
    }
}

/// Resolve every observance relative to `anchor` and render its display string.
/// Runs once per process; observances that cannot be resolved are omitted.
pub fn build_holidays<C: LunisolarCalendar>(
    resolver: &DateResolver<C>,
    anchor: NaiveDate,
) -> HolidayTable {
    let mut table = HolidayTable::new();

    for key in HolidayKey::ALL {
        let display = match key.rule() {
            Some((day, month, span)) => resolver
                .find_next(anchor, |f| f.day == day && month.matches(f))
                .map(|start| format_observance(key.name(), start, span)),
            None => rosh_chodesh(resolver, anchor),
        };

        if let Some(display) = display {
            table.insert(key, display);
        }
    }

    table
}

/// Next 1st of a month other than Tishri. When the previous month had 30 days its
/// last day is also Rosh Chodesh and the observance starts a day earlier.
fn rosh_chodesh<C: LunisolarCalendar>(
    resolver: &DateResolver<C>,
    anchor: NaiveDate,
) -> Option<String> {
    let first = resolver.find_next(anchor, |f| f.day == 1 && !f.month_is("tishri"))?;
    let month = resolver.fields(first)?.month;
    let label = format!("{} {}", HolidayKey::RoshChodesh.name(), month);

    let eve = first.checked_sub_days(Days::new(1))?;
    if resolver.fields(eve).is_some_and(|f| f.day == 30) {
        Some(format_observance(&label, eve, 2))
    } else {
        Some(format_observance(&label, first, 1))
    }
}

/// `Name: March 14, 2025` for one day, `Name: Apr 13 - Apr 20, 2025` for a span within
/// one year, `Name: Dec 26, 2024 - Jan 2, 2025` across a year boundary
pub fn format_observance(name: &str, start: NaiveDate, days: u64) -> String {
    let end = if days > 1 { start.checked_add_days(Days::new(days - 1)) } else { None };

    match end {
        None => format!("{}: {}", name, start.format("%B %-d, %Y")),
        Some(end) if end.year() == start.year() => {
            format!("{}: {} - {}", name, start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
        Some(end) => {
            format!("{}: {} - {}", name, start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
    }
}

/// Display strings of every resolved observance mentioned in `text`, in table order
pub fn holidays_mentioned(table: &HolidayTable, text: &str) -> Vec<String> {
    let text = text.to_lowercase().replace('_', " ");
    table
        .iter()
        .filter(|(key, _)| key.keywords().iter().any(|keyword| text.contains(keyword)))
        .map(|(_, display)| display.clone())
        .collect()
}
