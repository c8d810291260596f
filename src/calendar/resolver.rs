use anyhow::Result;
use chrono::{DateTime, Days, NaiveDate, TimeZone};
use tracing::warn;

use super::{LunisolarCalendar, LunisolarFields};

/// Forward search horizon in days
pub const MAX_SCAN_DAYS: u64 = 700;

/// Resolves "next date whose lunisolar fields match" queries.
///
/// The conversion capability is constructed once, up front. If construction fails the
/// resolver stays unavailable for its whole lifetime and every lookup returns `None`.
pub struct DateResolver<C> {
    calendar: Option<C>,
}

impl<C: LunisolarCalendar> DateResolver<C> {
    pub fn new(init: impl FnOnce() -> Result<C>) -> Self {
        let calendar = match init() {
            Ok(calendar) => Some(calendar),
            Err(e) => {
                warn!("Calendar conversion unavailable, observance dates disabled: {:#}", e);
                None
            }
        };
        Self { calendar }
    }

    pub fn is_available(&self) -> bool {
        self.calendar.is_some()
    }

    pub fn fields(&self, date: NaiveDate) -> Option<LunisolarFields> {
        self.calendar.as_ref()?.fields(date)
    }

    /// First date on or after `anchor` (within [`MAX_SCAN_DAYS`]) whose fields satisfy
    /// `predicate`
    pub fn find_next<P>(&self, anchor: NaiveDate, predicate: P) -> Option<NaiveDate>
    where
        P: Fn(&LunisolarFields) -> bool,
    {
        let calendar = self.calendar.as_ref()?;

        (0..=MAX_SCAN_DAYS)
            .map_while(|offset| anchor.checked_add_days(Days::new(offset)))
            .find(|date| calendar.fields(*date).is_some_and(|fields| predicate(&fields)))
    }
}

/// Calendar day of `now` in its own time zone.
///
/// Working on whole dates pins every probe to the same time of day, so a daylight-saving
/// shift can never push a step onto the wrong date.
pub fn anchor_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}
