//! Calendar-date normalization
//!
//! Converts between local and UTC calendar dates without the off-by-one-day
//! drift that naive timestamp math produces near midnight. All values are
//! date-only `YYYY-MM-DD` strings; the offset is injected so conversions are
//! deterministic under test.

use chrono::{Duration, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

const DATE_FMT: &str = "%Y-%m-%d";

/// Maps a calendar date between the user's local day and the UTC day.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer {
    offset: FixedOffset,
}

impl DateNormalizer {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Normalizer for the system's current UTC offset.
    pub fn local() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// Normalizer with a zero offset; conversions are the identity.
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Re-expresses a local calendar date as the UTC calendar date of its
    /// local midnight. Returns `None` on empty or unparseable input.
    pub fn local_to_utc(&self, date: &str) -> Option<String> {
        let day = parse_date(date)?;
        let midnight = self
            .offset
            .from_local_datetime(&day.and_hms_opt(0, 0, 0)?)
            .single()?;
        Some(format_date(midnight.with_timezone(&Utc).date_naive()))
    }

    /// Inverse of [`local_to_utc`](Self::local_to_utc).
    ///
    /// The end of the UTC day always falls inside the local day whose
    /// midnight produced it, so this round-trips exactly for any fixed
    /// offset.
    pub fn utc_to_local(&self, date: &str) -> Option<String> {
        let day = parse_date(date)?;
        let end_of_day = Utc.from_utc_datetime(&day.and_hms_opt(23, 59, 59)?);
        Some(format_date(end_of_day.with_timezone(&self.offset).date_naive()))
    }
}

/// Calendar arithmetic on a date string; offset-free, so immune to DST.
pub fn add_days(date: &str, days: i64) -> Option<String> {
    let day = parse_date(date)?;
    Some(format_date(day + Duration::days(days)))
}

pub fn format_date(day: NaiveDate) -> String {
    day.format(DATE_FMT).to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FMT).ok()
}
