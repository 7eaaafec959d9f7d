// Date utility functions
// Calendar-date arithmetic shared by the layout engine and drag controller

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid ISO date '{0}', expected YYYY-MM-DD")]
    InvalidIso(String),
}

/// Monotonic integer encoding (`year*10000 + month*100 + day`) used for
/// ordering comparisons. Not a day count: differences are meaningless.
pub fn date_key(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

/// Number of days covered by `from..=to`. A single-day range is 1.
pub fn inclusive_day_span(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// Shift a date by a signed number of days.
///
/// Works on plain calendar dates, so no shift can skip or repeat a day.
/// A shift leaving chrono's representable range returns `date` unchanged.
pub fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };

    shifted.unwrap_or_else(|| {
        log::warn!("Shifting {} by {} days is out of range; keeping original date", date, days);
        date
    })
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT)
        .map_err(|_| DateError::InvalidIso(value.to_string()))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// String form of [`shift_date`]: `"2024-01-30"` shifted by 3 is `"2024-02-02"`.
pub fn shift_iso_date(value: &str, days: i64) -> Result<String, DateError> {
    let date = parse_iso_date(value)?;
    Ok(format_iso_date(shift_date(date, days)))
}
