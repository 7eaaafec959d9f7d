// Test fixtures - reusable test data
// Provides consistent dates, week rows and items across test files
#![allow(dead_code)]

use chrono::NaiveDate;
use data_calendar::models::calendar_item::CalendarItem;
use data_calendar::models::week_row::{DayCell, WeekRow};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Monday, Jan 1 2024
    pub fn jan_1_2024() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Week rows for testing
pub mod rows {
    use super::*;

    /// Seven consecutive days starting at `start`
    pub fn week_from(start: NaiveDate) -> WeekRow {
        WeekRow {
            days: start
                .iter_days()
                .take(7)
                .map(|date| DayCell { date, is_other_month: false })
                .collect(),
        }
    }

    /// `count` contiguous rows starting at `start`
    pub fn weeks_from(start: NaiveDate, count: usize) -> Vec<WeekRow> {
        start
            .iter_weeks()
            .take(count)
            .map(week_from)
            .collect()
    }
}

/// Sample items for testing
pub mod items {
    use super::*;

    pub fn single(id: i64, date: NaiveDate) -> CalendarItem {
        CalendarItem::new(id, format!("Item {}", id), date)
    }

    pub fn spanning(id: i64, from: NaiveDate, to: NaiveDate) -> CalendarItem {
        let mut item = single(id, from);
        item.to_date = Some(to);
        item
    }

    /// A busy January 2024: overlapping multi-day bars plus single-day chips
    pub fn busy_january() -> Vec<CalendarItem> {
        use super::dates::ymd;
        vec![
            spanning(1, ymd(2024, 1, 1), ymd(2024, 1, 3)),
            spanning(2, ymd(2024, 1, 5), ymd(2024, 1, 10)),
            single(3, ymd(2024, 1, 2)),
            single(4, ymd(2024, 1, 2)),
            single(5, ymd(2024, 1, 2)),
            spanning(6, ymd(2023, 12, 28), ymd(2024, 1, 2)),
            spanning(7, ymd(2024, 1, 20), ymd(2024, 2, 3)),
            single(8, ymd(2024, 1, 31)),
        ]
    }
}
