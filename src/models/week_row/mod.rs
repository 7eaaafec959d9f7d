// Week row module
// Grid rows handed to the layout engine and the segments it produces

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar_item::CalendarItem;

/// Number of day columns in a calendar week row
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day lies outside the month currently displayed
    pub is_other_month: bool,
}

/// Seven consecutive days, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekRow {
    pub days: Vec<DayCell>,
}

impl WeekRow {
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    /// Column index of `date` within this row
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }
}

/// The part of one item visible in one week row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedSegment<'a> {
    pub item: &'a CalendarItem,
    pub start_col: usize,
    pub span_cols: usize,
    /// Vertical slot, 0 is topmost
    pub lane: usize,
    /// Item started in an earlier row
    pub is_continuation: bool,
    /// Item carries on into a later row
    pub continues_after: bool,
}

impl PositionedSegment<'_> {
    /// Last column covered, inclusive
    pub fn end_col(&self) -> usize {
        self.start_col + self.span_cols - 1
    }

    pub fn occupies(&self, col: usize) -> bool {
        col >= self.start_col && col < self.start_col + self.span_cols
    }

    /// Days between the item's start and this segment's first visible day.
    /// Zero unless the segment is a continuation.
    pub fn start_day_offset(&self, row: &WeekRow) -> i64 {
        match row.days.get(self.start_col) {
            Some(day) if self.is_continuation => (day.date - self.item.from_date).num_days(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedWeekRow<'a> {
    pub days: &'a [DayCell],
    pub segments: Vec<PositionedSegment<'a>>,
    pub lane_count: usize,
}
