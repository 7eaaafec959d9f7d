// Drop event module
// Emitted once per completed drag that moved the item

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar_item::CalendarItem;
use crate::utils::date::shift_date;

/// A finished drag with a nonzero day delta. The host applies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub item: CalendarItem,
    /// The item's `from_date` when the drag began
    pub source_date: NaiveDate,
    /// `source_date` shifted by `day_delta`
    pub target_date: NaiveDate,
    pub day_delta: i64,
}

impl DropEvent {
    /// Return the dragged item moved by `day_delta`, keeping its duration.
    pub fn apply(&self) -> CalendarItem {
        let mut moved = self.item.clone();
        moved.from_date = self.target_date;
        moved.to_date = self.item.to_date.map(|to| shift_date(to, self.day_delta));
        moved
    }
}
