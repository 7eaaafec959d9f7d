// Settings module
// Calendar display and interaction preferences, persisted as TOML

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ui::{CalendarView, LegendItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Lanes rendered per row before "+N" indicators take over
    pub max_visible_items: usize,
    pub draggable: bool,
    pub default_view: CalendarView,
    pub legend: Vec<LegendItem>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            max_visible_items: 3,
            draggable: true,
            default_view: CalendarView::Month,
            legend: Vec::new(),
        }
    }
}

impl CalendarSettings {
    /// Weekday the grid starts on. Out-of-range values wrap modulo 7.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err("first_day_of_week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }
        if self.max_visible_items == 0 {
            return Err("max_visible_items must be at least 1".to_string());
        }
        Ok(())
    }
}
