// Calendar item module
// Host-owned event record read by the layout engine and drag controller

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::inclusive_day_span;

/// Stable identifier of a calendar item, either textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        ItemId::Number(i64::from(value))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

/// A single calendar event spanning whole days.
///
/// `to_date` is inclusive; when absent the item covers `from_date` only.
/// Fields the host attaches beyond the known ones are kept in `extra` and
/// survive a JSON round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    pub id: ItemId,
    pub from_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CalendarItem {
    /// Create a single-day item
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            from_date: date,
            to_date: None,
            label: label.into(),
            color: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn builder() -> CalendarItemBuilder {
        CalendarItemBuilder::new()
    }

    /// Last covered day: `to_date`, or `from_date` for single-day items
    pub fn effective_to_date(&self) -> NaiveDate {
        self.to_date.unwrap_or(self.from_date)
    }

    /// Inclusive number of days covered. Zero or negative for reversed ranges.
    pub fn total_duration_days(&self) -> i64 {
        inclusive_day_span(self.from_date, self.effective_to_date())
    }

    pub fn is_multi_day(&self) -> bool {
        self.total_duration_days() > 1
    }

    pub fn is_valid_range(&self) -> bool {
        self.effective_to_date() >= self.from_date
    }

    /// Whether the item covers `date`
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.from_date && date <= self.effective_to_date()
    }

    /// Host-side validation. The layout engine never calls this; it only
    /// skips items with a reversed range.
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Item label cannot be empty".to_string());
        }

        if !self.is_valid_range() {
            return Err("Item end date must not precede its start date".to_string());
        }

        if let Some(ref color) = self.color {
            if !is_css_color(color) {
                return Err("Color must be a hex, rgb() or hsl() value".to_string());
            }
        }

        Ok(())
    }
}

fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = value.to_ascii_lowercase();
    ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        && lower.ends_with(')')
}

/// Builder for items with optional fields
#[derive(Default)]
pub struct CalendarItemBuilder {
    id: Option<ItemId>,
    label: Option<String>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    color: Option<String>,
    extra: BTreeMap<String, serde_json::Value>,
}

impl CalendarItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach a host-defined field
    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Result<CalendarItem, String> {
        let id = self.id.ok_or("Item id is required")?;
        let from_date = self.from_date.ok_or("Item start date is required")?;

        let item = CalendarItem {
            id,
            from_date,
            to_date: self.to_date,
            label: self.label.unwrap_or_default(),
            color: self.color,
            extra: self.extra,
        };

        item.validate()?;
        Ok(item)
    }
}
