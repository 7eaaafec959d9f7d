//! Event layout engine.
//!
//! Splits calendar items into per-row segments and stacks them into lanes:
//! 1. Each item is clipped to every week row it intersects.
//! 2. Each row's segments are sorted so multi-day items come first (longest
//!    first), then by start column, then by width.
//! 3. Segments are placed greedily in the lowest lane with no column overlap.
//!
//! The pass is a pure function of its inputs and never fails: items with a
//! reversed range and rows whose boundary dates cannot be located are skipped.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::calendar_item::CalendarItem;
use crate::models::week_row::{PositionedSegment, PositionedWeekRow, WeekRow, DAYS_PER_WEEK};
use crate::utils::date::date_key;

#[derive(Debug, Clone, Copy)]
struct RowRange {
    first_day: NaiveDate,
    last_day: NaiveDate,
    first_key: i32,
    last_key: i32,
}

impl RowRange {
    fn of(row: &WeekRow) -> Option<Self> {
        let first_day = row.first_date()?;
        let last_day = row.last_date()?;
        Some(Self {
            first_day,
            last_day,
            first_key: date_key(first_day),
            last_key: date_key(last_day),
        })
    }
}

/// Segment before lane assignment. Sorting reads only the scalar fields.
#[derive(Debug, Clone, Copy)]
struct UnpositionedSegment<'a> {
    item: &'a CalendarItem,
    start_col: usize,
    span_cols: usize,
    is_continuation: bool,
    continues_after: bool,
    total_duration: i64,
}

/// Sort key of a segment within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRank {
    pub total_duration: i64,
    pub start_col: usize,
    pub span_cols: usize,
}

impl SegmentRank {
    fn is_multi_day(&self) -> bool {
        self.total_duration > 1
    }
}

/// Lane priority: multi-day before single-day, longer total duration first,
/// earlier start column first, wider span first.
pub fn compare_segments(a: &SegmentRank, b: &SegmentRank) -> Ordering {
    b.is_multi_day()
        .cmp(&a.is_multi_day())
        .then_with(|| b.total_duration.cmp(&a.total_duration))
        .then_with(|| a.start_col.cmp(&b.start_col))
        .then_with(|| b.span_cols.cmp(&a.span_cols))
}

impl UnpositionedSegment<'_> {
    fn rank(&self) -> SegmentRank {
        SegmentRank {
            total_duration: self.total_duration,
            start_col: self.start_col,
            span_cols: self.span_cols,
        }
    }
}

/// Compute positioned segments for each week row.
///
/// Returns one output row per input row, in the same order.
pub fn compute_event_layout<'a>(
    items: &'a [CalendarItem],
    week_rows: &'a [WeekRow],
) -> Vec<PositionedWeekRow<'a>> {
    let ranges: Vec<Option<RowRange>> = week_rows.iter().map(RowRange::of).collect();
    let mut row_segments: Vec<Vec<UnpositionedSegment<'a>>> = vec![Vec::new(); week_rows.len()];

    for item in items {
        let item_from = item.from_date;
        let item_to = item.effective_to_date();
        let from_key = date_key(item_from);
        let to_key = date_key(item_to);

        if to_key < from_key {
            log::debug!(
                "Skipping calendar item {}: end {} precedes start {}",
                item.id,
                item_to,
                item_from
            );
            continue;
        }

        let total_duration = item.total_duration_days();

        for (row_idx, (row, range)) in week_rows.iter().zip(&ranges).enumerate() {
            let Some(range) = range else { continue };

            if from_key > range.last_key || to_key < range.first_key {
                continue;
            }

            let seg_start = if from_key >= range.first_key { item_from } else { range.first_day };
            let seg_end = if to_key <= range.last_key { item_to } else { range.last_day };

            let (Some(start_col), Some(end_col)) = (row.column_of(seg_start), row.column_of(seg_end))
            else {
                log::debug!("Row {} has no column for item {}; skipping", row_idx, item.id);
                continue;
            };
            if end_col < start_col {
                continue;
            }

            row_segments[row_idx].push(UnpositionedSegment {
                item,
                start_col,
                span_cols: end_col - start_col + 1,
                is_continuation: from_key < range.first_key,
                continues_after: to_key > range.last_key,
                total_duration,
            });
        }
    }

    week_rows
        .iter()
        .zip(row_segments)
        .map(|(row, segments)| assign_lanes(row, segments))
        .collect()
}

fn assign_lanes<'a>(row: &'a WeekRow, mut segments: Vec<UnpositionedSegment<'a>>) -> PositionedWeekRow<'a> {
    segments.sort_by(|a, b| compare_segments(&a.rank(), &b.rank()));

    // Occupied (start_col, end_col) ranges per lane
    let mut lanes: Vec<Vec<(usize, usize)>> = Vec::new();

    let positioned: Vec<PositionedSegment<'a>> = segments
        .into_iter()
        .map(|seg| {
            let seg_end = seg.start_col + seg.span_cols - 1;

            let free_lane = lanes.iter().position(|occupied| {
                !occupied
                    .iter()
                    .any(|&(occ_start, occ_end)| seg.start_col <= occ_end && seg_end >= occ_start)
            });
            let lane = free_lane.unwrap_or_else(|| {
                lanes.push(Vec::new());
                lanes.len() - 1
            });
            lanes[lane].push((seg.start_col, seg_end));

            PositionedSegment {
                item: seg.item,
                start_col: seg.start_col,
                span_cols: seg.span_cols,
                lane,
                is_continuation: seg.is_continuation,
                continues_after: seg.continues_after,
            }
        })
        .collect();

    PositionedWeekRow {
        days: &row.days,
        segments: positioned,
        lane_count: lanes.len(),
    }
}

/// Hidden item count per column when only lanes below `max_visible_items`
/// are rendered. Always returns `column_count` entries.
pub fn compute_overflow_per_column(
    segments: &[PositionedSegment<'_>],
    max_visible_items: usize,
    column_count: usize,
) -> Vec<usize> {
    let mut total = vec![0usize; column_count];
    let mut visible = vec![0usize; column_count];

    for seg in segments {
        let end = (seg.start_col + seg.span_cols).min(column_count);
        for col in seg.start_col..end {
            total[col] += 1;
            if seg.lane < max_visible_items {
                visible[col] += 1;
            }
        }
    }

    total
        .into_iter()
        .zip(visible)
        .map(|(total, visible)| total.saturating_sub(visible))
        .collect()
}

/// [`compute_overflow_per_column`] for a standard seven-column row
pub fn overflow_for_row(row: &PositionedWeekRow<'_>, max_visible_items: usize) -> Vec<usize> {
    compute_overflow_per_column(&row.segments, max_visible_items, DAYS_PER_WEEK)
}

/// Text of the "+N" indicator, `None` when nothing is hidden
pub fn overflow_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{}", hidden))
}
