// Property-based tests for the layout engine and date arithmetic
// Random items over random contiguous week rows

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::NaiveDate;
use proptest::prelude::*;

use data_calendar::models::calendar_item::CalendarItem;
use data_calendar::services::layout::{compute_event_layout, compute_overflow_per_column};
use data_calendar::utils::date::shift_date;

use fixtures::dates::ymd;
use fixtures::{items, rows};

fn base() -> NaiveDate {
    ymd(2024, 1, 1)
}

/// Items starting within ~8 weeks around the base date, up to three weeks
/// long; some are reversed to exercise the invalid-item path.
fn arb_items() -> impl Strategy<Value = Vec<CalendarItem>> {
    prop::collection::vec((-14i64..56, -2i64..21), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(id, (start, length))| {
                let from = shift_date(base(), start);
                items::spanning(id as i64, from, shift_date(from, length))
            })
            .collect()
    })
}

proptest! {
    /// Property: the same input always yields the same layout
    #[test]
    fn prop_layout_is_deterministic(items in arb_items(), row_count in 1usize..7) {
        let rows = rows::weeks_from(base(), row_count);
        let first = compute_event_layout(&items, &rows);
        let second = compute_event_layout(&items, &rows);
        prop_assert_eq!(first, second);
    }

    /// Property: segments sharing a lane never share a column
    #[test]
    fn prop_no_overlap_within_lane(items in arb_items(), row_count in 1usize..7) {
        let rows = rows::weeks_from(base(), row_count);
        for row in compute_event_layout(&items, &rows) {
            for (i, a) in row.segments.iter().enumerate() {
                prop_assert!(a.lane < row.lane_count);
                prop_assert!(a.start_col + a.span_cols <= 7);
                for b in &row.segments[i + 1..] {
                    if a.lane == b.lane {
                        prop_assert!(a.end_col() < b.start_col || b.end_col() < a.start_col);
                    }
                }
            }
        }
    }

    /// Property: a valid item intersecting the rows has a segment in every
    /// intersected row; anything else has none
    #[test]
    fn prop_coverage(items in arb_items(), row_count in 1usize..7) {
        let rows = rows::weeks_from(base(), row_count);
        let layout = compute_event_layout(&items, &rows);

        for item in &items {
            for (row, positioned) in rows.iter().zip(&layout) {
                let first = row.first_date().unwrap();
                let last = row.last_date().unwrap();
                let intersects = item.is_valid_range()
                    && item.from_date <= last
                    && item.effective_to_date() >= first;
                let count = positioned
                    .segments
                    .iter()
                    .filter(|s| std::ptr::eq(s.item, item))
                    .count();
                prop_assert_eq!(count, usize::from(intersects));
            }
        }
    }

    /// Property: continuation flags follow the item's bounds
    #[test]
    fn prop_continuation_flags(items in arb_items(), row_count in 1usize..7) {
        let rows = rows::weeks_from(base(), row_count);
        for (row, positioned) in rows.iter().zip(compute_event_layout(&items, &rows)) {
            let first = row.first_date().unwrap();
            let last = row.last_date().unwrap();
            for segment in &positioned.segments {
                prop_assert_eq!(segment.is_continuation, segment.item.from_date < first);
                prop_assert_eq!(segment.continues_after, segment.item.effective_to_date() > last);
            }
        }
    }

    /// Property: overflow counts hidden segments per column
    #[test]
    fn prop_overflow_counts(items in arb_items(), max_visible in 0usize..5, columns in 1usize..10) {
        let rows = rows::weeks_from(base(), 3);
        for row in compute_event_layout(&items, &rows) {
            let overflow = compute_overflow_per_column(&row.segments, max_visible, columns);
            prop_assert_eq!(overflow.len(), columns);
            for (col, hidden) in overflow.iter().enumerate() {
                let expected = row
                    .segments
                    .iter()
                    .filter(|s| s.occupies(col) && s.lane >= max_visible)
                    .count();
                prop_assert_eq!(*hidden, expected);
            }
        }
    }

    /// Property: shifting forth and back returns the original date
    #[test]
    fn prop_shift_round_trip(
        year in 1900..2200i32,
        ordinal in 1..=365u32,
        days in -100_000i64..100_000,
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        prop_assert_eq!(shift_date(shift_date(date, days), -days), date);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_item_beyond_supplied_rows_only_fills_supplied_rows() {
        let rows = rows::weeks_from(base(), 2);
        let items = vec![items::spanning(1, ymd(2023, 12, 1), ymd(2024, 3, 1))];

        let layout = compute_event_layout(&items, &rows);
        assert!(layout.iter().all(|row| row.segments.len() == 1));
        assert!(layout.iter().all(|row| row.segments[0].span_cols == 7));
    }
}
