// Grid service
// Builds the week rows of the month and week views

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::models::ui::CalendarView;
use crate::models::week_row::{DayCell, WeekRow, DAYS_PER_WEEK};
use crate::utils::date::shift_date;

/// First day of the week containing `date`
pub fn week_start_for(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 7
        - first_day_of_week.num_days_from_sunday())
        % 7;
    shift_date(date, -i64::from(offset))
}

fn build_row(start: NaiveDate, month: u32) -> WeekRow {
    WeekRow {
        days: start
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(|date| DayCell {
                date,
                is_other_month: date.month() != month,
            })
            .collect(),
    }
}

/// Every week touching the anchor's month. Four to six rows depending on
/// where the month falls.
pub fn month_rows(anchor: NaiveDate, first_day_of_week: Weekday) -> Vec<WeekRow> {
    let month = anchor.month();
    let first_of_month = anchor.with_day(1).unwrap_or(anchor);
    let last_of_month = first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first_of_month);

    let mut rows = Vec::with_capacity(6);
    let mut start = week_start_for(first_of_month, first_day_of_week);
    while start <= last_of_month {
        rows.push(build_row(start, month));
        let next = shift_date(start, DAYS_PER_WEEK as i64);
        if next == start {
            break;
        }
        start = next;
    }
    rows
}

/// The single row containing `anchor`
pub fn week_rows(anchor: NaiveDate, first_day_of_week: Weekday) -> Vec<WeekRow> {
    vec![build_row(week_start_for(anchor, first_day_of_week), anchor.month())]
}

pub fn rows_for_view(view: CalendarView, anchor: NaiveDate, first_day_of_week: Weekday) -> Vec<WeekRow> {
    match view {
        CalendarView::Month => month_rows(anchor, first_day_of_week),
        CalendarView::Week => week_rows(anchor, first_day_of_week),
    }
}

/// Move the anchor by `steps` months or weeks. Month moves clamp the day to
/// the target month's length (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn navigate(view: CalendarView, anchor: NaiveDate, steps: i32) -> NaiveDate {
    match view {
        CalendarView::Month => {
            let months = Months::new(steps.unsigned_abs());
            let moved = if steps >= 0 {
                anchor.checked_add_months(months)
            } else {
                anchor.checked_sub_months(months)
            };
            moved.unwrap_or(anchor)
        }
        CalendarView::Week => shift_date(anchor, i64::from(steps) * DAYS_PER_WEEK as i64),
    }
}

/// Row count signal consumed by the drag controller
pub fn row_count(rows: &[WeekRow]) -> usize {
    rows.len()
}
