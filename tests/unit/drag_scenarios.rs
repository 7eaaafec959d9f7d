// Drag controller scenarios
// Pointer gestures on a six-row month grid and the drops they produce

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use test_case::test_case;

use data_calendar::models::drop_event::DropEvent;
use data_calendar::services::drag::{DragController, DragOptions, GridRect, GridSurface, PointerId, PointerInput};
use data_calendar::utils::date::shift_iso_date;

use fixtures::dates::ymd;
use fixtures::items;

/// 840 x 600 grid: 120px columns, 100px rows
const RECT: GridRect = GridRect { left: 40.0, top: 80.0, width: 840.0, height: 600.0 };
const ROWS: usize = 6;

struct MountedGrid;

impl GridSurface for MountedGrid {
    fn bounding_rect(&self) -> Option<GridRect> {
        Some(RECT)
    }

    fn capture_pointer(&mut self, _pointer_id: PointerId) {}

    fn release_pointer(&mut self, _pointer_id: PointerId) {}
}

fn pointer_at(row: usize, col: usize) -> PointerInput {
    PointerInput::new(
        RECT.left + col as f32 * 120.0 + 60.0,
        RECT.top + row as f32 * 100.0 + 50.0,
        7,
    )
}

fn controller() -> (DragController<MountedGrid>, Rc<RefCell<Vec<DropEvent>>>) {
    let drops: Rc<RefCell<Vec<DropEvent>>> = Rc::default();
    let sink = Rc::clone(&drops);
    let options = DragOptions { row_count: ROWS, ..DragOptions::default() };
    let controller = DragController::new(MountedGrid, options, move |event| sink.borrow_mut().push(event));
    (controller, drops)
}

#[test_case((0, 2), (0, 5), 3, "2024-01-04" ; "right within a row")]
#[test_case((0, 5), (0, 1), -4, "2023-12-28" ; "left within a row")]
#[test_case((1, 3), (3, 3), 14, "2024-01-15" ; "two rows down")]
#[test_case((2, 0), (1, 6), -1, "2023-12-31" ; "wrap to previous row end")]
fn test_single_day_drag(down: (usize, usize), up: (usize, usize), delta: i64, target: &str) {
    let (mut controller, drops) = controller();
    let item = items::single(1, ymd(2024, 1, 1));

    assert!(controller.on_pointer_down(pointer_at(down.0, down.1), &item, down.0, down.1, 0));
    controller.on_pointer_move(pointer_at(up.0, up.1));
    assert_eq!(controller.current_day_delta(), delta);
    controller.on_pointer_up(pointer_at(up.0, up.1));

    let drops = drops.borrow();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].day_delta, delta);
    assert_eq!(drops[0].target_date.to_string(), target);
    assert_eq!(shift_iso_date("2024-01-01", delta).unwrap(), target);
}

#[test]
fn test_grabbing_middle_of_bar_moves_start_to_cursor() {
    let (mut controller, drops) = controller();
    // Four-day bar drawn at row 0, columns 1..=4; grabbed on column 3
    let item = items::spanning(5, ymd(2024, 1, 2), ymd(2024, 1, 5));

    controller.on_pointer_down(pointer_at(0, 3), &item, 0, 1, 0);
    assert_eq!(controller.current_day_delta(), 2);
    assert_eq!(controller.start_absolute_col(), 3);

    controller.on_pointer_move(pointer_at(1, 3));
    assert_eq!(controller.current_day_delta(), 9);
    controller.on_pointer_up(pointer_at(1, 3));

    let drops = drops.borrow();
    let drop = &drops[0];
    assert_eq!(drop.target_date, ymd(2024, 1, 11));
    assert_eq!(drop.apply().effective_to_date(), ymd(2024, 1, 14));
}

#[test]
fn test_pointer_id_is_per_gesture() {
    let (mut controller, drops) = controller();
    let item = items::single(2, ymd(2024, 1, 1));

    controller.on_pointer_down(pointer_at(0, 0), &item, 0, 0, 0);
    let mut foreign = pointer_at(0, 4);
    foreign.pointer_id = 99;
    controller.on_pointer_up(foreign);
    assert!(controller.is_dragging());

    controller.on_pointer_move(pointer_at(0, 4));
    controller.on_pointer_up(pointer_at(0, 4));
    assert!(!controller.is_dragging());
    assert_eq!(drops.borrow()[0].day_delta, 4);
}

#[test]
fn test_second_gesture_starts_clean() {
    let (mut controller, drops) = controller();
    let item = items::single(3, ymd(2024, 1, 10));

    controller.on_pointer_down(pointer_at(1, 2), &item, 1, 2, 0);
    controller.on_pointer_move(pointer_at(1, 6));
    controller.on_pointer_up(pointer_at(1, 6));

    controller.on_pointer_down(pointer_at(4, 0), &item, 4, 0, 0);
    assert_eq!(controller.current_day_delta(), 0);
    assert_eq!(controller.start_absolute_col(), 28);
    controller.on_pointer_up(pointer_at(4, 0));

    assert_eq!(drops.borrow().len(), 1);
}
