//! Pointer-driven drag and drop of calendar items across the week grid.
//!
//! The host forwards pointer events; the controller maps client coordinates to
//! grid cells using the grid rectangle measured when the gesture started, and
//! tracks a day delta relative to the item's `from_date`.
//!
//! The delta includes a grab offset: the distance between the item's true
//! start and the cell under the pointer at pointer-down. The item's start
//! therefore lands on the cell the pointer is released over, wherever on the
//! segment it was grabbed.

use chrono::NaiveDate;

use crate::models::calendar_item::CalendarItem;
use crate::models::drop_event::DropEvent;
use crate::models::settings::CalendarSettings;
use crate::models::week_row::DAYS_PER_WEEK;
use crate::utils::date::shift_date;

pub type PointerId = u64;

/// Grid container bounds in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub client_x: f32,
    pub client_y: f32,
    pub pointer_id: PointerId,
}

impl PointerInput {
    pub fn new(client_x: f32, client_y: f32, pointer_id: PointerId) -> Self {
        Self { client_x, client_y, pointer_id }
    }
}

/// The rendered grid container as seen by the controller.
#[cfg_attr(test, mockall::automock)]
pub trait GridSurface {
    /// Current bounds, `None` while the grid is not mounted
    fn bounding_rect(&self) -> Option<GridRect>;
    /// Route further events of this pointer to the grid
    fn capture_pointer(&mut self, pointer_id: PointerId);
    fn release_pointer(&mut self, pointer_id: PointerId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOptions {
    pub enabled: bool,
    pub column_count: usize,
    pub row_count: usize,
}

impl DragOptions {
    /// Options for a grid of `row_count` rows, enabled per `settings.draggable`
    pub fn from_settings(settings: &CalendarSettings, row_count: usize) -> Self {
        Self {
            enabled: settings.draggable,
            row_count,
            ..Self::default()
        }
    }
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            column_count: DAYS_PER_WEEK,
            row_count: 0,
        }
    }
}

/// Observable drag state. Neutral (all zero/empty) while idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub dragged_item: Option<CalendarItem>,
    /// Day delta to apply to the item's `from_date`, grab offset included
    pub current_day_delta: i64,
    /// Absolute column (`row * column_count + col`) under the pointer at pointer-down
    pub start_absolute_col: i64,
    pub current_absolute_col: i64,
}

/// Per-gesture data that is not observable
#[derive(Debug, Clone, Copy)]
struct Gesture {
    rect: GridRect,
    row_height: f32,
    grab_offset: i64,
    pointer_id: PointerId,
}

type DropCallback = Box<dyn FnMut(DropEvent)>;
type ChangeCallback = Box<dyn FnMut(&DragState)>;

pub struct DragController<S: GridSurface> {
    surface: S,
    options: DragOptions,
    state: DragState,
    gesture: Option<Gesture>,
    on_drop: DropCallback,
    on_change: Option<ChangeCallback>,
}

impl<S: GridSurface> DragController<S> {
    pub fn new(surface: S, options: DragOptions, on_drop: impl FnMut(DropEvent) + 'static) -> Self {
        Self {
            surface,
            options,
            state: DragState::default(),
            gesture: None,
            on_drop: Box::new(on_drop),
            on_change: None,
        }
    }

    /// Call `listener` after every state change
    pub fn with_change_listener(mut self, listener: impl FnMut(&DragState) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Takes effect at the next pointer-down; a live gesture is unaffected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.options.row_count = row_count;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn dragged_item(&self) -> Option<&CalendarItem> {
        self.state.dragged_item.as_ref()
    }

    pub fn current_day_delta(&self) -> i64 {
        self.state.current_day_delta
    }

    pub fn start_absolute_col(&self) -> i64 {
        self.state.start_absolute_col
    }

    pub fn current_absolute_col(&self) -> i64 {
        self.state.current_absolute_col
    }

    /// Where the dragged item's `from_date` would land if released now
    pub fn preview_target_date(&self) -> Option<NaiveDate> {
        self.state
            .dragged_item
            .as_ref()
            .map(|item| shift_date(item.from_date, self.state.current_day_delta))
    }

    fn absolute_col(&self, row: usize, col: usize) -> i64 {
        (row * self.options.column_count + col) as i64
    }

    fn grid_position(&self, gesture: &Gesture, client_x: f32, client_y: f32) -> GridCell {
        // Either count may drop to zero mid-gesture when the host's rows change
        let columns = self.options.column_count.max(1);
        let rows = self.options.row_count.max(1);
        let rel_x = client_x - gesture.rect.left;
        let rel_y = client_y - gesture.rect.top;

        let col = ((rel_x / gesture.rect.width) * columns as f32).floor() as i64;
        let row = (rel_y / gesture.row_height).floor() as i64;

        GridCell {
            col: col.clamp(0, columns as i64 - 1) as usize,
            row: row.clamp(0, rows as i64 - 1) as usize,
        }
    }

    /// Begin dragging `item` from the segment starting at
    /// (`row_index`, `segment_start_col`).
    ///
    /// `event_start_day_offset` is the number of days between the item's
    /// `from_date` and the segment's first visible day (nonzero only for
    /// continuation segments). Returns whether a drag started.
    pub fn on_pointer_down(
        &mut self,
        event: PointerInput,
        item: &CalendarItem,
        row_index: usize,
        segment_start_col: usize,
        event_start_day_offset: i64,
    ) -> bool {
        if !self.options.enabled {
            return false;
        }
        if self.gesture.is_some() {
            log::debug!(
                "Ignoring pointer-down on item {} while item {:?} is being dragged",
                item.id,
                self.state.dragged_item.as_ref().map(|dragged| &dragged.id)
            );
            return false;
        }
        if self.options.row_count == 0 || self.options.column_count == 0 {
            return false;
        }
        let Some(rect) = self.surface.bounding_rect() else {
            log::debug!("Grid not mounted; drag of item {} not started", item.id);
            return false;
        };
        if !rect.is_measurable() {
            log::debug!("Grid has no measurable area ({:?}); drag not started", rect);
            return false;
        }

        let mut gesture = Gesture {
            rect,
            row_height: rect.height / self.options.row_count as f32,
            grab_offset: 0,
            pointer_id: event.pointer_id,
        };

        let pointer = self.grid_position(&gesture, event.client_x, event.client_y);
        let segment_abs = self.absolute_col(row_index, segment_start_col);
        let pointer_abs = self.absolute_col(pointer.row, pointer.col);
        gesture.grab_offset = event_start_day_offset + (pointer_abs - segment_abs);

        self.state = DragState {
            is_dragging: true,
            dragged_item: Some(item.clone()),
            current_day_delta: gesture.grab_offset,
            start_absolute_col: pointer_abs,
            current_absolute_col: pointer_abs,
        };
        self.gesture = Some(gesture);
        self.surface.capture_pointer(event.pointer_id);

        log::debug!(
            "Drag started for item {} at cell ({}, {}), grab offset {}",
            item.id,
            pointer.row,
            pointer.col,
            gesture.grab_offset
        );
        self.notify();
        true
    }

    pub fn on_pointer_move(&mut self, event: PointerInput) {
        let Some(gesture) = self.active_gesture(event.pointer_id) else {
            return;
        };

        let cell = self.grid_position(&gesture, event.client_x, event.client_y);
        let absolute = self.absolute_col(cell.row, cell.col);
        if absolute == self.state.current_absolute_col {
            return;
        }

        self.state.current_absolute_col = absolute;
        self.state.current_day_delta = (absolute - self.state.start_absolute_col) + gesture.grab_offset;
        self.notify();
    }

    /// Finish the gesture, emitting a drop event when the delta is nonzero.
    pub fn on_pointer_up(&mut self, event: PointerInput) {
        let Some(gesture) = self.active_gesture(event.pointer_id) else {
            return;
        };
        self.surface.release_pointer(gesture.pointer_id);

        let delta = self.state.current_day_delta;
        if let Some(item) = self.state.dragged_item.take() {
            if delta != 0 {
                let source_date = item.from_date;
                let target_date = shift_date(source_date, delta);
                log::info!(
                    "Item {} dropped: {} -> {} ({:+} days)",
                    item.id,
                    source_date,
                    target_date,
                    delta
                );
                (self.on_drop)(DropEvent {
                    item,
                    source_date,
                    target_date,
                    day_delta: delta,
                });
            }
        }

        self.reset();
    }

    /// Abort the gesture without emitting a drop event.
    pub fn cancel(&mut self) {
        let Some(gesture) = self.gesture else {
            return;
        };
        self.surface.release_pointer(gesture.pointer_id);
        log::debug!("Drag cancelled");
        self.reset();
    }

    fn active_gesture(&self, pointer_id: PointerId) -> Option<Gesture> {
        self.gesture.filter(|gesture| gesture.pointer_id == pointer_id)
    }

    fn reset(&mut self) {
        self.gesture = None;
        self.state = DragState::default();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.state);
        }
    }
}
