// Data Calendar Library
// Event layout and drag-and-drop engine for calendar week grids

pub mod models;
pub mod services;
pub mod utils;

pub use models::calendar_item::{CalendarItem, ItemId};
pub use models::drop_event::DropEvent;
pub use models::week_row::{DayCell, PositionedSegment, PositionedWeekRow, WeekRow};
pub use services::drag::{DragController, DragOptions, DragState, GridRect, GridSurface, PointerInput};
pub use services::layout::{compute_event_layout, compute_overflow_per_column};
