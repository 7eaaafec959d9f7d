// Module exports for models

pub mod calendar_item;
pub mod drop_event;
pub mod settings;
pub mod ui;
pub mod week_row;
