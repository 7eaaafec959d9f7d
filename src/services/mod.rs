// Service module exports

pub mod drag;
pub mod grid;
pub mod layout;
pub mod settings;
