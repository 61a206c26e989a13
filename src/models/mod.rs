// Module exports for models

pub mod messages;
pub mod schedule;
pub mod settings;
pub mod ui;
