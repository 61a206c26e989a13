mod models;
mod occurrence;
mod remaining;
mod service;
mod window;

pub use crate::models::messages::{CountdownMessages, REMAINING_PLACEHOLDER};
pub use models::{CountdownResult, Remaining};
pub use occurrence::{next_occurrence, this_week_occurrence};
pub use remaining::{format_remaining, remaining_until};
pub use service::{describe, WeeklyCountdown};
pub use window::is_within_window;
