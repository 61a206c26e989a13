mod display;
mod scheduler;

pub use display::{ConsoleDisplay, CountdownDisplay};
pub use scheduler::{
    clamp_interval, RefreshLoop, DEFAULT_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL,
    MIN_REFRESH_INTERVAL,
};
