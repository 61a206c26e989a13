use std::time::Duration;

use anyhow::{Context, Result};

use crate::models::schedule::{offset_from_minutes, WeeklySchedule, WeeklyTime};
use crate::models::settings::{EventSettings, Settings};
use crate::services::countdown::WeeklyCountdown;
use crate::services::refresh::clamp_interval;

/// Validate every configured event into a countdown, stopping at the first
/// invalid one.
pub fn build_countdowns(settings: &Settings) -> Result<Vec<WeeklyCountdown>> {
    let offset = offset_from_minutes(settings.utc_offset_minutes)
        .context("Invalid utc_offset_minutes in settings")?;

    settings
        .events
        .iter()
        .map(|event| {
            event_to_countdown(event, offset)
                .with_context(|| format!("Invalid event '{}' in settings", event.name))
        })
        .collect()
}

fn event_to_countdown(
    event: &EventSettings,
    offset: chrono::FixedOffset,
) -> Result<WeeklyCountdown> {
    let start = WeeklyTime::parse(&event.start)?;
    let end = WeeklyTime::parse(&event.end)?;
    let schedule = WeeklySchedule::new(start, end, offset)?;
    Ok(WeeklyCountdown::new(
        event.name.clone(),
        schedule,
        event.messages(),
    ))
}

pub fn refresh_interval(settings: &Settings) -> Duration {
    clamp_interval(Duration::from_secs(settings.refresh_interval_secs))
}
