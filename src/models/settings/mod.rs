// Settings module
// TOML configuration for the countdowns and the fragment loader

use serde::{Deserialize, Serialize};

use crate::models::messages::CountdownMessages;
use crate::models::schedule::DEFAULT_UTC_OFFSET_MINUTES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reference offset for every event, in minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub refresh_interval_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_base_url: Option<String>,
    pub events: Vec<EventSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            refresh_interval_secs: 60,
            fragment_base_url: None,
            events: vec![EventSettings::happy_hour()],
        }
    }
}

/// One weekly event as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSettings {
    pub name: String,
    /// `"<day> HH:MM"`, e.g. `"thursday 19:00"`.
    pub start: String,
    pub end: String,
    #[serde(default = "default_live_message")]
    pub live_message: String,
    #[serde(default = "default_upcoming_message")]
    pub upcoming_message: String,
    #[serde(default = "default_starting_message")]
    pub starting_message: String,
}

impl EventSettings {
    pub fn happy_hour() -> Self {
        let banner = CountdownMessages::banner();
        Self {
            name: "happy-hour".to_string(),
            start: "thursday 19:00".to_string(),
            end: "thursday 20:00".to_string(),
            live_message: banner.live,
            upcoming_message: banner.upcoming,
            starting_message: banner.starting,
        }
    }

    pub fn messages(&self) -> CountdownMessages {
        CountdownMessages::new(
            self.live_message.clone(),
            self.upcoming_message.clone(),
            self.starting_message.clone(),
        )
    }
}

fn default_live_message() -> String {
    CountdownMessages::full_text().live
}

fn default_upcoming_message() -> String {
    CountdownMessages::full_text().upcoming
}

fn default_starting_message() -> String {
    CountdownMessages::full_text().starting
}
