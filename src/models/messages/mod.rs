// Messages module
// Display wording for a countdown, with a `{remaining}` placeholder

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the formatted remaining time.
pub const REMAINING_PLACEHOLDER: &str = "{remaining}";

/// Wording for one countdown display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownMessages {
    /// Shown while the event is live.
    pub live: String,
    /// Shown before the event; `{remaining}` is substituted.
    pub upcoming: String,
    /// Shown when less than a minute is left and the remaining text is empty.
    pub starting: String,
}

impl Default for CountdownMessages {
    fn default() -> Self {
        Self::full_text()
    }
}

impl CountdownMessages {
    pub fn new(
        live: impl Into<String>,
        upcoming: impl Into<String>,
        starting: impl Into<String>,
    ) -> Self {
        Self {
            live: live.into(),
            upcoming: upcoming.into(),
            starting: starting.into(),
        }
    }

    /// Wording of the event page's full-sentence countdown.
    pub fn full_text() -> Self {
        Self::new(
            "The event is currently live!",
            "Next event starts in: {remaining}.",
            "The event is starting now!",
        )
    }

    /// Wording of the site-wide Happy Hour banner.
    pub fn banner() -> Self {
        Self::new(
            "Happy Hour is currently live!",
            "{remaining} until next Happy Hour!",
            "Happy Hour is starting now!",
        )
    }

    /// Pick the wording for a live or upcoming event. `remaining` is the
    /// already formatted time left, empty when under a minute.
    pub fn render(&self, is_live: bool, remaining: &str) -> String {
        if is_live {
            return self.live.clone();
        }

        if remaining.is_empty() {
            self.starting.clone()
        } else {
            self.upcoming.replace(REMAINING_PLACEHOLDER, remaining)
        }
    }
}
