use std::time::Duration as StdDuration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::display::CountdownDisplay;
use crate::services::clock::Clock;
use crate::services::countdown::WeeklyCountdown;

pub const DEFAULT_REFRESH_INTERVAL: StdDuration = StdDuration::from_secs(60);
pub const MIN_REFRESH_INTERVAL: StdDuration = StdDuration::from_secs(1);
pub const MAX_REFRESH_INTERVAL: StdDuration = StdDuration::from_secs(60);

/// Clamp a requested cadence into the supported 1-60 second range.
pub fn clamp_interval(requested: StdDuration) -> StdDuration {
    let clamped = requested.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL);
    if clamped != requested {
        log::warn!(
            "Refresh interval {:?} is outside {:?}..={:?}, using {:?}",
            requested,
            MIN_REFRESH_INTERVAL,
            MAX_REFRESH_INTERVAL,
            clamped
        );
    }
    clamped
}

/// Re-evaluates every countdown on a fixed cadence and pushes changed text
/// to the display. Ticks run to completion one at a time.
pub struct RefreshLoop<C: Clock, D: CountdownDisplay> {
    countdowns: Vec<WeeklyCountdown>,
    clock: C,
    display: D,
    interval: StdDuration,
    last_rendered: Vec<Option<String>>,
    ticks: u64,
}

impl<C: Clock, D: CountdownDisplay> RefreshLoop<C, D> {
    pub fn new(countdowns: Vec<WeeklyCountdown>, clock: C, display: D) -> Self {
        let last_rendered = vec![None; countdowns.len()];
        Self {
            countdowns,
            clock,
            display,
            interval: DEFAULT_REFRESH_INTERVAL,
            last_rendered,
            ticks: 0,
        }
    }

    pub fn with_interval(mut self, interval: StdDuration) -> Self {
        self.interval = clamp_interval(interval);
        self
    }

    pub fn interval(&self) -> StdDuration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Evaluate all countdowns once. Returns how many were sent to the display.
    pub fn tick(&mut self) -> usize {
        self.ticks += 1;
        let mut delivered = 0;

        for (countdown, last) in self.countdowns.iter().zip(self.last_rendered.iter_mut()) {
            let result = countdown.evaluate(&self.clock);
            let text = countdown.render(&result);
            if last.as_deref() == Some(text.as_str()) {
                continue;
            }

            log::debug!("Countdown '{}' changed: {}", countdown.name(), text);
            if result.is_live() {
                log::info!("Countdown '{}' is live", countdown.name());
            }

            self.display.show(countdown.name(), &result, &text);
            *last = Some(text);
            delivered += 1;
        }

        delivered
    }

    /// Tick immediately, then once per interval, until `shutdown` turns true,
    /// its sender is dropped, or `max_ticks` evaluations have run.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>, max_ticks: Option<u64>) -> D {
        log::info!(
            "Starting refresh loop for {} countdown(s) every {:?}",
            self.countdowns.len(),
            self.interval
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                    if max_ticks.is_some_and(|max| self.ticks >= max) {
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        log::info!("Refresh loop stopped after {} tick(s)", self.ticks);
        self.display
    }
}
