//! Async timers driving the ranch.
//!
//! Two repeating timers run on one task: the day timer fires the daily
//! degradation pass, and the display timer tells the host to refresh
//! scoreboards. Both are multiplexed over `tokio::select!` together
//! with a shutdown watch channel, so a stop request lands between
//! timer fires, never mid-pass.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

use ranch_world::DayReport;

use crate::config::SimulationConfig;
use crate::context::RanchContext;

/// The two timer periods, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerIntervals {
    /// Period of the daily degradation pass.
    pub day: Duration,
    /// Period of the scoreboard refresh.
    pub display_refresh: Duration,
}

impl TimerIntervals {
    /// Derive intervals from configuration, flooring at one millisecond.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            day: Duration::from_millis(config.day_interval_ms.max(1)),
            display_refresh: Duration::from_millis(config.display_refresh_ms.max(1)),
        }
    }
}

/// Callback invoked by the timer loop.
///
/// Implementations push the results out to the host: broadcast the day
/// report, redraw scoreboards, and so on.
pub trait SchedulerCallback: Send {
    /// Called after each daily degradation pass completes.
    fn on_day(&mut self, report: &DayReport, context: &RanchContext);

    /// Called on every display refresh tick.
    fn on_display_refresh(&mut self, context: &RanchContext);
}

/// A no-op callback for testing.
pub struct NoOpCallback;

impl SchedulerCallback for NoOpCallback {
    fn on_day(&mut self, _report: &DayReport, _context: &RanchContext) {}

    fn on_display_refresh(&mut self, _context: &RanchContext) {}
}

/// Run both timers until the shutdown channel reads `true`.
///
/// The first fire of each timer happens one full period after startup,
/// matching a scheduler that counts from plugin enable rather than
/// firing immediately. Missed fires are skipped, not bunched.
pub async fn run_timers(
    context: &mut RanchContext,
    intervals: TimerIntervals,
    callback: &mut dyn SchedulerCallback,
    shutdown: &mut watch::Receiver<bool>,
) {
    let start = Instant::now();
    let mut day_timer = interval_at(start.checked_add(intervals.day).unwrap_or(start), intervals.day);
    let mut display_timer = interval_at(
        start.checked_add(intervals.display_refresh).unwrap_or(start),
        intervals.display_refresh,
    );
    day_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    display_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        day_interval_ms = u64::try_from(intervals.day.as_millis()).unwrap_or(u64::MAX),
        display_refresh_ms =
            u64::try_from(intervals.display_refresh.as_millis()).unwrap_or(u64::MAX),
        "ranch timers starting"
    );

    loop {
        tokio::select! {
            _ = day_timer.tick() => {
                let report = context.advance_day();
                callback.on_day(&report, context);
            }
            _ = display_timer.tick() => {
                callback.on_display_refresh(context);
            }
            result = shutdown.changed() => {
                let stop = result.is_err() || *shutdown.borrow();
                if stop {
                    info!(day = context.degradation.day(), "ranch timers stopping");
                    return;
                }
            }
        }
    }
}
