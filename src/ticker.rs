//! Fixed-cadence scheduler
//!
//! Turns wall-clock frame times into whole simulation ticks. Each tick is
//! one `Controller::tick`, so the cadence only controls how fast the
//! simulation plays back, never its accuracy.

use crate::controller::Controller;
use crate::error::Result;
use crate::settings::Settings;

/// What one `update` call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ticks run this frame
    pub ticks: u32,
    /// Collisions resolved across those ticks
    pub collisions: usize,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    /// Seconds per tick
    interval: f64,
    max_ticks_per_frame: u32,
    accumulator: f64,
}

impl Ticker {
    pub fn new(tick_rate_hz: f64, max_ticks_per_frame: u32) -> Self {
        Self {
            interval: 1.0 / tick_rate_hz,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tick_rate_hz, settings.max_ticks_per_frame)
    }

    /// Seconds per tick
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Run as many ticks as `frame_secs` of wall-clock time pays for
    pub fn update(&mut self, frame_secs: f64, controller: &mut Controller) -> Result<TickReport> {
        // Long stalls (tab in background, debugger) must not queue up a burst
        let max_frame = self.interval * self.max_ticks_per_frame as f64;
        self.accumulator += frame_secs.clamp(0.0, max_frame);

        let mut report = TickReport::default();
        while self.accumulator >= self.interval && report.ticks < self.max_ticks_per_frame {
            let outcome = controller.tick()?;
            self.accumulator -= self.interval;
            report.ticks += 1;
            report.collisions += outcome.events.len();
        }
        Ok(report)
    }

    /// Forget any partial tick (after a reset)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
