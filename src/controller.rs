//! Simulation controller
//!
//! Owns the one active `SimulationState` together with its log and
//! settings. Frontends talk to the controller only: mass changes rebuild the
//! state from scratch, ticks advance it and feed the log.

use crate::error::Result;
use crate::log_buffer::LogBuffer;
use crate::settings::Settings;
use crate::sim::{SimulationState, StepOutcome, format_batch};
use crate::view::FrameView;

#[derive(Debug, Clone)]
pub struct Controller {
    state: SimulationState,
    log: LogBuffer,
    settings: Settings,
}

impl Controller {
    /// Build a controller from validated settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let state = SimulationState::new(settings.m1_exponent, settings.m2_exponent)?;
        log::info!(
            "New simulation: m1=10^{} m2=10^{} dt={}",
            settings.m1_exponent,
            settings.m2_exponent,
            settings.dt
        );
        Ok(Self {
            state,
            log: LogBuffer::new(settings.log_max_lines),
            settings,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True once after new log lines arrived
    pub fn take_scroll_request(&mut self) -> bool {
        self.log.take_scroll_request()
    }

    /// Back to the start positions; clears the counter and the log
    pub fn reset(&mut self) {
        self.state.reset();
        self.log.clear();
        log::info!("Simulation reset");
    }

    /// Change both mass exponents; this is a full reset
    pub fn set_masses(&mut self, m1_exponent: i32, m2_exponent: i32) -> Result<()> {
        let settings = Settings {
            m1_exponent,
            m2_exponent,
            ..self.settings.clone()
        };
        settings.validate()?;
        self.state = SimulationState::new(m1_exponent, m2_exponent)?;
        self.settings = settings;
        self.log.clear();
        log::info!("Masses changed: m1=10^{m1_exponent} m2=10^{m2_exponent}");
        Ok(())
    }

    pub fn set_m1_exponent(&mut self, n: i32) -> Result<()> {
        self.set_masses(n, self.settings.m2_exponent)
    }

    pub fn set_m2_exponent(&mut self, n: i32) -> Result<()> {
        self.set_masses(self.settings.m1_exponent, n)
    }

    /// Advance one tick of `settings.dt` and log the collisions it produced
    pub fn tick(&mut self) -> Result<StepOutcome> {
        let outcome = self
            .state
            .advance(self.settings.dt, self.settings.max_events_per_advance)?;
        if !outcome.events.is_empty() {
            let batch = format_batch(&outcome.events);
            self.log.push_batch(&batch);
            log::debug!(
                "tick {}: {} collisions (total {})",
                self.state.ticks,
                outcome.events.len(),
                self.state.collisions
            );
        }
        Ok(outcome)
    }

    /// Read-only snapshot for the renderer
    pub fn view(&self) -> FrameView {
        FrameView::from_state(&self.state, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_first_collision_is_logged() {
        let mut ctl = Controller::new(Settings::default()).unwrap();
        for _ in 0..319 {
            assert!(ctl.tick().unwrap().events.is_empty());
        }
        assert!(ctl.log().is_empty());

        ctl.tick().unwrap();
        assert_eq!(ctl.state().collisions, 1);
        assert_eq!(
            ctl.log().text(),
            "1\tblock\tx1=115.0000\tv1=-1.0000\tx2=145.0000\tv2=0.0000\n"
        );
        assert!(ctl.take_scroll_request());
    }

    #[test]
    fn test_log_is_capped() {
        let settings = Settings {
            log_max_lines: 10,
            ..Settings::with_masses(0, 4)
        };
        let mut ctl = Controller::new(settings).unwrap();
        for _ in 0..5000 {
            ctl.tick().unwrap();
        }
        assert_eq!(ctl.state().collisions, 314);
        assert_eq!(ctl.log().len(), 10);
        assert!(ctl.log().last().unwrap().starts_with("314\t"));
    }

    #[test]
    fn test_mass_change_resets() {
        let mut ctl = Controller::new(Settings::default()).unwrap();
        for _ in 0..600 {
            ctl.tick().unwrap();
        }
        assert!(ctl.state().collisions > 0);

        ctl.set_m2_exponent(2).unwrap();
        assert_eq!(ctl.state().collisions, 0);
        assert_eq!(ctl.state().body2.position, 450.0);
        assert_eq!(ctl.state().body2.mass(), 100.0);
        assert!(ctl.log().is_empty());
        assert_eq!(ctl.settings().m2_exponent, 2);
    }

    #[test]
    fn test_bad_mass_keeps_running_simulation() {
        let mut ctl = Controller::new(Settings::default()).unwrap();
        ctl.tick().unwrap();
        let before = ctl.state().clone();
        assert!(matches!(ctl.set_m1_exponent(99), Err(Error::InvalidSettings(_))));
        assert_eq!(ctl.state(), &before);
        assert_eq!(ctl.settings().m1_exponent, 0);
    }

    #[test]
    fn test_reset_clears_log() {
        let mut ctl = Controller::new(Settings::default()).unwrap();
        for _ in 0..320 {
            ctl.tick().unwrap();
        }
        assert!(!ctl.log().is_empty());
        ctl.reset();
        assert!(ctl.log().is_empty());
        assert_eq!(ctl.state().collisions, 0);
        assert_eq!(ctl.state().body1.position, 100.0);
    }
}
