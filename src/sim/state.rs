//! Simulation state
//!
//! Everything one running simulation owns: both blocks, the collision
//! counter and any budget deferred by the event cap. A mass change builds a
//! new state instead of patching this one.

use serde::Serialize;

use super::body::Body;
use super::step::{StepOutcome, advance};
use crate::consts::*;
use crate::error::{Error, Result};

/// Complete simulation state (deterministic)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationState {
    /// Block nearest the wall
    pub body1: Body,
    /// Outer block
    pub body2: Body,
    /// Total collisions since reset
    pub collisions: u64,
    /// Simulated time since reset
    pub time: f64,
    /// Advance calls since reset
    pub ticks: u64,
    /// Budget pushed to the next call by the event cap
    pub carry: f64,
}

impl SimulationState {
    /// Fresh state with block masses `10^m1_exponent` and `10^m2_exponent`
    pub fn new(m1_exponent: i32, m2_exponent: i32) -> Result<Self> {
        let mut body1 = Body::new(BLOCK1_START_X, BLOCK1_START_V);
        body1.set_mass_from_exponent(m1_exponent)?;
        let mut body2 = Body::new(BLOCK2_START_X, BLOCK2_START_V);
        body2.set_mass_from_exponent(m2_exponent)?;
        Ok(Self::from_bodies(body1, body2))
    }

    /// State from arbitrary blocks, counters zeroed
    pub fn from_bodies(body1: Body, body2: Body) -> Self {
        Self {
            body1,
            body2,
            collisions: 0,
            time: 0.0,
            ticks: 0,
            carry: 0.0,
        }
    }

    /// Put both blocks back at their start positions, keeping masses
    pub fn reset(&mut self) {
        self.body1.position = BLOCK1_START_X;
        self.body1.velocity = BLOCK1_START_V;
        self.body2.position = BLOCK2_START_X;
        self.body2.velocity = BLOCK2_START_V;
        self.collisions = 0;
        self.time = 0.0;
        self.ticks = 0;
        self.carry = 0.0;
    }

    /// Advance by `dt` plus anything carried over, resolving all collisions
    pub fn advance(&mut self, dt: f64, max_events: usize) -> Result<StepOutcome> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(Error::InvalidBudget { budget: dt });
        }

        let budget = dt + self.carry;
        let outcome = advance(
            &mut self.body1,
            &mut self.body2,
            budget,
            &mut self.collisions,
            max_events,
        );
        self.carry = outcome.deferred;
        self.time += outcome.elapsed;
        self.ticks += 1;
        Ok(outcome)
    }

    /// Total momentum of both blocks
    pub fn momentum(&self) -> f64 {
        self.body1.momentum() + self.body2.momentum()
    }

    /// Total kinetic energy of both blocks
    pub fn kinetic_energy(&self) -> f64 {
        self.body1.kinetic_energy() + self.body2.kinetic_energy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_blocks() {
        let state = SimulationState::new(0, 2).unwrap();
        assert_eq!(state.body1.position, 100.0);
        assert_eq!(state.body1.velocity, 0.0);
        assert_eq!(state.body2.position, 450.0);
        assert_eq!(state.body2.velocity, -1.0);
        assert_eq!(state.body2.mass(), 100.0);
        assert_eq!(state.collisions, 0);
    }

    #[test]
    fn test_new_rejects_overflowing_mass() {
        assert!(matches!(
            SimulationState::new(0, 500),
            Err(Error::InvalidMass { .. })
        ));
    }

    #[test]
    fn test_advance_rejects_bad_budget() {
        let mut state = SimulationState::new(0, 0).unwrap();
        assert!(state.advance(-1.0, 10).is_err());
        assert!(state.advance(f64::NAN, 10).is_err());
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_advance_tracks_time_and_ticks() {
        let mut state = SimulationState::new(0, 0).unwrap();
        for _ in 0..400 {
            state.advance(1.0, MAX_EVENTS_PER_ADVANCE).unwrap();
        }
        assert_eq!(state.ticks, 400);
        assert!((state.time - 400.0).abs() < 1e-9);
        // Block hit at t=320, nothing else before t=420
        assert_eq!(state.collisions, 1);
    }

    #[test]
    fn test_carry_is_spent_on_next_call() {
        let body1 = Body::new(0.0, 0.0);
        let body2 = Body::with_mass(30.0, -1.0, 1e6).unwrap();
        let mut state = SimulationState::from_bodies(body1, body2);

        let out = state.advance(1.0, 3).unwrap();
        assert_eq!(out.events.len(), 3);
        assert!(state.carry > 0.0);

        let mut total = out.elapsed;
        let mut guard = 0;
        while state.carry > 0.0 && guard < 10_000 {
            total += state.advance(0.0, 3).unwrap().elapsed;
            guard += 1;
        }
        assert_eq!(state.carry, 0.0);
        assert!((total - 1.0).abs() < 1e-12);
        assert!((state.time - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = SimulationState::new(1, 3).unwrap();
        for _ in 0..500 {
            state.advance(1.0, MAX_EVENTS_PER_ADVANCE).unwrap();
        }
        assert!(state.collisions > 0);

        state.reset();
        assert_eq!(state, SimulationState::new(1, 3).unwrap());
    }

    #[test]
    fn test_energy_conserved_over_run() {
        let mut state = SimulationState::new(0, 4).unwrap();
        let (p0, e0) = (state.momentum(), state.kinetic_energy());
        for _ in 0..319 {
            state.advance(1.0, MAX_EVENTS_PER_ADVANCE).unwrap();
        }
        // Before the first hit nothing changes
        assert_eq!(state.momentum(), p0);
        for _ in 0..5000 {
            state.advance(1.0, MAX_EVENTS_PER_ADVANCE).unwrap();
        }
        assert!((state.kinetic_energy() - e0).abs() < 1e-6 * e0);
    }
}
