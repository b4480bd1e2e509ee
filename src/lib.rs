//! Wall Blocks - two sliding blocks and a wall, simulated exactly
//!
//! Core modules:
//! - `sim`: Event-driven physics (bodies, collision times, elastic response)
//! - `log_buffer`: Bounded collision log fed by the stepper
//! - `controller`: Owns the simulation state, handles resets and ticks
//! - `ticker`: Fixed-cadence scheduler driving the controller
//! - `view`: Read-only frame snapshot for renderers
//! - `settings`: Data-driven configuration

pub mod controller;
pub mod error;
pub mod log_buffer;
pub mod settings;
pub mod sim;
pub mod ticker;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::Controller;
pub use error::{Error, Result};
pub use log_buffer::LogBuffer;
pub use settings::Settings;
pub use ticker::Ticker;
pub use view::FrameView;

/// Simulation configuration constants
pub mod consts {
    /// Macroscopic step per tick. Any value works, collisions inside it are exact.
    pub const DEFAULT_DT: f64 = 1.0;
    /// Ticks per second when driven in real time
    pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Block size for a unit mass
    pub const BASE_SIZE: f64 = 30.0;
    /// Extra size per decade of mass
    pub const SIZE_SCALE: f64 = 10.0;

    /// Reset positions and velocities
    pub const BLOCK1_START_X: f64 = 100.0;
    pub const BLOCK1_START_V: f64 = 0.0;
    pub const BLOCK2_START_X: f64 = 450.0;
    pub const BLOCK2_START_V: f64 = -1.0;

    /// Allowed mass exponents (mass = 10^n)
    pub const MIN_MASS_EXPONENT: i32 = 0;
    pub const MAX_MASS_EXPONENT: i32 = 10;

    /// Collision log capacity in lines
    pub const LOG_MAX_LINES: usize = 50;
    /// Cap on collisions resolved by one advance call; the rest of the budget is deferred
    pub const MAX_EVENTS_PER_ADVANCE: usize = 100_000;

    /// Ground line in screen space
    pub const GROUND_Y: f64 = 180.0;
}

/// Format a value the way the log viewer expects: fixed decimals, no negative zero
#[inline]
pub fn fixed(value: f64, decimals: usize) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:.*}", decimals, value + 0.0)
}
