//! Event-driven simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Collision times are computed analytically, never sampled
//! - Events inside one step are resolved in time order
//! - No rendering or platform dependencies

pub mod body;
pub mod event;
pub mod state;
pub mod step;

pub use body::{Body, derive_size};
pub use event::{CollisionEvent, CollisionKind, format_batch};
pub use state::SimulationState;
pub use step::{StepOutcome, advance, elastic_velocities};
