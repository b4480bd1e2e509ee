//! Sliding block model
//!
//! A block is a point mass on the half-line x >= 0 with a visual width that
//! grows with the log of its mass. The width matters physically for block 1:
//! its right edge is what block 2 runs into.

use serde::Serialize;

use crate::consts::{BASE_SIZE, SIZE_SCALE};
use crate::error::{Error, Result};

/// Block width for a given mass
///
/// `BASE_SIZE + SIZE_SCALE * log10(mass)`. Rejects masses that are not
/// positive and finite instead of producing NaN or -inf widths.
pub fn derive_size(mass: f64) -> Result<f64> {
    if !(mass.is_finite() && mass > 0.0) {
        return Err(Error::InvalidMass { mass });
    }
    Ok(BASE_SIZE + SIZE_SCALE * mass.log10())
}

/// A sliding block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    /// Left edge (distance from the wall)
    pub position: f64,
    /// Signed velocity, negative is toward the wall
    pub velocity: f64,
    /// Always positive and finite
    mass: f64,
    /// Width (and height, blocks are square)
    size: f64,
}

impl Body {
    /// Unit-mass block
    pub fn new(position: f64, velocity: f64) -> Self {
        Self {
            position,
            velocity,
            mass: 1.0,
            size: BASE_SIZE,
        }
    }

    pub fn with_mass(position: f64, velocity: f64, mass: f64) -> Result<Self> {
        let size = derive_size(mass)?;
        Ok(Self {
            position,
            velocity,
            mass,
            size,
        })
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Set mass directly, recomputing size. Leaves the body untouched on error.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        self.size = derive_size(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Set mass to `10^exponent` (the slider mapping)
    pub fn set_mass_from_exponent(&mut self, exponent: i32) -> Result<()> {
        self.set_mass(10f64.powi(exponent))
    }

    /// Center of the block, used for logging and captions
    #[inline]
    pub fn center(&self) -> f64 {
        self.position + self.size / 2.0
    }

    /// Right edge, the side facing the other block
    #[inline]
    pub fn leading_edge(&self) -> f64 {
        self.position + self.size
    }

    #[inline]
    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    /// Move linearly for `dt`
    #[inline]
    pub fn drift(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }
}
