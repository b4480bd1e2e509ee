//! Read-only frame snapshot for renderers
//!
//! Screen-space rectangles and text for one frame. Building a view never
//! touches the simulation.

use serde::Serialize;

use crate::consts::GROUND_Y;
use crate::fixed;
use crate::settings::Settings;
use crate::sim::{Body, SimulationState};

/// Gap between a block's top and its caption
const CAPTION_OFFSET: f64 = 5.0;

/// One block, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockView {
    /// Left edge
    pub x: f64,
    /// Top edge (blocks sit on the ground line)
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `x=<center> v=<velocity>`
    pub caption: String,
    /// Baseline for the caption
    pub caption_y: f64,
}

impl BlockView {
    fn from_body(body: &Body) -> Self {
        let size = body.size();
        let y = GROUND_Y - size;
        Self {
            x: body.position,
            y,
            width: size,
            height: size,
            caption: format!("x={} v={}", fixed(body.center(), 1), fixed(body.velocity, 2)),
            caption_y: y - CAPTION_OFFSET,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub ground_y: f64,
    pub block1: BlockView,
    pub block2: BlockView,
    pub collisions: u64,
    /// `Collisions: <n>`
    pub hud: String,
    /// Slider labels, `10^<n>`
    pub m1_label: String,
    pub m2_label: String,
}

impl FrameView {
    pub fn from_state(state: &SimulationState, settings: &Settings) -> Self {
        Self {
            ground_y: GROUND_Y,
            block1: BlockView::from_body(&state.body1),
            block2: BlockView::from_body(&state.body2),
            collisions: state.collisions,
            hud: format!("Collisions: {}", state.collisions),
            m1_label: mass_label(settings.m1_exponent),
            m2_label: mass_label(settings.m2_exponent),
        }
    }
}

/// Label for a mass slider
pub fn mass_label(exponent: i32) -> String {
    format!("10^{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view() {
        let settings = Settings::with_masses(0, 2);
        let state = SimulationState::new(0, 2).unwrap();
        let view = FrameView::from_state(&state, &settings);

        assert_eq!(view.block1.x, 100.0);
        assert_eq!(view.block1.y, 150.0);
        assert_eq!(view.block1.caption, "x=115.0 v=0.00");
        assert_eq!(view.block1.caption_y, 145.0);

        assert!((view.block2.width - 50.0).abs() < 1e-12);
        assert_eq!(view.block2.height, view.block2.width);
        assert_eq!(view.block2.caption, "x=475.0 v=-1.00");

        assert_eq!(view.hud, "Collisions: 0");
        assert_eq!(view.m1_label, "10^0");
        assert_eq!(view.m2_label, "10^2");
    }
}
