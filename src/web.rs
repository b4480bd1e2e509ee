//! Browser bindings
//!
//! Exposes the controller to JavaScript. The page owns the canvas, the
//! sliders and the log textarea; it calls `tick` once per animation frame
//! and reads geometry and log text back.

use wasm_bindgen::prelude::*;

use crate::controller::Controller;
use crate::settings::Settings;
use crate::view::BlockView;

fn to_js(err: crate::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Wall Blocks starting...");
    }
}

/// One simulation bound to a page
#[wasm_bindgen]
pub struct WebSimulation {
    controller: Controller,
}

#[wasm_bindgen]
impl WebSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(m1_exponent: i32, m2_exponent: i32) -> Result<WebSimulation, JsValue> {
        let controller =
            Controller::new(Settings::with_masses(m1_exponent, m2_exponent)).map_err(to_js)?;
        Ok(Self { controller })
    }

    /// Slider input: rebuilds the simulation
    pub fn set_masses(&mut self, m1_exponent: i32, m2_exponent: i32) -> Result<(), JsValue> {
        self.controller.set_masses(m1_exponent, m2_exponent).map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Advance one frame; returns the number of collisions it produced
    pub fn tick(&mut self) -> Result<u32, JsValue> {
        let outcome = self.controller.tick().map_err(to_js)?;
        Ok(outcome.events.len() as u32)
    }

    pub fn collisions(&self) -> f64 {
        self.controller.state().collisions as f64
    }

    /// Contents for the log textarea
    pub fn log_text(&self) -> String {
        self.controller.log().text()
    }

    /// True once after new log lines arrived
    pub fn take_scroll_request(&mut self) -> bool {
        self.controller.take_scroll_request()
    }

    pub fn hud(&self) -> String {
        self.controller.view().hud
    }

    pub fn mass_labels(&self) -> Vec<String> {
        let view = self.controller.view();
        vec![view.m1_label, view.m2_label]
    }

    /// `[x, y, width, height, caption_y]` for block 1 or 2
    pub fn block_rect(&self, index: u32) -> Vec<f64> {
        let rect = |b: &BlockView| vec![b.x, b.y, b.width, b.height, b.caption_y];
        let view = self.controller.view();
        match index {
            1 => rect(&view.block1),
            _ => rect(&view.block2),
        }
    }

    pub fn block_caption(&self, index: u32) -> String {
        let view = self.controller.view();
        match index {
            1 => view.block1.caption,
            _ => view.block2.caption,
        }
    }

    pub fn ground_y(&self) -> f64 {
        crate::consts::GROUND_Y
    }
}
