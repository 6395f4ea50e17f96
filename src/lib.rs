#[macro_use]
mod utils;

extern crate nalgebra_glm as glm;

pub mod color;
pub mod config;
pub mod driver;
pub mod field;
pub mod linker;
pub mod motion;
pub mod page;
pub mod particle;
pub mod store;
pub mod surface;
pub mod viewport;
pub mod web;

use wasm_bindgen::prelude::*;

pub use config::FieldConfig;
use utils::Timer;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Wires up every page behavior and the particle background.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let _timer = Timer::new("page startup");
    let window = web::window()?;
    let document = web::document()?;
    let reduced_motion = web::prefers_reduced_motion(&window);
    page::init(&document, &window, reduced_motion)?;
    web::launch(FieldConfig::default())?;
    Ok(())
}

/// Starts only the particle background. Returns whether it is running.
#[wasm_bindgen]
pub fn start_particle_field(config: FieldConfig) -> Result<bool, JsValue> {
    web::launch(config)
}
