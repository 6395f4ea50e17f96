// Tunable constants for the particle field. Exported to JS so a page can
// tweak the effect before starting it; fixed once the field is running.

use wasm_bindgen::prelude::*;

use crate::color::Color;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: u32,
    /// Kept alongside max_speed for page configs; velocity draws only use
    /// the symmetric max_speed range.
    pub min_speed: f64,
    pub max_speed: f64,
    pub link_distance: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Viewport pixels of width per particle before the cap applies.
    pub density_divisor: f64,
    pub link_width: f64,
    /// Accent color as 0xRRGGBB.
    pub accent: u32,
    pub glow_alpha: f64,
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }
}

impl FieldConfig {
    pub fn accent_color(&self) -> Color {
        Color::from_u32(self.accent)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 120,
            min_speed: 0.1,
            max_speed: 0.6,
            link_distance: 120.0,
            min_size: 0.7,
            max_size: 2.4,
            density_divisor: 12.0,
            link_width: 0.6,
            accent: 0x6f80ff,
            glow_alpha: 0.8,
        }
    }
}
