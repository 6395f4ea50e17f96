// Canvas pixel bounds for the particle field

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Size the canvas to the window, tall enough to sit behind the whole
    /// hero section when one is present.
    pub fn covering(inner_width: f64, inner_height: f64, hero_height: Option<f64>) -> Viewport {
        let height = match hero_height {
            Some(hero) => hero.max(inner_height),
            None => inner_height,
        };
        Viewport::new(inner_width, height)
    }

    pub fn contains(&self, pos: [f64; 2]) -> bool {
        pos[0] >= 0.0 && pos[0] <= self.width && pos[1] >= 0.0 && pos[1] <= self.height
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}
