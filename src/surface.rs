// Drawing surface the particle field renders onto. The browser build draws on
// a 2d canvas; tests swap in a recorder.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::viewport::Viewport;

pub trait Surface {
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self, viewport: Viewport);
    fn draw_glow(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) -> Result<(), String>;
    fn draw_link(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        opacity: f64,
        width: f64,
    ) -> Result<(), String>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // None when the canvas can't hand out a 2d context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        let (width, height) = viewport.pixel_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, viewport: Viewport) {
        self.context.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn draw_glow(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) -> Result<(), String> {
        let [x, y] = center;
        self.context.begin_path();
        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, radius)
            .map_err(|e| format!("{:?}", e))?;
        gradient
            .add_color_stop(0.0, &color.to_rgba(alpha))
            .map_err(|e| format!("{:?}", e))?;
        gradient
            .add_color_stop(1.0, &color.to_rgba(0.0))
            .map_err(|e| format!("{:?}", e))?;
        self.context.set_fill_style_canvas_gradient(&gradient);
        self.context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)
            .map_err(|e| format!("{:?}", e))?;
        self.context.fill();
        Ok(())
    }

    fn draw_link(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        opacity: f64,
        width: f64,
    ) -> Result<(), String> {
        self.context.set_stroke_style_str(&color.to_rgba(opacity));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}
