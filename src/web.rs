// Browser side of the render loop: reads the window, owns the animation-frame
// and resize closures, and keeps them alive for the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::config::FieldConfig;
use crate::driver::{Host, InactiveReason, RenderLoop};
use crate::surface::CanvasSurface;
use crate::viewport::Viewport;

pub const CANVAS_ID: &str = "particle-canvas";
pub const HERO_ID: &str = "hero";

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<BrowserHost, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("should have a document on window"))?;
        Ok(BrowserHost { window, document })
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;

    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion(&self.window)
    }

    fn surface(&self) -> Option<CanvasSurface> {
        let canvas = self
            .document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        CanvasSurface::new(canvas)
    }

    fn viewport(&self) -> Viewport {
        let inner_width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let inner_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let hero_height = self
            .document
            .get_element_by_id(HERO_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|hero| hero.offset_height() as f64);
        Viewport::covering(inner_width, inner_height, hero_height)
    }
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Starts the particle field if the page allows it. Returns whether it runs.
pub fn launch(config: FieldConfig) -> Result<bool, JsValue> {
    let host = BrowserHost::new()?;
    let render_loop = RenderLoop::start(&host, config);
    match &render_loop {
        RenderLoop::Inactive(InactiveReason::ReducedMotion) => {
            log!("particle field disabled: reduced motion requested");
            return Ok(false);
        }
        RenderLoop::Inactive(InactiveReason::NoSurface) => {
            log!("particle field disabled: no #{} 2d canvas", CANVAS_ID);
            return Ok(false);
        }
        RenderLoop::Running { field, .. } => {
            let viewport = field.viewport();
            log!(
                "particle field running: {} particles on {}x{}",
                field.particles().len(),
                viewport.width,
                viewport.height
            );
        }
    }

    let render_loop = Rc::new(RefCell::new(render_loop));
    let host = Rc::new(host);

    {
        let render_loop = render_loop.clone();
        let resize_host = host.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            render_loop.borrow_mut().resize(resize_host.viewport());
        }) as Box<dyn FnMut()>);
        host.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // The frame closure reschedules itself through this shared slot.
    let next_frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first_frame = next_frame.clone();
    let frame_window = host.window.clone();

    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = {
            #[cfg(feature = "frame-timing")]
            let _timer = crate::utils::Timer::new("RenderLoop::frame");
            match render_loop.borrow_mut().frame() {
                Ok(keep_going) => keep_going,
                Err(e) => {
                    log!("particle frame failed: {}", e);
                    true
                }
            }
        };
        if !keep_going {
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&frame_window, callback) {
                log!("could not schedule particle frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = first_frame.borrow().as_ref() {
        request_animation_frame(&host.window, callback)?;
    }
    Ok(true)
}
