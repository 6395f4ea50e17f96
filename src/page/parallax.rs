// Scroll-linked parallax for `[data-parallax]` elements, polled once per
// animation frame. Disabled entirely under reduced motion.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::dom;

pub const DEFAULT_SPEED: f64 = 0.1;
pub const MIN_SCROLL_DELTA: f64 = 1.0;

const SELECTOR: &str = "[data-parallax]";

/// Leading-number parse of `data-speed`. Missing, unparsable, zero and NaN
/// values all fall back to `DEFAULT_SPEED`.
pub fn speed(attr: Option<&str>) -> f64 {
    let text = match attr {
        Some(text) => text.trim_start(),
        None => return DEFAULT_SPEED,
    };
    let parsed = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok().filter(|v| v.is_finite()));
    match parsed {
        Some(v) if v != 0.0 => v,
        _ => DEFAULT_SPEED,
    }
}

pub fn transform(scroll_y: f64, speed: f64) -> String {
    format!("translate3d(0, {}px, 0)", scroll_y * speed)
}

/// Remembers the last applied scroll offset so sub-pixel jitter is ignored.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    pub fn update(&mut self, scroll_y: f64) -> Option<f64> {
        if (scroll_y - self.last).abs() < MIN_SCROLL_DELTA {
            return None;
        }
        self.last = scroll_y;
        Some(scroll_y)
    }
}

struct Layer {
    element: Element,
    speed: f64,
}

fn apply(layers: &[Layer], scroll_y: f64) -> Result<(), JsValue> {
    for layer in layers {
        dom::set_style(&layer.element, "transform", &transform(scroll_y, layer.speed))?;
    }
    Ok(())
}

fn schedule(window: Window, layers: Rc<Vec<Layer>>, mut tracker: ScrollTracker) {
    let next_window = window.clone();
    let scheduled = dom::request_frame(&window, move || {
        let scroll_y = next_window.scroll_y().unwrap_or(0.0);
        if let Some(scroll_y) = tracker.update(scroll_y) {
            if let Err(e) = apply(&layers, scroll_y) {
                log!("parallax update failed: {:?}", e);
            }
        }
        schedule(next_window, layers, tracker);
    });
    if let Err(e) = scheduled {
        log!("parallax stopped: {:?}", e);
    }
}

pub fn init(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    if reduced_motion {
        return Ok(());
    }
    let layers: Vec<Layer> = dom::collect(&document.query_selector_all(SELECTOR)?)
        .into_iter()
        .map(|element| {
            let speed = speed(element.get_attribute("data-speed").as_deref());
            Layer { element, speed }
        })
        .collect();
    if layers.is_empty() {
        return Ok(());
    }
    schedule(window.clone(), Rc::new(layers), ScrollTracker::default());
    Ok(())
}
