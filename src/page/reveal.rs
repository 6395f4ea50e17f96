// Reveal-on-scroll for `[data-animate]` blocks and the skill progress bars.
// Without an observer, or under reduced motion, everything jumps straight to
// its final state.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::dom;

pub const VISIBLE: &str = "visible";

const ANIMATE_SELECTOR: &str = "[data-animate]";
const ANIMATE_STATE_ATTR: &str = "data-animate-state";
const ANIMATE_ROOT_MARGIN: &str = "0px 0px -10% 0px";
const ANIMATE_THRESHOLD: f64 = 0.15;

const SKILL_SELECTOR: &str = ".skill-item";
const SKILL_FILL_SELECTOR: &str = ".skill-fill";
const SKILL_THRESHOLD: f64 = 0.3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Immediate,
    OnIntersect,
}

impl Mode {
    pub fn select(reduced_motion: bool, has_observer: bool) -> Mode {
        if reduced_motion || !has_observer {
            Mode::Immediate
        } else {
            Mode::OnIntersect
        }
    }
}

/// CSS width for a `data-progress` value; `None` when the value is empty.
pub fn progress_width(progress: Option<&str>) -> Option<String> {
    progress.filter(|v| !v.is_empty()).map(|v| format!("{}%", v))
}

fn show(element: &Element) -> Result<(), JsValue> {
    element.set_attribute(ANIMATE_STATE_ATTR, VISIBLE)
}

/// Fills the bar and returns the fill element plus the progress value.
fn fill_skill(item: &Element) -> Result<Option<(Element, String)>, JsValue> {
    let fill = match item.query_selector(SKILL_FILL_SELECTOR)? {
        Some(fill) => fill,
        None => return Ok(None),
    };
    let progress = item.get_attribute("data-progress");
    let width = match progress_width(progress.as_deref()) {
        Some(width) => width,
        None => return Ok(None),
    };
    dom::set_style(&fill, "width", &width)?;
    Ok(progress.map(|value| (fill, value)))
}

pub fn init_animations(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    let animated = dom::collect(&document.query_selector_all(ANIMATE_SELECTOR)?);
    if animated.is_empty() {
        return Ok(());
    }
    match Mode::select(reduced_motion, dom::supports_intersection_observer(window)) {
        Mode::Immediate => animated.iter().try_for_each(show),
        Mode::OnIntersect => dom::observe(&animated, ANIMATE_ROOT_MARGIN, ANIMATE_THRESHOLD, |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            if let Err(e) = show(&target) {
                log!("reveal failed: {:?}", e);
            }
            observer.unobserve(&target);
        }),
    }
}

pub fn init_skills(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    let items = dom::collect(&document.query_selector_all(SKILL_SELECTOR)?);
    if items.is_empty() {
        return Ok(());
    }
    match Mode::select(reduced_motion, dom::supports_intersection_observer(window)) {
        Mode::Immediate => items.iter().try_for_each(|item| fill_skill(item).map(|_| ())),
        Mode::OnIntersect => dom::observe(&items, "0px", SKILL_THRESHOLD, |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            let filled = fill_skill(&target).and_then(|filled| match filled {
                Some((fill, value)) => match fill.parent_element() {
                    Some(bar) => bar.set_attribute("aria-valuenow", &value),
                    None => Ok(()),
                },
                None => Ok(()),
            });
            if let Err(e) = filled {
                log!("skill progress failed: {:?}", e);
            }
            observer.unobserve(&target);
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_shows_everything_at_once() {
        assert_eq!(Mode::select(true, true), Mode::Immediate);
        assert_eq!(Mode::select(true, false), Mode::Immediate);
    }

    #[test]
    fn missing_observer_shows_everything_at_once() {
        assert_eq!(Mode::select(false, false), Mode::Immediate);
        assert_eq!(Mode::select(false, true), Mode::OnIntersect);
    }

    #[test]
    fn progress_becomes_percent_width() {
        assert_eq!(progress_width(Some("85")), Some("85%".to_owned()));
        assert_eq!(progress_width(Some("42.5")), Some("42.5%".to_owned()));
    }

    #[test]
    fn empty_progress_leaves_bar_alone() {
        assert_eq!(progress_width(None), None);
        assert_eq!(progress_width(Some("")), None);
    }
}
