// Site navigation: the mobile menu toggle, the header's scrolled state and
// highlighting the link for the section in view.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::dom;

pub const SCROLLED_THRESHOLD: f64 = 10.0;

const HEADER_SELECTOR: &str = ".site-header";
const TOGGLE_SELECTOR: &str = ".nav-toggle";
const NAV_SELECTOR: &str = ".primary-nav";
const LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "main section[id]";

const SCROLLED_CLASS: &str = "scrolled";
const OPEN_CLASS: &str = "open";
const ACTIVE_CLASS: &str = "active";

const SECTION_ROOT_MARGIN: &str = "-45% 0px -50% 0px";
const SECTION_THRESHOLD: f64 = 0.1;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// The `aria-expanded` value after one click on the toggle.
pub fn toggled_expanded(current: Option<&str>) -> &'static str {
    if current == Some("true") {
        "false"
    } else {
        "true"
    }
}

pub fn link_selector(section_id: &str) -> String {
    format!("{}[href=\"#{}\"]", LINK_SELECTOR, section_id)
}

fn init_menu(toggle: Element, nav: Element, links: &[Element]) -> Result<(), JsValue> {
    {
        let toggle_target = toggle.clone();
        let nav = nav.clone();
        dom::listen(&toggle, "click", move |_| {
            let expanded = toggled_expanded(toggle_target.get_attribute("aria-expanded").as_deref());
            let toggled = toggle_target
                .set_attribute("aria-expanded", expanded)
                .and_then(|_| nav.class_list().toggle(OPEN_CLASS).map(|_| ()));
            if let Err(e) = toggled {
                log!("nav toggle failed: {:?}", e);
            }
        })?;
    }

    for link in links {
        let toggle = toggle.clone();
        let nav = nav.clone();
        dom::listen(link, "click", move |_| {
            let closed = nav
                .class_list()
                .remove_1(OPEN_CLASS)
                .and_then(|_| toggle.set_attribute("aria-expanded", "false"));
            if let Err(e) = closed {
                log!("closing nav failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

fn init_header(document: &Document, window: &Window) -> Result<(), JsValue> {
    let header = document.query_selector(HEADER_SELECTOR)?;
    let ticking = Rc::new(Cell::new(false));
    let frame_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        if ticking.get() {
            return;
        }
        let header = header.clone();
        let ticking_done = ticking.clone();
        let scroll_window = frame_window.clone();
        let scheduled = dom::request_frame(&frame_window, move || {
            if let Some(header) = &header {
                let scrolled = is_scrolled(scroll_window.scroll_y().unwrap_or(0.0));
                if let Err(e) = header.class_list().toggle_with_force(SCROLLED_CLASS, scrolled) {
                    log!("header state failed: {:?}", e);
                }
            }
            ticking_done.set(false);
        });
        match scheduled {
            Ok(_) => ticking.set(true),
            Err(e) => log!("header update not scheduled: {:?}", e),
        }
    })
}

fn init_sections(document: &Document, window: &Window, links: Rc<Vec<Element>>) -> Result<(), JsValue> {
    if !dom::supports_intersection_observer(window) {
        return Ok(());
    }
    let sections = dom::collect(&document.query_selector_all(SECTION_SELECTOR)?);
    let document = document.clone();
    dom::observe(&sections, SECTION_ROOT_MARGIN, SECTION_THRESHOLD, move |entry, _| {
        let id = match entry.target().get_attribute("id") {
            Some(id) => id,
            None => return,
        };
        let active = match document.query_selector(&link_selector(&id)) {
            Ok(Some(link)) => link,
            _ => return,
        };
        if !entry.is_intersecting() {
            return;
        }
        for link in links.iter() {
            if let Err(e) = link.class_list().remove_1(ACTIVE_CLASS) {
                log!("nav highlight failed: {:?}", e);
            }
        }
        if let Err(e) = active.class_list().add_1(ACTIVE_CLASS) {
            log!("nav highlight failed: {:?}", e);
        }
    })
}

pub fn init(document: &Document, window: &Window) -> Result<(), JsValue> {
    let links = Rc::new(dom::collect(&document.query_selector_all(LINK_SELECTOR)?));
    if let (Some(toggle), Some(nav)) = (
        document.query_selector(TOGGLE_SELECTOR)?,
        document.query_selector(NAV_SELECTOR)?,
    ) {
        init_menu(toggle, nav, &links)?;
    }
    init_header(document, window)?;
    init_sections(document, window, links)
}
