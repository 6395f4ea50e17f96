// Page furniture: the preloader fade, the back-to-top button and the footer
// year.

use wasm_bindgen::prelude::*;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use super::dom;

const PRELOADER_ID: &str = "preloader";
const PRELOADER_FADE_CLASS: &str = "fade-out";
pub const PRELOADER_HIDE_MS: i32 = 750;

const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
const YEAR_ID: &str = "current-year";

pub fn scroll_behavior(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

pub fn year_text(year: u32) -> String {
    year.to_string()
}

/// Fades the preloader once the window has finished loading.
pub fn init_preloader(document: &Document, window: &Window) -> Result<(), JsValue> {
    let preloader = match document.get_element_by_id(PRELOADER_ID) {
        Some(preloader) => preloader,
        None => return Ok(()),
    };
    let timeout_window = window.clone();
    dom::listen(window, "load", move |_| {
        if let Err(e) = preloader.class_list().add_1(PRELOADER_FADE_CLASS) {
            log!("preloader fade failed: {:?}", e);
        }
        let hidden = preloader.clone();
        let scheduled = dom::set_timeout(&timeout_window, PRELOADER_HIDE_MS, move || {
            if let Err(e) = dom::set_style(&hidden, "display", "none") {
                log!("preloader hide failed: {:?}", e);
            }
        });
        if let Err(e) = scheduled {
            log!("preloader hide not scheduled: {:?}", e);
        }
    })
}

pub fn init_back_to_top(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    let button = match document.query_selector(BACK_TO_TOP_SELECTOR)? {
        Some(button) => button,
        None => return Ok(()),
    };
    let window = window.clone();
    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(scroll_behavior(reduced_motion));
        window.scroll_to_with_scroll_to_options(&options);
    })
}

pub fn set_current_year(document: &Document) {
    if let Some(element) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        element.set_text_content(Some(&year_text(year)));
    }
}
