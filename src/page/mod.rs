// Page behaviors that sit around the particle field. Each one quietly does
// nothing when its elements are missing from the document.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod dom;

pub mod chrome;
pub mod contact;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod titles;

pub fn init(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    chrome::init_preloader(document, window)?;
    theme::init(document, window)?;
    nav::init(document, window)?;
    titles::init_typing(document, window, reduced_motion)?;
    titles::init_rotating(document, window, reduced_motion)?;
    parallax::init(document, window, reduced_motion)?;
    reveal::init_animations(document, window, reduced_motion)?;
    reveal::init_skills(document, window, reduced_motion)?;
    filter::init(document)?;
    modal::init(document)?;
    contact::init(document, window)?;
    chrome::init_back_to_top(document, window, reduced_motion)?;
    chrome::set_current_year(document);
    Ok(())
}
