// Hero text effects: the typed-out name and the rotating job titles.
// Both stay static when reduced motion is requested.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::dom;

pub const TYPED_NAME: &str = "Harsh Shah";
pub const TYPE_DELAY_MS: i32 = 140;

pub const TITLES: [&str; 4] = [
    "Full Stack Developer & AI Enthusiast",
    "Chatbot Engineer",
    "Data Analytics Practitioner",
    "Problem-Solving Aficionado",
];
pub const ROTATE_INTERVAL_MS: i32 = 3800;
pub const FADE_MS: i32 = 250;

const TYPED_NAME_ID: &str = "typed-name";
const ROTATING_TITLE_ID: &str = "rotating-title";
const FADE_CLASS: &str = "fade-out";

/// Yields every character prefix of the text, from empty through complete.
pub struct Typing {
    text: String,
    shown: usize,
    total: usize,
}

impl Typing {
    pub fn new(text: &str) -> Typing {
        Typing {
            text: text.to_owned(),
            shown: 0,
            total: text.chars().count(),
        }
    }
}

impl Iterator for Typing {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.shown > self.total {
            return None;
        }
        let prefix = self.text.chars().take(self.shown).collect();
        self.shown += 1;
        Some(prefix)
    }
}

pub struct TitleCycle {
    titles: Vec<String>,
    index: usize,
}

impl TitleCycle {
    pub fn new<S: AsRef<str>>(titles: &[S]) -> TitleCycle {
        TitleCycle {
            titles: titles.iter().map(|t| t.as_ref().to_owned()).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.titles.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if self.titles.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.titles.len();
        self.current()
    }
}

fn type_next(window: Window, element: Element, mut typing: Typing) {
    let prefix = match typing.next() {
        Some(prefix) => prefix,
        None => return,
    };
    element.set_text_content(Some(&prefix));
    let next_window = window.clone();
    if let Err(e) = dom::set_timeout(&window, TYPE_DELAY_MS, move || {
        type_next(next_window, element, typing)
    }) {
        log!("typing effect stopped: {:?}", e);
    }
}

pub fn init_typing(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    let element = match document.get_element_by_id(TYPED_NAME_ID) {
        Some(element) => element,
        None => return Ok(()),
    };
    if reduced_motion {
        return Ok(());
    }
    type_next(window.clone(), element, Typing::new(TYPED_NAME));
    Ok(())
}

pub fn init_rotating(document: &Document, window: &Window, reduced_motion: bool) -> Result<(), JsValue> {
    let element = match document.get_element_by_id(ROTATING_TITLE_ID) {
        Some(element) => element,
        None => return Ok(()),
    };
    if reduced_motion {
        return Ok(());
    }

    let mut cycle = TitleCycle::new(&TITLES);
    let timeout_window = window.clone();
    dom::set_interval(window, ROTATE_INTERVAL_MS, move || {
        let title = match cycle.advance() {
            Some(title) => title.to_owned(),
            None => return,
        };
        if let Err(e) = element.class_list().add_1(FADE_CLASS) {
            log!("title fade failed: {:?}", e);
        }
        let swap_target = element.clone();
        let swapped = dom::set_timeout(&timeout_window, FADE_MS, move || {
            swap_target.set_text_content(Some(&title));
            if let Err(e) = swap_target.class_list().remove_1(FADE_CLASS) {
                log!("title fade failed: {:?}", e);
            }
        });
        if let Err(e) = swapped {
            log!("title swap failed: {:?}", e);
        }
    })?;
    Ok(())
}
