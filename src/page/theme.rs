// Light/dark theme toggle, remembered in localStorage

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use super::dom;

pub const STORAGE_KEY: &str = "hs-theme";
const TOGGLE_SELECTOR: &str = ".theme-toggle";
const LIGHT_CLASS: &str = "light-theme";
const DARK_CLASS: &str = "dark-theme";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    // Anything other than an explicit "light" means dark
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The toggle reads as "pressed" while the dark theme is on.
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Theme::Light => "false",
            Theme::Dark => "true",
        }
    }

    pub fn icon_markup(self) -> &'static str {
        match self {
            Theme::Light => r#"<i class="fas fa-sun"></i>"#,
            Theme::Dark => r#"<i class="fas fa-moon"></i>"#,
        }
    }
}

fn apply(body: &HtmlElement, toggle: &Element, theme: Theme) -> Result<(), JsValue> {
    let classes = body.class_list();
    classes.toggle_with_force(LIGHT_CLASS, theme.is_light())?;
    classes.toggle_with_force(DARK_CLASS, !theme.is_light())?;
    toggle.set_attribute("aria-pressed", theme.aria_pressed())?;
    toggle.set_inner_html(theme.icon_markup());
    Ok(())
}

fn stored_theme(storage: Option<&Storage>) -> Theme {
    let stored = storage.and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn init(document: &Document, window: &Window) -> Result<(), JsValue> {
    let toggle = match document.query_selector(TOGGLE_SELECTOR)? {
        Some(toggle) => toggle,
        None => return Ok(()),
    };
    let body = match document.body() {
        Some(body) => body,
        None => return Ok(()),
    };
    let storage = window.local_storage().ok().flatten();

    let mut theme = stored_theme(storage.as_ref());
    apply(&body, &toggle, theme)?;

    let target = toggle.clone();
    dom::listen(&target, "click", move |_| {
        theme = theme.toggled();
        if let Err(e) = apply(&body, &toggle, theme) {
            log!("theme toggle failed: {:?}", e);
        }
        if let Some(storage) = &storage {
            if let Err(e) = storage.set_item(STORAGE_KEY, theme.storage_value()) {
                log!("could not persist theme: {:?}", e);
            }
        }
    })
}
