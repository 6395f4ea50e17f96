// Project gallery filter buttons

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::dom;

pub const ALL: &str = "all";

const BUTTON_SELECTOR: &str = ".filter-button";
const ACTIVE_BUTTON_SELECTOR: &str = ".filter-button.active";
const CARD_SELECTOR: &str = ".project-card";

pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    pub display: &'static str,
    pub tabindex: &'static str,
    pub aria_hidden: &'static str,
}

impl CardState {
    pub fn for_match(visible: bool) -> CardState {
        if visible {
            CardState {
                display: "flex",
                tabindex: "0",
                aria_hidden: "false",
            }
        } else {
            CardState {
                display: "none",
                tabindex: "-1",
                aria_hidden: "true",
            }
        }
    }
}

fn button_filter(button: &Element) -> String {
    button
        .get_attribute("data-filter")
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| ALL.to_owned())
}

fn apply_filter(cards: &[Element], filter: &str) -> Result<(), JsValue> {
    for card in cards {
        let category = card.get_attribute("data-category");
        let state = CardState::for_match(matches(filter, category.as_deref()));
        dom::set_style(card, "display", state.display)?;
        card.set_attribute("tabindex", state.tabindex)?;
        card.set_attribute("aria-hidden", state.aria_hidden)?;
    }
    Ok(())
}

fn select(document: &Document, button: &Element) -> Result<(), JsValue> {
    if let Some(current) = document.query_selector(ACTIVE_BUTTON_SELECTOR)? {
        current.class_list().remove_1("active")?;
        current.set_attribute("aria-selected", "false")?;
    }
    button.class_list().add_1("active")?;
    button.set_attribute("aria-selected", "true")
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let buttons = dom::collect(&document.query_selector_all(BUTTON_SELECTOR)?);
    if buttons.is_empty() {
        return Ok(());
    }
    let cards = Rc::new(dom::collect(&document.query_selector_all(CARD_SELECTOR)?));

    for button in &buttons {
        let document = document.clone();
        let cards = cards.clone();
        let clicked = button.clone();
        dom::listen(button, "click", move |_| {
            let result = select(&document, &clicked).and_then(|_| apply_filter(&cards, &button_filter(&clicked)));
            if let Err(e) = result {
                log!("project filter failed: {:?}", e);
            }
        })?;
    }

    if let Some(active) = document.query_selector(ACTIVE_BUTTON_SELECTOR)? {
        apply_filter(&cards, &button_filter(&active))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_card() {
        assert!(matches(ALL, Some("ai")));
        assert!(matches(ALL, None));
    }

    #[test]
    fn category_must_match_exactly() {
        assert!(matches("web", Some("web")));
        assert!(!matches("web", Some("mobile")));
        assert!(!matches("web", None));
        assert!(!matches("web", Some("Web")));
    }

    #[test]
    fn hidden_cards_leave_tab_order() {
        let hidden = CardState::for_match(false);
        assert_eq!(hidden.display, "none");
        assert_eq!(hidden.tabindex, "-1");
        assert_eq!(hidden.aria_hidden, "true");
        let shown = CardState::for_match(true);
        assert_eq!(shown.display, "flex");
        assert_eq!(shown.tabindex, "0");
        assert_eq!(shown.aria_hidden, "false");
    }
}
