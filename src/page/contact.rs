// Contact form: per-field validation and a mailto: link handed to the
// visitor's mail client. Nothing is sent from the page itself.

use std::rc::Rc;

use regex::Regex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use super::dom;

pub const RECIPIENT: &str = "harsh.shah.dev@example.com";
pub const GREETING: &str = "Hi Harsh,";

const FORM_ID: &str = "contact-form";
const REDIRECT_DELAY_MS: i32 = 200;
const CRLF: &str = "%0D%0A";

pub const CORRECTION_NOTICE: &str = "Please correct the highlighted fields.";
pub const SUCCESS_NOTICE: &str = "Great! Opening your email client...";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    /// `None` when the value is acceptable, otherwise the message to show.
    pub fn validate(self, value: &str) -> Option<&'static str> {
        // Lengths follow the browser's UTF-16 string length
        let length = value.trim().encode_utf16().count();
        let ok = match self {
            Field::Name => length >= 2,
            Field::Email => looks_like_email(value),
            Field::Subject => length >= 3,
            Field::Message => length >= 10,
        };
        if ok {
            None
        } else {
            Some(match self {
                Field::Name => "Please enter your name.",
                Field::Email => "Enter a valid email address.",
                Field::Subject => "Subject should be at least 3 characters.",
                Field::Message => "Message should contain at least 10 characters.",
            })
        }
    }
}

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

thread_local! {
    static EMAIL: Option<Regex> = Regex::new(EMAIL_PATTERN).ok();
}

fn looks_like_email(value: &str) -> bool {
    EMAIL.with(|re| re.as_ref().map_or(false, |re| re.is_match(value)))
}

/// The browser's `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.to_owned();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn errors(&self) -> Vec<(Field, &'static str)> {
        Field::ALL
            .iter()
            .filter_map(|&field| field.validate(self.get(field)).map(|msg| (field, msg)))
            .collect()
    }

    /// Builds the mailto: link. The greeting goes in as written; every
    /// visitor-supplied value passes through `encode`.
    pub fn mailto<E>(&self, recipient: &str, encode: E) -> String
    where
        E: Fn(&str) -> String,
    {
        let body = format!(
            "{greeting}{crlf}{crlf}{message}{crlf}{crlf}Regards,{crlf}{name}{crlf}{email}",
            greeting = GREETING,
            message = encode(self.message.trim()),
            name = encode(self.name.trim()),
            email = encode(self.email.trim()),
            crlf = CRLF,
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode(self.subject.trim()),
            body
        )
    }
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn show_error(element: &Element, message: &str) -> Result<(), JsValue> {
    if let Some(parent) = element.parent_element() {
        if let Some(error) = parent.query_selector(".input-error")? {
            error.set_text_content(Some(message));
        }
    }
    element
        .class_list()
        .toggle_with_force("input-invalid", !message.is_empty())?;
    Ok(())
}

fn check(element: &Element) -> Result<Option<&'static str>, JsValue> {
    let field = match element.get_attribute("name").as_deref().and_then(Field::from_name) {
        Some(field) => field,
        None => return Ok(None),
    };
    let value = field_value(element).unwrap_or_default();
    let message = field.validate(&value);
    show_error(element, message.unwrap_or(""))?;
    Ok(message)
}

fn set_status(status: Option<&Element>, text: &str, color: &str) -> Result<(), JsValue> {
    if let Some(status) = status {
        status.set_text_content(Some(text));
        dom::set_style(status, "color", color)?;
    }
    Ok(())
}

fn submit(window: &Window, form: &HtmlFormElement, status: Option<&Element>, fields: &[Element]) -> Result<(), JsValue> {
    let mut has_error = false;
    for field in fields {
        if check(field)?.is_some() {
            has_error = true;
        }
    }
    if has_error {
        return set_status(status, CORRECTION_NOTICE, "var(--danger)");
    }

    let mut contact = ContactMessage::default();
    for element in fields {
        let field = element.get_attribute("name").as_deref().and_then(Field::from_name);
        if let (Some(field), Some(value)) = (field, field_value(element)) {
            contact.set(field, &value);
        }
    }
    let link = contact.mailto(RECIPIENT, encode_uri_component);

    set_status(status, SUCCESS_NOTICE, "var(--success)")?;
    let redirect_window = window.clone();
    dom::set_timeout(window, REDIRECT_DELAY_MS, move || {
        if let Err(e) = redirect_window.location().set_href(&link) {
            log!("could not open mail client: {:?}", e);
        }
    })?;

    form.reset();
    for field in fields {
        show_error(field, "")?;
    }
    Ok(())
}

pub fn init(document: &Document, window: &Window) -> Result<(), JsValue> {
    let form = match document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form,
        None => return Ok(()),
    };
    let status = form.query_selector(".form-status")?;
    let fields = Rc::new(dom::collect(&form.query_selector_all("input, textarea")?));

    for field in fields.iter() {
        let target = field.clone();
        dom::listen(field, "input", move |_| {
            if let Err(e) = check(&target) {
                log!("validation failed: {:?}", e);
            }
        })?;
    }

    let window = window.clone();
    let submitted = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(e) = submit(&window, &submitted, status.as_ref(), &fields) {
            log!("contact form failed: {:?}", e);
        }
    })
}
