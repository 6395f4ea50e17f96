// Small DOM helpers shared by the page behaviors

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

pub fn collect(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// The closure is leaked on purpose: listeners live as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_timeout<F>(window: &Window, millis: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
}

pub fn set_interval<F>(window: &Window, millis: i32, f: F) -> Result<i32, JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), millis)?;
    closure.forget();
    Ok(id)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(el) => el.style().set_property(property, value),
        None => Ok(()),
    }
}

pub fn request_frame<F>(window: &Window, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.request_animation_frame(callback.unchecked_ref())
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Watches `elements`, calling `on_entry` for every entry the observer reports.
pub fn observe<F>(elements: &[Element], root_margin: &str, threshold: f64, mut on_entry: F) -> Result<(), JsValue>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(())
}
