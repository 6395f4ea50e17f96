//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use portfolio_particles::driver::{Host, LoopState, RenderLoop};
use portfolio_particles::page::contact::{self, ContactMessage, Field, RECIPIENT};
use portfolio_particles::page::{chrome, modal, nav};
use portfolio_particles::surface::{CanvasSurface, Surface};
use portfolio_particles::viewport::Viewport;
use portfolio_particles::web::{self, BrowserHost, CANVAS_ID};
use portfolio_particles::FieldConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas() -> HtmlCanvasElement {
    let document = web::document().unwrap();
    if let Some(old) = document.get_element_by_id(CANVAS_ID) {
        old.remove();
    }
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(CANVAS_ID);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_resizes_backing_store() {
    let canvas = mount_canvas();
    let mut surface = CanvasSurface::new(canvas.clone()).unwrap();
    surface.resize(Viewport::new(320.0, 200.0));
    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 200);
    assert_eq!(surface.canvas().width(), 320);
}

#[wasm_bindgen_test]
fn canvas_surface_draws_without_errors() {
    let canvas = mount_canvas();
    let mut surface = CanvasSurface::new(canvas).unwrap();
    let accent = FieldConfig::default().accent_color();
    surface.resize(Viewport::new(100.0, 100.0));
    surface.clear(Viewport::new(100.0, 100.0));
    assert!(surface.draw_glow([50.0, 50.0], 4.0, accent, 0.8).is_ok());
    assert!(surface.draw_link([10.0, 10.0], [40.0, 40.0], accent, 0.5, 0.6).is_ok());
}

#[wasm_bindgen_test]
fn browser_host_finds_mounted_canvas() {
    mount_canvas();
    let host = BrowserHost::new().unwrap();
    assert!(host.surface().is_some());
    let viewport = host.viewport();
    assert!(viewport.width > 0.0);
    assert!(viewport.height > 0.0);
}

#[wasm_bindgen_test]
fn render_loop_runs_frames_on_canvas() {
    mount_canvas();
    let host = BrowserHost::new().unwrap();
    if host.prefers_reduced_motion() {
        return;
    }
    let mut render_loop = RenderLoop::start(&host, FieldConfig::default());
    assert_eq!(render_loop.state(), LoopState::Running);
    assert_eq!(render_loop.frame(), Ok(true));
}

#[wasm_bindgen_test]
fn missing_canvas_leaves_field_inactive() {
    let document = web::document().unwrap();
    if let Some(old) = document.get_element_by_id(CANVAS_ID) {
        old.remove();
    }
    assert_eq!(web::launch(FieldConfig::default()), Ok(false));
}

#[wasm_bindgen_test]
fn uri_encoding_matches_the_browser() {
    assert_eq!(contact::encode_uri_component("a b&c"), "a%20b%26c");
    assert_eq!(contact::encode_uri_component("ada@example.org"), "ada%40example.org");
    assert_eq!(contact::encode_uri_component("é/?#"), "%C3%A9%2F%3F%23");
    assert_eq!(contact::encode_uri_component("it's(fine)!*~_.-"), "it's(fine)!*~_.-");
}

#[wasm_bindgen_test]
fn mailto_uses_browser_encoding() {
    let mut message = ContactMessage::default();
    message.set(Field::Name, "Zoë");
    message.set(Field::Email, "zoe@example.org");
    message.set(Field::Subject, "Hello?");
    message.set(Field::Message, "Line one\nLine two");
    let link = message.mailto(RECIPIENT, contact::encode_uri_component);
    assert!(link.starts_with("mailto:harsh.shah.dev@example.com?subject=Hello%3F&body=Hi Harsh,%0D%0A%0D%0A"));
    assert!(link.contains("Line%20one%0ALine%20two"));
    assert!(link.ends_with("Regards,%0D%0AZo%C3%AB%0D%0Azoe%40example.org"));
}

fn mount(html: &str) {
    let body = web::document().unwrap().body().unwrap();
    body.set_inner_html(html);
}

#[wasm_bindgen_test]
fn project_modal_opens_and_closes() {
    mount(
        r#"<div id="project-modal" aria-hidden="true">
             <div class="modal-backdrop"></div>
             <h3 id="modal-title"></h3><p id="modal-description"></p>
             <ul id="modal-highlights"><li>stale</li></ul>
             <a id="modal-demo"></a><a id="modal-repo"></a>
           </div>
           <button class="project-detail" data-project="chatbot"></button>"#,
    );
    let document = web::document().unwrap();
    modal::init(&document).unwrap();

    let trigger = document
        .query_selector(".project-detail")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    trigger.click();

    let root = document.get_element_by_id("project-modal").unwrap();
    assert!(root.class_list().contains("active"));
    assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("false"));
    let title = document.get_element_by_id("modal-title").unwrap();
    assert_eq!(title.text_content().as_deref(), Some("ChatBot AI"));
    let items = document.query_selector_all("#modal-highlights li").unwrap();
    assert_eq!(items.length(), 3);
    assert!(document.get_element_by_id("modal-demo").unwrap().has_attribute("hidden"));

    let backdrop = document
        .query_selector(".modal-backdrop")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    backdrop.click();
    assert!(!root.class_list().contains("active"));
    assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn nav_toggle_flips_menu() {
    mount(
        r##"<header class="site-header"></header>
           <button class="nav-toggle" aria-expanded="false"></button>
           <nav class="primary-nav"><a class="nav-link" href="#about"></a></nav>"##,
    );
    let document = web::document().unwrap();
    nav::init(&document, &web::window().unwrap()).unwrap();

    let toggle = document
        .query_selector(".nav-toggle")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let menu = document.query_selector(".primary-nav").unwrap().unwrap();
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(menu.class_list().contains("open"));

    let link = document
        .query_selector(".nav-link")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    link.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!menu.class_list().contains("open"));
}

#[wasm_bindgen_test]
fn footer_shows_current_year() {
    mount(r#"<span id="current-year"></span>"#);
    let document = web::document().unwrap();
    chrome::set_current_year(&document);
    let year = js_sys::Date::new_0().get_full_year().to_string();
    let shown = document.get_element_by_id("current-year").unwrap().text_content();
    assert_eq!(shown, Some(year));
}

#[wasm_bindgen_test]
fn exported_entry_point_reports_inactive_without_canvas() {
    let document = web::document().unwrap();
    if let Some(old) = document.get_element_by_id(CANVAS_ID) {
        old.remove();
    }
    assert_eq!(portfolio_particles::start_particle_field(FieldConfig::new()), Ok(false));
}
