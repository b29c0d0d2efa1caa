// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for broadcast-room-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection and DOM event
// dispatch so that individual test files stay focused on assertions rather
// than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Yield to the scheduler long enough for Yew to re-render.
pub async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

pub fn query(mount: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    mount.query_selector(selector).unwrap()
}

pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

pub fn text(mount: &web_sys::Element) -> String {
    mount.text_content().unwrap_or_default()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Click the first element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    let el = query(mount, selector).unwrap_or_else(|| panic!("no element matches {selector}"));
    el.unchecked_into::<HtmlElement>().click();
}

/// Set the value of an `<input>` and fire a bubbling `input` event.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let input: HtmlInputElement = query(mount, selector)
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .unchecked_into();
    input.set_value(value);
    input.dispatch_event(&bubbling("input")).unwrap();
}

/// Set the value of a `<select>` and fire a bubbling `change` event.
pub fn select_value(mount: &web_sys::Element, selector: &str, value: &str) {
    let select: HtmlSelectElement = query(mount, selector)
        .unwrap_or_else(|| panic!("no select matches {selector}"))
        .unchecked_into();
    select.set_value(value);
    select.dispatch_event(&bubbling("change")).unwrap();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with every `RuntimeConfig` field.
/// The geolocation URL points at a closed local port so lookups fail fast.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("geoApiUrl", &"http://127.0.0.1:9/json/".into());
    set("parentOrigin", &"".into());
    set("allowedOrigins", &"".into());
    set("seedFixtures", &"true".into());
    set("submitDelayMs", &wasm_bindgen::JsValue::from(10));

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
