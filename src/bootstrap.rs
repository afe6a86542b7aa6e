//! Bindings to the page's Bootstrap bundle, plus the flash-message and
//! tooltip behaviors built on them.

use crate::config::{FLASH_SELECTOR, TOOLTIP_SELECTOR};
use crate::dom;
use crate::error::DashboardError;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method)]
    pub fn close(this: &Alert);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

/// Whether the Bootstrap bundle is loaded on this page.
pub fn available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

/// Close every flash message `delay_ms` after boot.
pub fn schedule_flash_dismiss(delay_ms: u32) {
    if !available() {
        debug!("flash: bootstrap not loaded");
        return;
    }
    Timeout::new(delay_ms, || {
        for message in dom::query_all(FLASH_SELECTOR) {
            match Alert::new(&message) {
                Ok(alert) => alert.close(),
                Err(e) => warn!("flash: {}", DashboardError::from(e)),
            }
        }
    })
    .forget();
}

pub fn init_tooltips() -> Result<(), DashboardError> {
    let triggers = dom::query_all(TOOLTIP_SELECTOR);
    if triggers.is_empty() || !available() {
        return Ok(());
    }
    for trigger in &triggers {
        Tooltip::new(trigger)?;
    }
    debug!("tooltips: {} enabled", triggers.len());
    Ok(())
}
