//! Scroll reveal: fade marked sections in the first time they enter the viewport.

use crate::config::{REVEALED_CLASS, REVEAL_ITEM_CLASS, REVEAL_SELECTOR};
use crate::dom;
use crate::error::DashboardError;
use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const STYLE_ELEMENT_ID: &str = "reveal-styles";

pub const REVEAL_CSS: &str = "
.reveal-item {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.reveal-item.revealed {
    opacity: 1;
    transform: translateY(0);
}
.circuit.reveal-item {
    transform: translateY(30px) scale(0.95);
}
.circuit.reveal-item.revealed {
    transform: translateY(0) scale(1);
}
";

pub fn init_scroll_reveal(threshold: f64) -> Result<(), DashboardError> {
    let elements = dom::query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        debug!("reveal: nothing to observe");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
        dom::add_class(element, REVEAL_ITEM_CLASS);
    }
    debug!("reveal: observing {} elements", elements.len());
    Ok(())
}

/// Append the reveal transition rules to `<head>`, once.
pub fn inject_reveal_styles() -> Result<(), DashboardError> {
    let document = gloo_utils::document();
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(REVEAL_CSS));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_both_states() {
        assert!(REVEAL_CSS.contains(".reveal-item {"));
        assert!(REVEAL_CSS.contains(".reveal-item.revealed {"));
        assert!(REVEAL_CSS.contains("scale(0.95)"));
    }
}
