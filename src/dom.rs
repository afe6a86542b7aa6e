//! Thin helpers over `web_sys` shared by the behavior installers.

use crate::error::DashboardError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions};

/// First element matching `selector`, `None` if absent or the selector is invalid.
pub fn query(selector: &str) -> Option<Element> {
    gloo_utils::document().query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    gloo_utils::document()
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Every descendant of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DashboardError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // The page owns the listener from here on.
    closure.forget();
    Ok(())
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        log::warn!("failed to add class {}: {:?}", class, e);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        log::warn!("failed to remove class {}: {:?}", class, e);
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if on {
        add_class(element, class);
    } else {
        remove_class(element, class);
    }
}

/// Set inline style properties on an element.
pub fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<(), DashboardError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Smooth-scroll to the element named by an anchor href such as `#about`.
pub fn smooth_scroll_to(target_selector: &str) {
    let Some(target) = query(target_selector) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Make every click on `element` smooth-scroll to the element its `href` names.
pub fn install_smooth_scroll(element: &Element) -> Result<(), DashboardError> {
    let anchor = element.clone();
    listen(element, "click", move |event| {
        event.prevent_default();
        if let Some(href) = anchor.get_attribute("href") {
            smooth_scroll_to(&href);
        }
    })
}
