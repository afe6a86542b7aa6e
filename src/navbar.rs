//! Navigation behaviors: scrolled navbar, smooth anchor scrolling and
//! active-link highlighting.

use crate::config::{
    ACTIVE_CLASS, ANCHOR_LINK_SELECTOR, HOME_NAVBAR_SELECTOR, NAV_LINK_SELECTOR,
    SCROLLED_CLASS, SCROLL_DOWN_SELECTOR,
};
use crate::dom;
use crate::error::DashboardError;
use log::debug;

/// Whether the navbar should carry the `scrolled` class at `scroll_y`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether a nav link points at the current page.
pub fn is_active_link(current_path: &str, href: Option<&str>) -> bool {
    matches!(href, Some(href) if !href.is_empty() && href == current_path)
}

/// Home page navbar: background on scroll plus smooth in-page anchors.
pub fn init_navbar(threshold: f64) -> Result<(), DashboardError> {
    let Some(navbar) = dom::query(HOME_NAVBAR_SELECTOR) else {
        debug!("navbar: no home navbar");
        return Ok(());
    };

    let window = gloo_utils::window();
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        dom::toggle_class(&navbar, SCROLLED_CLASS, is_scrolled(y, threshold));
    })?;

    for anchor in dom::query_all(ANCHOR_LINK_SELECTOR) {
        dom::install_smooth_scroll(&anchor)?;
    }
    Ok(())
}

/// The hero's "scroll down" arrow.
pub fn init_scroll_down() -> Result<(), DashboardError> {
    match dom::query(SCROLL_DOWN_SELECTOR) {
        Some(button) => dom::install_smooth_scroll(&button),
        None => Ok(()),
    }
}

pub fn highlight_active_links() -> Result<(), DashboardError> {
    let path = gloo_utils::window().location().pathname()?;
    for link in dom::query_all(NAV_LINK_SELECTOR) {
        if is_active_link(&path, link.get_attribute("href").as_deref()) {
            dom::add_class(&link, ACTIVE_CLASS);
        }
    }
    Ok(())
}
