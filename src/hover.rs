//! Hover effects: the racing car in the about section and the racing
//! line under race cards.

use crate::config::{
    ABOUT_SECTION_SELECTOR, CAR_ANIMATION_SELECTOR, RACE_CARD_SELECTOR, RACING_CLASS,
    RACING_LINE_CLASS, RACING_LINE_START_DELAY_MS,
};
use crate::dom;
use crate::error::DashboardError;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;

/// Inline style of a freshly inserted racing line, parked off the left edge.
pub const RACING_LINE_STYLES: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("height", "2px"),
    ("background", "var(--f1-red)"),
    ("left", "-100%"),
    ("bottom", "0"),
    ("width", "100%"),
    ("transition", "transform 0.3s ease"),
    ("transform", "translateX(0)"),
];

/// Transform the line transitions to once it is in the document.
pub const RACING_LINE_END_TRANSFORM: &str = "translateX(100%)";

pub fn init_about_car() -> Result<(), DashboardError> {
    let (Some(car), Some(section)) = (
        dom::query(CAR_ANIMATION_SELECTOR),
        dom::query(ABOUT_SECTION_SELECTOR),
    ) else {
        return Ok(());
    };
    let entering = car.clone();
    dom::listen(&section, "mouseenter", move |_| {
        dom::add_class(&entering, RACING_CLASS)
    })?;
    dom::listen(&section, "mouseleave", move |_| {
        dom::remove_class(&car, RACING_CLASS)
    })?;
    Ok(())
}

pub fn init_racing_lines() -> Result<(), DashboardError> {
    let cards = dom::query_all(RACE_CARD_SELECTOR);
    for card in &cards {
        let entering = card.clone();
        dom::listen(card, "mouseenter", move |_| {
            if let Err(e) = show_racing_line(&entering) {
                warn!("racing line: {}", e);
            }
        })?;
        let leaving = card.clone();
        dom::listen(card, "mouseleave", move |_| {
            if let Ok(Some(line)) = leaving.query_selector(&format!(".{}", RACING_LINE_CLASS)) {
                line.remove();
            }
        })?;
    }
    debug!("hover: racing lines on {} cards", cards.len());
    Ok(())
}

fn show_racing_line(card: &Element) -> Result<(), DashboardError> {
    dom::set_styles(card, &[("overflow", "hidden")])?;

    let line = gloo_utils::document().create_element("div")?;
    line.set_class_name(RACING_LINE_CLASS);
    dom::set_styles(&line, &RACING_LINE_STYLES)?;
    card.append_child(&line)?;

    // Changing the transform after insertion is what starts the transition.
    Timeout::new(RACING_LINE_START_DELAY_MS, move || {
        if let Err(e) = dom::set_styles(&line, &[("transform", RACING_LINE_END_TRANSFORM)]) {
            warn!("racing line: {}", e);
        }
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_where_it_does_not_end() {
        let start = RACING_LINE_STYLES
            .iter()
            .find(|(name, _)| *name == "transform")
            .map(|(_, value)| *value);
        assert_eq!(start, Some("translateX(0)"));
        assert_ne!(start, Some(RACING_LINE_END_TRANSFORM));
    }
}
