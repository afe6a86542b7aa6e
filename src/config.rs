//! Application-level configuration: markup contract constants and the
//! tunables a page may override.

use crate::error::DashboardError;
use crate::sequencer::SequencerTiming;
use serde::Deserialize;

// Pit lights
pub const PIT_LIGHT_SELECTOR: &str = ".pit-light";
pub const LIGHT_RED_CLASS: &str = "red";
pub const LIGHT_GREEN_CLASS: &str = "green";
pub const LIGHT_INTERVAL_MS: u32 = 500;
pub const LIGHT_HOLD_MS: u32 = 1_000;
pub const LIGHT_GREEN_MS: u32 = 2_000;
pub const LIGHT_PAUSE_MS: u32 = 3_000;

// Navigation
pub const HOME_NAVBAR_SELECTOR: &str = ".home-navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ANCHOR_LINK_SELECTOR: &str = ".nav-link[href^=\"#\"]";
pub const SCROLL_DOWN_SELECTOR: &str = ".scroll-down a";
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".preview-card, .circuit, .about-content, .about-image";
pub const REVEAL_ITEM_CLASS: &str = "reveal-item";
pub const REVEALED_CLASS: &str = "revealed";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

// Carousel
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-control-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-control-next";
pub const CAROUSEL_ITEM_SELECTOR: &str = ".carousel-item";

// Hover effects
pub const CAR_ANIMATION_SELECTOR: &str = ".f1-car-animation";
pub const ABOUT_SECTION_SELECTOR: &str = ".about-section";
pub const RACING_CLASS: &str = "racing";
pub const RACE_CARD_SELECTOR: &str = ".race-card";
pub const RACING_LINE_CLASS: &str = "racing-line";
pub const RACING_LINE_START_DELAY_MS: u32 = 10;

// Hero banner
pub const HERO_BANNER_SELECTOR: &str = ".hero-banner";
pub const HERO_CAR_CLASS: &str = "f1-car";
pub const DEFAULT_HERO_CAR_SPEEDS: [u32; 3] = [15, 18, 12];

// Bootstrap widgets
pub const FLASH_SELECTOR: &str = ".alert";
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const DEFAULT_FLASH_DISMISS_MS: u32 = 5_000;

// Tables
pub const TAB_BUTTON_SELECTOR: &str = "button[data-bs-toggle=\"tab\"]";
pub const TAB_SHOWN_EVENT: &str = "shown.bs.tab";
pub const ACTIVE_TAB_PANE_SELECTOR: &str = ".tab-pane.active";
pub const DEFAULT_ROW_STAGGER_MS: u32 = 50;
pub const DEFAULT_ANIMATE_MIN_ROWS: usize = 10;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Tunables for every behavior. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub lights: SequencerTiming,
    pub navbar_scroll_threshold: f64,
    pub reveal_threshold: f64,
    pub flash_dismiss_ms: u32,
    pub table_row_stagger_ms: u32,
    /// Tables on a newly shown tab animate only above this many rows.
    pub table_animate_min_rows: usize,
    /// Animation duration in seconds for each decorative hero car.
    pub hero_car_speeds: Vec<u32>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lights: SequencerTiming::default(),
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            flash_dismiss_ms: DEFAULT_FLASH_DISMISS_MS,
            table_row_stagger_ms: DEFAULT_ROW_STAGGER_MS,
            table_animate_min_rows: DEFAULT_ANIMATE_MIN_ROWS,
            hero_car_speeds: DEFAULT_HERO_CAR_SPEEDS.to_vec(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and check overrides handed over from JavaScript.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self, DashboardError> {
        let config: Self = serde_wasm_bindgen::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        self.lights.validate()
    }

    /// Read overrides embedded in the page, if any.
    pub fn from_page() -> Result<Option<Self>, DashboardError> {
        let Some(element) = gloo_utils::document().get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.lights.interval_ms, 500);
        assert_eq!(cfg.hero_car_speeds, vec![15, 18, 12]);
    }

    #[test]
    fn nested_overrides() {
        let cfg = DashboardConfig::from_json(
            r#"{"lights": {"pause_ms": 100}, "flash_dismiss_ms": 0, "hero_car_speeds": [9]}"#,
        )
        .unwrap();
        assert_eq!(cfg.lights.pause_ms, 100);
        assert_eq!(cfg.lights.green_ms, 2000);
        assert_eq!(cfg.flash_dismiss_ms, 0);
        assert_eq!(cfg.hero_car_speeds, vec![9]);
        assert_eq!(cfg.reveal_threshold, 0.15);
    }

    #[test]
    fn all_zero_light_timing_is_rejected() {
        let result = DashboardConfig::from_json(
            r#"{"lights": {"interval_ms": 0, "hold_ms": 0, "green_ms": 0, "pause_ms": 0}}"#,
        );
        match result {
            Err(DashboardError::Config(msg)) => assert!(msg.contains("interval_ms")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_config_error() {
        match DashboardConfig::from_json("{\"lights\": 3}") {
            Err(DashboardError::Config(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
