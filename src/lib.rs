//! Browser behaviors for the F1 dashboard pages.
//!
//! The pages are rendered by the server; this crate only enhances them:
//! the pit-stop light countdown, navbar and scroll effects, the circuit
//! carousel, hover effects, decorative hero cars and table animations.
//! Every behavior looks up its elements once and quietly does nothing
//! when they are not on the page.

use log::{debug, info, warn};
use std::cell::Cell;
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod hero;
pub mod hover;
pub mod lights;
pub mod logging;
pub mod navbar;
pub mod reveal;
pub mod sequencer;
pub mod tables;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use sequencer::{LightBank, LightStatus, Phase, Sequencer, SequencerTiming, Timeline};

/// Boot with configuration embedded in the page, or defaults.
#[wasm_bindgen]
pub fn start() {
    boot(config_or_default(DashboardConfig::from_page()));
}

/// Boot with configuration supplied from JavaScript. `undefined`/`null`
/// falls back to the page configuration.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(value: JsValue) {
    let config = if value.is_undefined() || value.is_null() {
        DashboardConfig::from_page()
    } else {
        DashboardConfig::from_js(value).map(Some)
    };
    boot(config_or_default(config));
}

fn config_or_default(config: Result<Option<DashboardConfig>, DashboardError>) -> DashboardConfig {
    match config {
        Ok(Some(config)) => config,
        Ok(None) => DashboardConfig::default(),
        Err(e) => {
            warn!("{}; using defaults", e);
            DashboardConfig::default()
        }
    }
}

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Marks the page as booted. Only the first caller gets `true`.
fn claim_boot() -> bool {
    BOOTED.with(|booted| !booted.replace(true))
}

fn boot(config: DashboardConfig) {
    logging::init(log::LevelFilter::Info);
    if !claim_boot() {
        warn!("boot: behaviors already installed, ignoring second start");
        return;
    }
    let ready = when_dom_ready(move || {
        install_home_page(&config);
        install_dashboard(&config);
        info!("dashboard behaviors installed");
    });
    if let Err(e) = ready {
        warn!("boot: {}", e);
    }
}

/// Run `f` once the document has been parsed.
fn when_dom_ready<F: FnOnce() + 'static>(f: F) -> Result<(), DashboardError> {
    let document = gloo_utils::document();
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

fn report(behavior: &str, result: Result<(), DashboardError>) {
    match result {
        Ok(()) => debug!("{}: ready", behavior),
        Err(e) => warn!("{}: {}", behavior, e),
    }
}

/// Landing page: navbar, countdown lights, reveal, carousel, about car.
fn install_home_page(config: &DashboardConfig) {
    report("navbar", navbar::init_navbar(config.navbar_scroll_threshold));
    lights::init_pit_lights(config.lights);
    report("scroll-down", navbar::init_scroll_down());
    report("reveal", reveal::init_scroll_reveal(config.reveal_threshold));
    report("carousel", carousel::init_carousel());
    report("about-car", hover::init_about_car());
    report("reveal-styles", reveal::inject_reveal_styles());
}

/// Data pages: flash messages, tooltips, active links, tables, hero, race cards.
fn install_dashboard(config: &DashboardConfig) {
    bootstrap::schedule_flash_dismiss(config.flash_dismiss_ms);
    report("tooltips", bootstrap::init_tooltips());
    report("active-links", navbar::highlight_active_links());
    report(
        "tables",
        tables::init_tab_tables(config.table_row_stagger_ms, config.table_animate_min_rows),
    );
    report("hero-cars", hero::init_hero_cars(&config.hero_car_speeds));
    report("racing-lines", hover::init_racing_lines());
}
