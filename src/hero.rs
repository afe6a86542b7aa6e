//! Decorative cars racing across the hero banner.

use crate::config::{HERO_BANNER_SELECTOR, HERO_CAR_CLASS};
use crate::dom;
use crate::error::DashboardError;
use log::debug;

/// Inline style values for one hero car.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroCarStyle {
    pub bottom: String,
    pub opacity: String,
    pub animation: String,
    pub animation_delay: String,
}

/// One style per speed; later cars sit higher, fainter and start later.
pub fn hero_car_styles(speeds: &[u32]) -> Vec<HeroCarStyle> {
    speeds
        .iter()
        .enumerate()
        .map(|(i, speed)| {
            // Whole percent steps keep the value free of float noise.
            let opacity_pct = 70_i64 - 20 * i as i64;
            HeroCarStyle {
                bottom: format!("{}px", 10 + i * 20),
                opacity: format!("{}", opacity_pct as f64 / 100.0),
                animation: format!("raceCar {}s infinite linear", speed),
                animation_delay: format!("{}s", i * 2),
            }
        })
        .collect()
}

pub fn init_hero_cars(speeds: &[u32]) -> Result<(), DashboardError> {
    let Some(banner) = dom::query(HERO_BANNER_SELECTOR) else {
        return Ok(());
    };
    let document = gloo_utils::document();
    for style in hero_car_styles(speeds) {
        let car = document.create_element("div")?;
        dom::add_class(&car, HERO_CAR_CLASS);
        dom::set_styles(
            &car,
            &[
                ("bottom", style.bottom.as_str()),
                ("opacity", style.opacity.as_str()),
                ("animation", style.animation.as_str()),
                ("animation-delay", style.animation_delay.as_str()),
            ],
        )?;
        banner.append_child(&car)?;
    }
    debug!("hero: {} cars on the banner", speeds.len());
    Ok(())
}
