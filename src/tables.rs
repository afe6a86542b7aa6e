//! Staggered fade-in of table rows on the dashboard's tabbed views.

use crate::config::{ACTIVE_TAB_PANE_SELECTOR, TAB_BUTTON_SELECTOR, TAB_SHOWN_EVENT};
use crate::dom;
use crate::error::DashboardError;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::Element;

const ROW_SELECTOR: &str = "tbody tr";

/// Delay before row `index` starts fading in.
pub fn row_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Newly shown tabs only animate tables longer than `min_rows`.
pub fn should_animate(row_count: usize, min_rows: usize) -> bool {
    row_count > min_rows
}

pub fn animate_table_rows(table: &Element, stagger_ms: u32) -> Result<(), DashboardError> {
    for (index, row) in dom::query_all_in(table, ROW_SELECTOR).into_iter().enumerate() {
        dom::set_styles(&row, &[("opacity", "0"), ("transform", "translateY(10px)")])?;
        Timeout::new(row_delay_ms(index, stagger_ms), move || {
            let shown = dom::set_styles(
                &row,
                &[
                    ("transition", "opacity 0.3s ease, transform 0.3s ease"),
                    ("opacity", "1"),
                    ("transform", "translateY(0)"),
                ],
            );
            if let Err(e) = shown {
                warn!("table rows: {}", e);
            }
        })
        .forget();
    }
    Ok(())
}

/// Animate tables on tab switches and the tab visible at load.
pub fn init_tab_tables(stagger_ms: u32, min_rows: usize) -> Result<(), DashboardError> {
    let tabs = dom::query_all(TAB_BUTTON_SELECTOR);
    if tabs.is_empty() {
        return Ok(());
    }

    for tab in &tabs {
        dom::listen(tab, TAB_SHOWN_EVENT, move |event| {
            let Some(button) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(pane) = button
                .get_attribute("data-bs-target")
                .and_then(|target| dom::query(&target))
            else {
                return;
            };
            let Ok(Some(table)) = pane.query_selector("table") else {
                return;
            };
            if should_animate(dom::query_all_in(&table, ROW_SELECTOR).len(), min_rows) {
                if let Err(e) = animate_table_rows(&table, stagger_ms) {
                    warn!("table rows: {}", e);
                }
            }
        })?;
    }

    if let Some(table) = dom::query(ACTIVE_TAB_PANE_SELECTOR)
        .and_then(|pane| pane.query_selector("table").ok().flatten())
    {
        animate_table_rows(&table, stagger_ms)?;
    }
    debug!("tables: watching {} tabs", tabs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_staggered() {
        let delays: Vec<_> = (0..4).map(|i| row_delay_ms(i, 50)).collect();
        assert_eq!(delays, [0, 50, 100, 150]);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(row_delay_ms(usize::MAX, 50), u32::MAX);
    }

    #[test]
    fn only_long_tables_animate_on_switch() {
        assert!(!should_animate(10, 10));
        assert!(should_animate(11, 10));
    }
}
