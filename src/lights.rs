//! Browser side of the pit-stop countdown: `.pit-light` elements as a
//! [`LightBank`] and the async driver that keeps the cycle running.

use crate::config::{LIGHT_GREEN_CLASS, LIGHT_RED_CLASS, PIT_LIGHT_SELECTOR};
use crate::dom;
use crate::sequencer::{LightBank, LightStatus, Sequencer, SequencerTiming};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use web_sys::Element;

/// Light bank backed by page elements; status is expressed through the
/// `red` / `green` classes.
pub struct DomLightBank {
    lights: Vec<Element>,
}

impl DomLightBank {
    pub fn new(lights: Vec<Element>) -> Self {
        Self { lights }
    }

    /// Collect the page's pit lights in document order.
    pub fn discover() -> Self {
        Self::new(dom::query_all(PIT_LIGHT_SELECTOR))
    }
}

impl LightBank for DomLightBank {
    fn len(&self) -> usize {
        self.lights.len()
    }

    fn set(&mut self, index: usize, status: LightStatus) {
        let light = &self.lights[index];
        let (red, green) = light_classes(status);
        dom::toggle_class(light, LIGHT_RED_CLASS, red);
        dom::toggle_class(light, LIGHT_GREEN_CLASS, green);
    }
}

/// Whether a light in `status` carries the `(red, green)` classes.
pub fn light_classes(status: LightStatus) -> (bool, bool) {
    match status {
        LightStatus::Off => (false, false),
        LightStatus::Red => (true, false),
        LightStatus::Green => (false, true),
    }
}

/// Run the countdown on `bank` for the lifetime of the page.
///
/// Returns `false` without scheduling anything when the bank is empty
/// or the timing is invalid.
pub fn spawn_pit_lights<B: LightBank + 'static>(bank: B, timing: SequencerTiming) -> bool {
    if let Err(e) = timing.validate() {
        warn!("pit lights: {}", e);
        return false;
    }
    let mut sequencer = Sequencer::new(bank, timing);
    let Some(first) = sequencer.start() else {
        return false;
    };
    debug!("pit lights: cycling {} lights", sequencer.bank().len());
    wasm_bindgen_futures::spawn_local(async move {
        let mut delay = first;
        loop {
            TimeoutFuture::new(delay).await;
            match sequencer.advance() {
                Some(next) => delay = next,
                None => break,
            }
        }
    });
    true
}

pub fn init_pit_lights(timing: SequencerTiming) {
    if !spawn_pit_lights(DomLightBank::discover(), timing) {
        debug!("pit lights: none on this page");
    }
}
