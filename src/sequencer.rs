//! Pit-stop light countdown.
//!
//! The sequencer walks a bank of lights through a repeating cycle:
//! reset, staggered red ignition, hold, all green, cool-down, pause.
//! Every transition is driven by a trigger firing; the sequencer itself
//! never sleeps. `start` and `advance` return the delay (ms) until the
//! next trigger, which the caller schedules however it likes: the
//! browser driver in [`crate::lights`] awaits a `TimeoutFuture`, tests
//! use the virtual clock in [`Timeline`].

use crate::error::DashboardError;
use log::trace;
use serde::Deserialize;

/// Visual status of a single light. Off means neither red nor green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightStatus {
    #[default]
    Off,
    Red,
    Green,
}

/// The ordered set of indicator elements driven by the sequencer.
pub trait LightBank {
    fn len(&self) -> usize;

    fn set(&mut self, index: usize, status: LightStatus);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_all(&mut self, status: LightStatus) {
        for i in 0..self.len() {
            self.set(i, status);
        }
    }
}

impl LightBank for Vec<LightStatus> {
    fn len(&self) -> usize {
        <[LightStatus]>::len(self)
    }

    fn set(&mut self, index: usize, status: LightStatus) {
        self[index] = status;
    }
}

/// Delays between triggers, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SequencerTiming {
    /// Period of the ignition trigger (one more red light per firing).
    pub interval_ms: u32,
    /// Wait between the last red light and all green.
    pub hold_ms: u32,
    /// How long the lights stay green.
    pub green_ms: u32,
    /// Dark pause before the next cycle.
    pub pause_ms: u32,
}

impl Default for SequencerTiming {
    fn default() -> Self {
        use crate::config::{LIGHT_GREEN_MS, LIGHT_HOLD_MS, LIGHT_INTERVAL_MS, LIGHT_PAUSE_MS};
        Self {
            interval_ms: LIGHT_INTERVAL_MS,
            hold_ms: LIGHT_HOLD_MS,
            green_ms: LIGHT_GREEN_MS,
            pause_ms: LIGHT_PAUSE_MS,
        }
    }
}

impl SequencerTiming {
    /// Time from one reset to the next for a bank of `lights` lights.
    pub fn cycle_ms(&self, lights: usize) -> u64 {
        u64::from(self.interval_ms) * lights as u64
            + u64::from(self.hold_ms)
            + u64::from(self.green_ms)
            + u64::from(self.pause_ms)
    }

    /// A zero ignition interval would collapse the stagger and, with the
    /// other delays at zero, make the cycle take no time at all.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.interval_ms == 0 {
            return Err(DashboardError::Config(
                "lights.interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the cycle currently stands.
///
/// `Resetting` and `AllGreen` are instantaneous: they are entered and
/// left within a single trigger and are only visible in trace logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Resetting,
    /// `lit` lights are red; the periodic trigger is running.
    Igniting { lit: usize },
    /// All lights red, waiting for the hold delay.
    Holding,
    AllGreen,
    /// All lights green, waiting for the cool-down delay.
    CoolingDown,
    /// All lights off, waiting to restart.
    Pausing,
}

pub struct Sequencer<B: LightBank> {
    bank: B,
    timing: SequencerTiming,
    phase: Phase,
    cycles: u64,
}

impl<B: LightBank> Sequencer<B> {
    pub fn new(bank: B, timing: SequencerTiming) -> Self {
        Self {
            bank,
            timing,
            phase: Phase::Idle,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn timing(&self) -> &SequencerTiming {
        &self.timing
    }

    /// Number of cycles that ran through to the restart.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Activate the sequencer.
    ///
    /// Returns `None` for an empty bank: nothing is touched and no
    /// trigger should be scheduled. Otherwise resets the bank and
    /// returns the delay until the first ignition trigger.
    pub fn start(&mut self) -> Option<u32> {
        if self.bank.is_empty() {
            return None;
        }
        Some(self.reset())
    }

    /// Fire the pending trigger and return the delay until the next one.
    pub fn advance(&mut self) -> Option<u32> {
        let delay = match self.phase {
            Phase::Idle | Phase::Resetting | Phase::AllGreen => return self.start(),
            Phase::Igniting { lit } => {
                self.bank.set(lit, LightStatus::Red);
                let lit = lit + 1;
                if lit < self.bank.len() {
                    self.enter(Phase::Igniting { lit });
                    self.timing.interval_ms
                } else {
                    self.enter(Phase::Holding);
                    self.timing.hold_ms
                }
            }
            Phase::Holding => {
                self.enter(Phase::AllGreen);
                self.bank.set_all(LightStatus::Green);
                self.enter(Phase::CoolingDown);
                self.timing.green_ms
            }
            Phase::CoolingDown => {
                self.bank.set_all(LightStatus::Off);
                self.enter(Phase::Pausing);
                self.timing.pause_ms
            }
            Phase::Pausing => {
                self.cycles += 1;
                self.reset()
            }
        };
        Some(delay)
    }

    fn reset(&mut self) -> u32 {
        self.enter(Phase::Resetting);
        self.bank.set_all(LightStatus::Off);
        self.enter(Phase::Igniting { lit: 0 });
        self.timing.interval_ms
    }

    fn enter(&mut self, phase: Phase) {
        trace!("pit lights: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Virtual clock for driving a [`Sequencer`] without real delays.
pub struct Timeline<B: LightBank> {
    sequencer: Sequencer<B>,
    now_ms: u64,
    next_ms: Option<u64>,
    events: Vec<(u64, Phase)>,
}

impl<B: LightBank> Timeline<B> {
    /// Starts the sequencer at t=0.
    pub fn new(mut sequencer: Sequencer<B>) -> Self {
        let next_ms = sequencer.start().map(u64::from);
        let mut events = Vec::new();
        if next_ms.is_some() {
            events.push((0, sequencer.phase()));
        }
        Self {
            sequencer,
            now_ms: 0,
            next_ms,
            events,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Time of the next pending trigger, `None` if nothing is scheduled.
    pub fn next_trigger_ms(&self) -> Option<u64> {
        self.next_ms
    }

    pub fn sequencer(&self) -> &Sequencer<B> {
        &self.sequencer
    }

    /// `(time, phase entered)` for every trigger fired so far.
    ///
    /// The log grows by one entry per trigger; long runs should call
    /// [`Timeline::clear_events`] between checks.
    pub fn events(&self) -> &[(u64, Phase)] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Fire every trigger due at or before `t_ms`, then move the clock to `t_ms`.
    pub fn run_until(&mut self, t_ms: u64) {
        while let Some(due) = self.next_ms.filter(|&due| due <= t_ms) {
            self.now_ms = due;
            self.next_ms = self.sequencer.advance().map(|d| due + u64::from(d));
            self.events.push((due, self.sequencer.phase()));
        }
        self.now_ms = self.now_ms.max(t_ms);
    }

    /// Run until `n` more cycles have restarted.
    pub fn run_cycles(&mut self, n: u64) {
        let target = self.sequencer.cycles_completed() + n;
        while self.sequencer.cycles_completed() < target {
            match self.next_ms {
                Some(due) => self.run_until(due),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(n: usize) -> Vec<LightStatus> {
        vec![LightStatus::Off; n]
    }

    fn count(bank: &[LightStatus], status: LightStatus) -> usize {
        bank.iter().filter(|&&s| s == status).count()
    }

    #[test]
    fn empty_bank_never_starts() {
        let mut seq = Sequencer::new(bank(0), SequencerTiming::default());
        assert_eq!(seq.start(), None);
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.phase(), Phase::Idle);

        let timeline = Timeline::new(Sequencer::new(bank(0), SequencerTiming::default()));
        assert_eq!(timeline.next_trigger_ms(), None);
        assert!(timeline.events().is_empty());
    }

    #[test]
    fn start_clears_leftover_status() {
        let mut lights = bank(3);
        lights[0] = LightStatus::Green;
        lights[2] = LightStatus::Red;
        let mut seq = Sequencer::new(lights, SequencerTiming::default());
        assert_eq!(seq.start(), Some(500));
        assert_eq!(seq.bank(), &bank(3));
        assert_eq!(seq.phase(), Phase::Igniting { lit: 0 });
    }

    #[test]
    fn ignition_is_staggered_left_to_right() {
        let mut seq = Sequencer::new(bank(4), SequencerTiming::default());
        seq.start();
        for k in 0..4 {
            seq.advance();
            let expected: Vec<_> = (0..4)
                .map(|i| if i <= k { LightStatus::Red } else { LightStatus::Off })
                .collect();
            assert_eq!(seq.bank(), &expected);
        }
        assert_eq!(seq.phase(), Phase::Holding);
    }

    #[test]
    fn all_red_after_n_intervals() {
        for n in 1..=8 {
            let mut t = Timeline::new(Sequencer::new(bank(n), SequencerTiming::default()));
            t.run_until(500 * n as u64);
            let lights = t.sequencer().bank();
            assert_eq!(count(lights, LightStatus::Red), n, "n={n}");
            assert_eq!(count(lights, LightStatus::Green), 0, "n={n}");
        }
    }

    #[test]
    fn green_replaces_red_after_hold() {
        for n in 1..=6 {
            let mut t = Timeline::new(Sequencer::new(bank(n), SequencerTiming::default()));
            let ignition_done = 500 * n as u64;
            t.run_until(ignition_done + 999);
            assert_eq!(t.sequencer().phase(), Phase::Holding);
            t.run_until(ignition_done + 1000);
            let lights = t.sequencer().bank();
            assert_eq!(count(lights, LightStatus::Green), n);
            assert_eq!(count(lights, LightStatus::Red), 0);
        }
    }

    #[test]
    fn five_light_scenario() {
        let mut t = Timeline::new(Sequencer::new(bank(5), SequencerTiming::default()));
        t.run_cycles(1);

        let expected = vec![
            (0u64, Phase::Igniting { lit: 0 }),
            (500, Phase::Igniting { lit: 1 }),
            (1000, Phase::Igniting { lit: 2 }),
            (1500, Phase::Igniting { lit: 3 }),
            (2000, Phase::Igniting { lit: 4 }),
            (2500, Phase::Holding),
            (3500, Phase::CoolingDown),
            (5500, Phase::Pausing),
            (8500, Phase::Igniting { lit: 0 }),
        ];
        assert_eq!(t.events(), expected.as_slice());
        assert_eq!(t.now_ms(), 8500);
        assert_eq!(t.sequencer().bank(), &bank(5));
    }

    #[test]
    fn cleared_events_restart_from_the_next_trigger() {
        let mut t = Timeline::new(Sequencer::new(bank(2), SequencerTiming::default()));
        t.run_cycles(2);
        t.clear_events();
        assert!(t.events().is_empty());
        t.run_until(t.now_ms() + 500);
        assert_eq!(t.events(), &[(14_500, Phase::Igniting { lit: 1 })]);
    }

    #[test]
    fn cool_down_clears_everything() {
        let mut t = Timeline::new(Sequencer::new(bank(5), SequencerTiming::default()));
        t.run_until(5499);
        assert_eq!(count(t.sequencer().bank(), LightStatus::Green), 5);
        t.run_until(5500);
        assert_eq!(t.sequencer().bank(), &bank(5));
        assert_eq!(t.sequencer().phase(), Phase::Pausing);
    }

    #[test]
    fn cycle_length_matches_timing() {
        let timing = SequencerTiming::default();
        for n in 1..=7 {
            let mut t = Timeline::new(Sequencer::new(bank(n), timing));
            t.run_cycles(3);
            assert_eq!(t.now_ms(), 3 * timing.cycle_ms(n));
            assert_eq!(timing.cycle_ms(n), 500 * n as u64 + 6000);
        }
    }

    #[test]
    fn advance_from_idle_starts() {
        let mut seq = Sequencer::new(bank(2), SequencerTiming::default());
        assert_eq!(seq.advance(), Some(500));
        assert_eq!(seq.phase(), Phase::Igniting { lit: 0 });
    }

    #[test]
    fn zero_interval_is_rejected() {
        let timing = SequencerTiming {
            interval_ms: 0,
            hold_ms: 0,
            green_ms: 0,
            pause_ms: 0,
        };
        assert!(matches!(timing.validate(), Err(DashboardError::Config(_))));
        assert!(SequencerTiming::default().validate().is_ok());
    }

    #[test]
    fn zero_tail_delays_still_advance_the_clock() {
        let timing = SequencerTiming {
            interval_ms: 1,
            hold_ms: 0,
            green_ms: 0,
            pause_ms: 0,
        };
        assert!(timing.validate().is_ok());
        let mut t = Timeline::new(Sequencer::new(bank(5), timing));
        t.run_until(20);
        assert_eq!(t.sequencer().cycles_completed(), 4);
        assert_eq!(t.next_trigger_ms(), Some(21));
    }

    #[test]
    fn timing_from_partial_json() {
        let timing: SequencerTiming = serde_json::from_str(r#"{"interval_ms": 250}"#).unwrap();
        assert_eq!(timing.interval_ms, 250);
        assert_eq!(timing.hold_ms, 1000);
        assert_eq!(timing.cycle_ms(4), 1000 + 1000 + 2000 + 3000);
    }
}
