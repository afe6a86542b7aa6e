use f1_dash_ui::{LightBank, LightStatus, Phase, Sequencer, SequencerTiming, Timeline};

/// Records every status write so ordering can be checked.
#[derive(Default)]
struct RecordingBank {
    lights: Vec<LightStatus>,
    writes: Vec<(usize, LightStatus)>,
}

impl RecordingBank {
    fn with_lights(n: usize) -> Self {
        Self {
            lights: vec![LightStatus::Off; n],
            writes: Vec::new(),
        }
    }
}

impl LightBank for RecordingBank {
    fn len(&self) -> usize {
        self.lights.len()
    }

    fn set(&mut self, index: usize, status: LightStatus) {
        self.lights[index] = status;
        self.writes.push((index, status));
    }
}

#[test]
fn empty_bank_is_never_touched() {
    let timeline = Timeline::new(Sequencer::new(
        RecordingBank::default(),
        SequencerTiming::default(),
    ));
    assert_eq!(timeline.next_trigger_ms(), None);
    assert_eq!(timeline.sequencer().phase(), Phase::Idle);
    assert!(timeline.sequencer().bank().writes.is_empty());
}

#[test]
fn red_writes_follow_index_order() {
    let mut timeline = Timeline::new(Sequencer::new(
        RecordingBank::with_lights(5),
        SequencerTiming::default(),
    ));
    timeline.run_until(2500);
    let reds: Vec<usize> = timeline
        .sequencer()
        .bank()
        .writes
        .iter()
        .filter(|(_, status)| *status == LightStatus::Red)
        .map(|(index, _)| *index)
        .collect();
    assert_eq!(reds, [0, 1, 2, 3, 4]);
}

#[test]
fn cycles_repeat_identically() {
    let mut timeline = Timeline::new(Sequencer::new(
        RecordingBank::with_lights(5),
        SequencerTiming::default(),
    ));
    timeline.run_cycles(1);
    let first: Vec<_> = timeline.events().to_vec();
    timeline.run_cycles(1);
    let second: Vec<_> = timeline.events()[first.len()..]
        .iter()
        .map(|&(t, phase)| (t - 8500, phase))
        .collect();

    // The restart event closes the first cycle and opens the second.
    assert_eq!(&first[1..], second.as_slice());
    assert_eq!(timeline.now_ms(), 17_000);
    assert_eq!(timeline.sequencer().cycles_completed(), 2);
}

#[test]
fn custom_timing_shapes_the_cycle() {
    let timing = SequencerTiming {
        interval_ms: 100,
        hold_ms: 50,
        green_ms: 200,
        pause_ms: 10,
    };
    let mut timeline = Timeline::new(Sequencer::new(RecordingBank::with_lights(3), timing));

    timeline.run_until(299);
    assert_eq!(timeline.sequencer().phase(), Phase::Igniting { lit: 2 });
    timeline.run_until(300);
    assert_eq!(timeline.sequencer().phase(), Phase::Holding);
    timeline.run_until(350);
    assert_eq!(timeline.sequencer().phase(), Phase::CoolingDown);
    assert!(timeline
        .sequencer()
        .bank()
        .lights
        .iter()
        .all(|&s| s == LightStatus::Green));
    timeline.run_until(550);
    assert_eq!(timeline.sequencer().phase(), Phase::Pausing);
    timeline.run_until(560);
    assert_eq!(timeline.sequencer().cycles_completed(), 1);
    assert_eq!(timing.cycle_ms(3), 560);
}
