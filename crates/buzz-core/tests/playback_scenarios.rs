//! End-to-end playback scenarios against a recording buzzer

use std::time::{Duration, Instant};

use buzz_core::recording::{BuzzerCall, RecordingBuzzer};
use buzz_core::{Buzzer, BuzzerFault, Catalog, Cue, CueError, Event, Player, Sweep, catalog};

#[test]
fn test_click_end_to_end() {
    let mut catalog = Catalog::new();
    catalog.define("click", Cue::from_pairs(&[(2000, 50)])).unwrap();

    let mut player = Player::new(RecordingBuzzer::new());
    let report = player.play(catalog.lookup("click").unwrap());

    let buzzer = player.buzzer();
    assert_eq!(buzzer.emitted(), vec![(2000, 50)]);
    assert!(buzzer.elapsed_ms() >= 50);
    assert_eq!(buzzer.stop_count(), 1);
    assert_eq!(buzzer.calls().last(), Some(&BuzzerCall::Stop));
    assert_eq!(report.emitted, 1);
}

#[test]
fn test_mode_change_gap_between_tones() {
    let mut catalog = Catalog::new();
    catalog
        .define("mode_change", Cue::from_pairs(&[(800, 50), (0, 10), (1200, 50)]))
        .unwrap();

    let mut player = Player::new(RecordingBuzzer::new());
    player.play_named(&catalog, "mode_change").unwrap();

    let buzzer = player.buzzer();
    assert_eq!(buzzer.emitted(), vec![(800, 50), (1200, 50)]);
    assert!(buzzer.elapsed_ms() >= 110);

    let emit_times: Vec<u32> = buzzer
        .timeline()
        .iter()
        .filter(|timed| matches!(timed.call, BuzzerCall::Emit { .. }))
        .map(|timed| timed.at_ms)
        .collect();
    // first tone held 50ms, then a 10ms silence
    assert!(emit_times[1] - emit_times[0] >= 60);
    assert!(buzzer.silent_ms() >= 10);
}

#[test]
fn test_tone_then_silence_split() {
    let mut player = Player::new(RecordingBuzzer::new());
    player.play(&Cue::from_pairs(&[(1000, 20), (0, 10)]));

    let buzzer = player.buzzer();
    assert!(buzzer.elapsed_ms() >= 30);
    assert!(buzzer.sounding_ms() >= 20);
    assert!(buzzer.silent_ms() >= 10);
}

#[test]
fn test_sweep_glides_back_to_back() {
    let cue = Cue::builder().sweep(Sweep::new(3000, 3500, 50, 1, 20)).build();
    let mut player = Player::new(RecordingBuzzer::new());
    player.play(&cue);

    let calls = player.buzzer().calls();
    let expected_glides: Vec<BuzzerCall> = (0..=10)
        .map(|i| BuzzerCall::Emit {
            frequency_hz: 3000 + i * 50,
            duration_ms: 1,
        })
        .collect();

    assert_eq!(calls[..11], expected_glides[..]);
    assert_eq!(
        calls[11..],
        [
            BuzzerCall::Wait(11),
            BuzzerCall::Emit {
                frequency_hz: 3500,
                duration_ms: 20
            },
            BuzzerCall::Wait(20),
            BuzzerCall::Stop,
        ]
    );
}

#[test]
fn test_stop_is_idempotent() {
    let mut player = Player::new(RecordingBuzzer::new());
    player.stop();
    player.stop();
    assert!(!player.buzzer().is_sounding());

    player.play(&Cue::from_pairs(&[(1500, 10)]));
    player.stop();
    assert!(!player.buzzer().is_sounding());
    assert_eq!(player.buzzer().elapsed_ms(), 10);
}

#[test]
fn test_unknown_cue_is_reported() {
    let catalog = catalog::builtin();
    assert_eq!(
        catalog.lookup("does_not_exist"),
        Err(CueError::UnknownCue("does_not_exist".to_string()))
    );
}

#[test]
fn test_every_event_plays() {
    let mut player = Player::new(RecordingBuzzer::new());
    for event in Event::all() {
        let cue = catalog::builtin().lookup(event.name()).unwrap();
        let before = player.buzzer().elapsed_ms();

        let report = player.play_event(*event).unwrap();

        assert_eq!(report.waited_ms, cue.duration_ms(), "{:?}", event);
        assert_eq!(player.buzzer().elapsed_ms() - before, cue.duration_ms());
        assert!(!player.buzzer().is_sounding());
    }
    assert_eq!(player.history().total(), Event::all().len() as u32);
}

#[test]
fn test_stop_faults_do_not_stall() {
    let mut buzzer = RecordingBuzzer::new();
    buzzer.fail_stops(true);
    let mut player = Player::new(buzzer);

    let report = player.play_event(Event::Success).unwrap();

    assert!(report.faults > 0);
    assert_eq!(report.waited_ms, 350);
}

/// Blocks for real, like a hardware delay.
#[derive(Default)]
struct SleepingBuzzer {
    emits: u32,
}

impl Buzzer for SleepingBuzzer {
    fn emit(&mut self, _frequency_hz: u32, _duration_ms: u32) -> Result<(), BuzzerFault> {
        self.emits += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        Ok(())
    }

    fn wait(&mut self, duration_ms: u32) {
        std::thread::sleep(Duration::from_millis(duration_ms as u64));
    }
}

#[test]
fn test_wall_clock_duration() {
    let mut player = Player::new(SleepingBuzzer::default());
    let start = Instant::now();
    player.play(&Cue::from_pairs(&[(1000, 20), (0, 10)]));

    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(player.into_inner().emits, 1);
}

#[test]
fn test_sweep_cues_take_declared_time() {
    let catalog = catalog::builtin();
    let mut player = Player::new(SleepingBuzzer::default());

    for name in ["mechanical_key_1", "power_on"] {
        let cue = catalog.lookup(name).unwrap();
        let declared: u32 = cue.steps().iter().map(|step| step.duration_ms).sum();

        let start = Instant::now();
        player.play_named(catalog, name).unwrap();

        assert!(
            start.elapsed() >= Duration::from_millis(declared as u64),
            "{} took {:?}, declared {}ms",
            name,
            start.elapsed(),
            declared
        );
    }
}
