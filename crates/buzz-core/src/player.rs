//! Playback engine - renders cues onto a buzzer, blocking until done
//!
//! Steps run strictly in order. Held tones are emitted and then waited on,
//! silences only wait, and glide steps are emitted back-to-back. A run of
//! glide steps is followed by one wait covering all of their durations, so a
//! cue always takes as long as its steps add up to. Faults reported by the buzzer
//! are logged and counted but never interrupt the timing of a cue.

use crate::{
    buzzer::Buzzer,
    catalog::{self, Catalog},
    consts::DEFAULT_POST_ROLL_MS,
    error::CueError,
    history::{PlaybackHistory, PlaybackRecord},
    presets::Event,
    tone::{Cue, ToneStep},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Extra wait after the last step, before the trailing stop.
    pub post_roll_ms: u32,
    /// Silence a sounding tone before a silence step. Needed for outputs
    /// that keep sounding until told to stop.
    pub stop_before_silence: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            post_roll_ms: DEFAULT_POST_ROLL_MS,
            stop_before_silence: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Playing,
}

/// What a single playback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackReport {
    /// Emission commands issued, faulted ones included.
    pub emitted: u32,
    /// Total time spent in buzzer waits.
    pub waited_ms: u32,
    /// Zero-length steps that were skipped.
    pub skipped: u32,
    /// Emit or stop calls the buzzer reported as failed.
    pub faults: u32,
}

pub struct Player<B: Buzzer> {
    buzzer: B,
    config: PlayerConfig,
    state: PlayerState,
    history: PlaybackHistory,
}

impl<B: Buzzer> Player<B> {
    pub fn new(buzzer: B) -> Self {
        Self::with_config(buzzer, PlayerConfig::default())
    }

    pub fn with_config(buzzer: B, config: PlayerConfig) -> Self {
        Self {
            buzzer,
            config,
            state: PlayerState::Idle,
            history: PlaybackHistory::new(),
        }
    }

    /// Play `cue` to completion.
    pub fn play(&mut self, cue: &Cue) -> PlaybackReport {
        self.render("", cue)
    }

    /// Look `name` up in `catalog` and play it.
    pub fn play_named(&mut self, catalog: &Catalog, name: &str) -> Result<PlaybackReport, CueError> {
        let cue = catalog.lookup(name)?;
        Ok(self.render(name, cue))
    }

    /// Play the built-in cue for `event`.
    ///
    /// A missing cue is a bug in the preset table: debug builds panic,
    /// release builds log it and stay silent.
    pub fn play_event(&mut self, event: Event) -> Option<PlaybackReport> {
        match self.play_named(catalog::builtin(), event.name()) {
            Ok(report) => Some(report),
            Err(e) => {
                log::error!("No cue for {:?}: {}", event, e);
                debug_assert!(false, "no cue for {:?}", event);
                None
            }
        }
    }

    /// Silence the output now. Safe to call when nothing is sounding.
    pub fn stop(&mut self) {
        if let Err(fault) = self.buzzer.stop() {
            log::warn!("Buzzer stop failed: {}", fault);
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn history(&self) -> &PlaybackHistory {
        &self.history
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    pub fn into_inner(self) -> B {
        self.buzzer
    }

    fn render(&mut self, name: &str, cue: &Cue) -> PlaybackReport {
        let mut report = PlaybackReport::default();
        let mut sounding = false;

        self.state = PlayerState::Playing;
        log::debug!(
            "Cue {}: {} steps, {}ms",
            if name.is_empty() { "<anonymous>" } else { name },
            cue.len(),
            cue.duration_ms()
        );

        // time owed by the current run of glide steps
        let mut glide_ms: u32 = 0;

        for step in cue {
            if step.is_noop() {
                report.skipped = report.skipped.saturating_add(1);
                continue;
            }

            if step.is_glide() {
                if !step.is_silence() {
                    self.emit(step, &mut report);
                    sounding = true;
                }
                glide_ms = glide_ms.saturating_add(step.duration_ms);
                continue;
            }

            // a glide run lasts as long as its steps, paid before the next held step
            self.settle_glide(&mut glide_ms, &mut report);

            if step.is_silence() {
                if sounding && self.config.stop_before_silence {
                    self.stop_counting(&mut report);
                    sounding = false;
                }
            } else {
                self.emit(step, &mut report);
                sounding = true;
            }

            self.wait(step.duration_ms, &mut report);
        }
        self.settle_glide(&mut glide_ms, &mut report);

        if self.config.post_roll_ms > 0 {
            self.wait(self.config.post_roll_ms, &mut report);
        }
        self.stop_counting(&mut report);

        self.state = PlayerState::Idle;
        log::trace!("Cue done: {:?}", report);
        self.history.push(PlaybackRecord::new(name, report));
        report
    }

    fn emit(&mut self, step: &ToneStep, report: &mut PlaybackReport) {
        log::trace!("emit {}Hz {}ms {:?}", step.frequency_hz, step.duration_ms, step.kind);
        report.emitted = report.emitted.saturating_add(1);
        // no retry: the step's time window is gone by the time we'd know
        if let Err(fault) = self.buzzer.emit(step.frequency_hz, step.duration_ms) {
            report.faults = report.faults.saturating_add(1);
            log::warn!("Buzzer emit {}Hz failed: {}", step.frequency_hz, fault);
        }
    }

    fn stop_counting(&mut self, report: &mut PlaybackReport) {
        if let Err(fault) = self.buzzer.stop() {
            report.faults = report.faults.saturating_add(1);
            log::warn!("Buzzer stop failed: {}", fault);
        }
    }

    fn settle_glide(&mut self, glide_ms: &mut u32, report: &mut PlaybackReport) {
        let pending = core::mem::take(glide_ms);
        if pending > 0 {
            self.wait(pending, report);
        }
    }

    fn wait(&mut self, duration_ms: u32, report: &mut PlaybackReport) {
        self.buzzer.wait(duration_ms);
        report.waited_ms = report.waited_ms.saturating_add(duration_ms);
    }
}
