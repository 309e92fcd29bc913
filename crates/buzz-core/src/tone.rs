//! Tone steps and cues
//!
//! A cue is an ordered list of steps. Each step either holds a tone (or a
//! silence) for its duration, or is a glide step emitted back-to-back with
//! its neighbours to build a frequency sweep.

use alloc::vec::Vec;

use crate::sweep::Sweep;

/// How the player treats a step's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Emit (unless silent), then wait the full duration.
    Held,
    /// Emit back-to-back with the neighbouring glide steps. The run as a
    /// whole is waited on once it ends.
    Glide,
}

/// One (frequency, duration) unit of a cue. Frequency 0 is silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToneStep {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub kind: StepKind,
}

impl ToneStep {
    pub const fn tone(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            kind: StepKind::Held,
        }
    }

    pub const fn silence(duration_ms: u32) -> Self {
        Self::tone(0, duration_ms)
    }

    pub const fn glide(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            kind: StepKind::Glide,
        }
    }

    pub fn is_silence(&self) -> bool {
        self.frequency_hz == 0
    }

    /// Zero-length steps are skipped entirely by the player.
    pub fn is_noop(&self) -> bool {
        self.duration_ms == 0
    }

    pub fn is_glide(&self) -> bool {
        self.kind == StepKind::Glide
    }
}

impl From<(u32, u32)> for ToneStep {
    fn from((frequency_hz, duration_ms): (u32, u32)) -> Self {
        Self::tone(frequency_hz, duration_ms)
    }
}

/// An immutable, ordered sequence of tone steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cue {
    steps: Vec<ToneStep>,
}

impl Cue {
    pub fn new(steps: Vec<ToneStep>) -> Self {
        Self { steps }
    }

    /// Build a cue of held tones and silences from `(frequency, duration)` pairs.
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        Self {
            steps: pairs.iter().copied().map(ToneStep::from).collect(),
        }
    }

    pub fn builder() -> CueBuilder {
        CueBuilder::default()
    }

    pub fn steps(&self) -> &[ToneStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of every step's duration; how long the player takes to play it.
    pub fn duration_ms(&self) -> u32 {
        self.steps
            .iter()
            .fold(0u32, |total, step| total.saturating_add(step.duration_ms))
    }
}

impl FromIterator<ToneStep> for Cue {
    fn from_iter<I: IntoIterator<Item = ToneStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cue {
    type Item = &'a ToneStep;
    type IntoIter = core::slice::Iter<'a, ToneStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Assembles a cue from tones, silences and sweeps.
#[derive(Debug, Default)]
pub struct CueBuilder {
    steps: Vec<ToneStep>,
}

impl CueBuilder {
    pub fn tone(mut self, frequency_hz: u32, duration_ms: u32) -> Self {
        self.steps.push(ToneStep::tone(frequency_hz, duration_ms));
        self
    }

    pub fn silence(mut self, duration_ms: u32) -> Self {
        self.steps.push(ToneStep::silence(duration_ms));
        self
    }

    pub fn sweep(mut self, sweep: Sweep) -> Self {
        self.steps.extend(sweep.steps());
        self
    }

    pub fn build(self) -> Cue {
        Cue::new(self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_order() {
        let cue = Cue::from_pairs(&[(800, 50), (0, 10), (1200, 50)]);

        assert_eq!(
            cue.steps(),
            &[
                ToneStep::tone(800, 50),
                ToneStep::silence(10),
                ToneStep::tone(1200, 50),
            ]
        );
        assert!(cue.steps()[1].is_silence());
    }

    #[test]
    fn test_duration_counts_tones_and_silence() {
        let cue = Cue::from_pairs(&[(1000, 20), (0, 10)]);
        assert_eq!(cue.duration_ms(), 30);
    }

    #[test]
    fn test_duration_includes_glide_steps() {
        let cue = Cue::builder()
            .tone(1000, 20)
            .sweep(Sweep::new(3000, 3100, 50, 1, 5))
            .build();

        // 3 glide steps of 1 ms, final hold 5 ms
        assert_eq!(cue.len(), 5);
        assert_eq!(cue.duration_ms(), 28);
        assert!(cue.steps()[1].is_glide());
    }

    #[test]
    fn test_duration_saturates() {
        let cue = Cue::from_pairs(&[(1000, u32::MAX), (0, 10)]);
        assert_eq!(cue.duration_ms(), u32::MAX);
    }
}
