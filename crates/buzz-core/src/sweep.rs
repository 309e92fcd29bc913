//! Linear frequency sweeps
//!
//! A sweep expands into glide steps at `start, start ± step, ...` up to the
//! last frequency that does not overshoot `end`, then one held step at
//! `end`. The glide steps are emitted back-to-back so the pitch slides
//! instead of stepping.

use crate::tone::ToneStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub start_hz: u32,
    pub end_hz: u32,
    pub step_hz: u32,
    pub step_duration_ms: u32,
    pub final_hold_ms: u32,
}

impl Sweep {
    pub const fn new(
        start_hz: u32,
        end_hz: u32,
        step_hz: u32,
        step_duration_ms: u32,
        final_hold_ms: u32,
    ) -> Self {
        Self {
            start_hz,
            end_hz,
            step_hz,
            step_duration_ms,
            final_hold_ms,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.start_hz <= self.end_hz
    }

    /// Index of the last glide step, `None` for a zero step size.
    fn last_glide(&self) -> Option<u32> {
        if self.step_hz == 0 {
            return None;
        }
        Some(self.start_hz.abs_diff(self.end_hz) / self.step_hz)
    }

    /// Number of glide steps before the final hold. A zero step size yields none.
    pub fn intermediate_count(&self) -> usize {
        self.last_glide().map_or(0, |last| {
            usize::try_from(last).map_or(usize::MAX, |last| last.saturating_add(1))
        })
    }

    /// Expand into glide steps followed by the final held step.
    pub fn steps(&self) -> impl Iterator<Item = ToneStep> + '_ {
        let ascending = self.is_ascending();
        let step_hz = self.step_hz;
        let start_hz = self.start_hz;

        self.last_glide()
            .into_iter()
            .flat_map(|last| 0..=last)
            .map(move |i| {
                // i * step never exceeds the span
                let offset = i * step_hz;
                if ascending {
                    start_hz + offset
                } else {
                    start_hz - offset
                }
            })
            .map(|frequency_hz| ToneStep::glide(frequency_hz, self.step_duration_ms))
            .chain(core::iter::once(ToneStep::tone(
                self.end_hz,
                self.final_hold_ms,
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::StepKind;

    fn glide_frequencies(sweep: &Sweep) -> Vec<u32> {
        sweep
            .steps()
            .filter(|step| step.kind == StepKind::Glide)
            .map(|step| step.frequency_hz)
            .collect()
    }

    #[test]
    fn test_ascending_sweep_hits_end_exactly() {
        let sweep = Sweep::new(3000, 3500, 50, 1, 8);
        let glides = glide_frequencies(&sweep);

        assert_eq!(glides.len(), 11);
        assert_eq!(glides, (0..=10).map(|i| 3000 + i * 50).collect::<Vec<_>>());

        let last = sweep.steps().last().unwrap();
        assert_eq!(last, ToneStep::tone(3500, 8));
    }

    #[test]
    fn test_descending_sweep() {
        let sweep = Sweep::new(4000, 3700, 100, 2, 3);
        assert!(!sweep.is_ascending());
        assert_eq!(glide_frequencies(&sweep), vec![4000, 3900, 3800, 3700]);
    }

    #[test]
    fn test_sweep_stops_before_overshooting() {
        let sweep = Sweep::new(1000, 1180, 50, 1, 4);
        assert_eq!(glide_frequencies(&sweep), vec![1000, 1050, 1100, 1150]);
        assert_eq!(sweep.steps().last().unwrap().frequency_hz, 1180);

        let down = Sweep::new(1180, 1000, 50, 1, 4);
        assert_eq!(glide_frequencies(&down), vec![1180, 1130, 1080, 1030]);
    }

    #[test]
    fn test_zero_step_size_only_holds_end() {
        let sweep = Sweep::new(1000, 2000, 0, 1, 30);
        let steps: Vec<_> = sweep.steps().collect();
        assert_eq!(steps, vec![ToneStep::tone(2000, 30)]);
    }

    #[test]
    fn test_flat_sweep_single_glide() {
        let sweep = Sweep::new(2500, 2500, 10, 1, 5);
        assert_eq!(glide_frequencies(&sweep), vec![2500]);
    }

    #[test]
    fn test_full_range_sweep_keeps_its_glides() {
        let sweep = Sweep::new(0, u32::MAX, 1, 1, 1);
        assert_eq!(sweep.intermediate_count(), u32::MAX as usize + 1);

        let first: Vec<_> = sweep.steps().take(3).map(|step| step.frequency_hz).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert!(sweep.steps().next().unwrap().is_glide());
    }
}
