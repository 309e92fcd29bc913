//! Recording buzzer - captures calls against a virtual clock
//!
//! Stands in for real hardware in tests and dry runs. Waits advance the
//! clock instead of blocking, and emit/stop faults can be injected.

use alloc::vec::Vec;

use crate::{buzzer::Buzzer, error::BuzzerFault};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerCall {
    Emit { frequency_hz: u32, duration_ms: u32 },
    Stop,
    Wait(u32),
}

/// A call and the virtual time it was issued at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedCall {
    pub at_ms: u32,
    pub call: BuzzerCall,
}

#[derive(Debug, Default)]
pub struct RecordingBuzzer {
    calls: Vec<TimedCall>,
    now_ms: u32,
    active: bool,
    sounding_ms: u32,
    silent_ms: u32,
    fail_emits: bool,
    fail_stops: bool,
}

impl RecordingBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following emit report [`BuzzerFault::Unavailable`].
    pub fn fail_emits(&mut self, fail: bool) {
        self.fail_emits = fail;
    }

    /// Make every following stop report [`BuzzerFault::Unavailable`].
    pub fn fail_stops(&mut self, fail: bool) {
        self.fail_stops = fail;
    }

    pub fn calls(&self) -> Vec<BuzzerCall> {
        self.calls.iter().map(|timed| timed.call).collect()
    }

    pub fn timeline(&self) -> &[TimedCall] {
        &self.calls
    }

    /// `(frequency, duration)` of every emit, in order.
    pub fn emitted(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|timed| match timed.call {
                BuzzerCall::Emit {
                    frequency_hz,
                    duration_ms,
                } => Some((frequency_hz, duration_ms)),
                _ => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.count(|call| matches!(call, BuzzerCall::Stop))
    }

    pub fn wait_count(&self) -> usize {
        self.count(|call| matches!(call, BuzzerCall::Wait(_)))
    }

    /// Virtual time spent in waits.
    pub fn elapsed_ms(&self) -> u32 {
        self.now_ms
    }

    /// Wait time during which an emission was active.
    pub fn sounding_ms(&self) -> u32 {
        self.sounding_ms
    }

    /// Wait time with no active emission.
    pub fn silent_ms(&self) -> u32 {
        self.silent_ms
    }

    pub fn is_sounding(&self) -> bool {
        self.active
    }

    fn count(&self, pred: impl Fn(&BuzzerCall) -> bool) -> usize {
        self.calls.iter().filter(|timed| pred(&timed.call)).count()
    }

    fn record(&mut self, call: BuzzerCall) {
        self.calls.push(TimedCall {
            at_ms: self.now_ms,
            call,
        });
    }
}

impl Buzzer for RecordingBuzzer {
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault> {
        self.record(BuzzerCall::Emit {
            frequency_hz,
            duration_ms,
        });
        if self.fail_emits {
            return Err(BuzzerFault::Unavailable);
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        self.record(BuzzerCall::Stop);
        if self.fail_stops {
            return Err(BuzzerFault::Unavailable);
        }
        self.active = false;
        Ok(())
    }

    fn wait(&mut self, duration_ms: u32) {
        self.record(BuzzerCall::Wait(duration_ms));
        if self.active {
            self.sounding_ms = self.sounding_ms.saturating_add(duration_ms);
        } else {
            self.silent_ms = self.silent_ms.saturating_add(duration_ms);
        }
        self.now_ms = self.now_ms.saturating_add(duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock() {
        let mut buzzer = RecordingBuzzer::new();
        buzzer.emit(1000, 20).unwrap();
        buzzer.wait(20);
        buzzer.stop().unwrap();
        buzzer.wait(10);

        assert_eq!(buzzer.elapsed_ms(), 30);
        assert_eq!(buzzer.sounding_ms(), 20);
        assert_eq!(buzzer.silent_ms(), 10);
        assert_eq!(buzzer.timeline()[2].at_ms, 20);
    }

    #[test]
    fn test_repeated_stop_is_harmless() {
        let mut buzzer = RecordingBuzzer::new();
        buzzer.stop().unwrap();
        buzzer.stop().unwrap();
        assert!(!buzzer.is_sounding());
        assert_eq!(buzzer.stop_count(), 2);
    }

    #[test]
    fn test_injected_fault() {
        let mut buzzer = RecordingBuzzer::new();
        buzzer.fail_emits(true);
        assert_eq!(buzzer.emit(440, 5), Err(BuzzerFault::Unavailable));
        assert!(!buzzer.is_sounding());
        assert_eq!(buzzer.emitted(), vec![(440, 5)]);
    }
}
