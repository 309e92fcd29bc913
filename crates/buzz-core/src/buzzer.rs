// Platform-agnostic buzzer collaborator

use alloc::boxed::Box;

use crate::error::BuzzerFault;

/// Tone and delay primitives the player renders cues onto.
///
/// Implementations drive a PWM pin, an audio device, or just record what
/// they were asked to do.
pub trait Buzzer {
    /// Start a square wave at `frequency_hz`.
    ///
    /// `duration_ms` is advisory: the output may stop by itself after it
    /// elapses or keep sounding until [`Buzzer::stop`].
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault>;

    /// Silence the output. Calling this while already silent is a no-op.
    fn stop(&mut self) -> Result<(), BuzzerFault>;

    /// Block the caller for `duration_ms`.
    fn wait(&mut self, duration_ms: u32);
}

impl<B: Buzzer + ?Sized> Buzzer for &mut B {
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault> {
        (**self).emit(frequency_hz, duration_ms)
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        (**self).stop()
    }

    fn wait(&mut self, duration_ms: u32) {
        (**self).wait(duration_ms)
    }
}

impl<B: Buzzer + ?Sized> Buzzer for Box<B> {
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault> {
        (**self).emit(frequency_hz, duration_ms)
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        (**self).stop()
    }

    fn wait(&mut self, duration_ms: u32) {
        (**self).wait(duration_ms)
    }
}
