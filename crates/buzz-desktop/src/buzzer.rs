use std::thread;
use std::time::Duration;

use buzz_core::{Buzzer, BuzzerFault};

/// Picks the speaker when it is compiled in and a device opens, the console otherwise.
pub fn open() -> Box<dyn Buzzer> {
    #[cfg(feature = "speaker")]
    match speaker::SpeakerBuzzer::new() {
        Ok(buzzer) => {
            log::info!("Playing through the default audio device");
            return Box::new(buzzer);
        }
        Err(e) => log::warn!("No audio output ({}), falling back to console", e),
    }

    Box::new(ConsoleBuzzer::new())
}

/// Logs every tone and sleeps through waits, for machines without audio.
pub struct ConsoleBuzzer {
    sounding: Option<u32>,
}

impl ConsoleBuzzer {
    pub fn new() -> Self {
        Self { sounding: None }
    }
}

impl Buzzer for ConsoleBuzzer {
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault> {
        log::info!("beep {}Hz ({}ms)", frequency_hz, duration_ms);
        self.sounding = Some(frequency_hz);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        if let Some(frequency_hz) = self.sounding.take() {
            log::debug!("silence after {}Hz", frequency_hz);
        }
        Ok(())
    }

    fn wait(&mut self, duration_ms: u32) {
        thread::sleep(Duration::from_millis(duration_ms as u64));
    }
}

#[cfg(feature = "speaker")]
mod speaker {
    use std::thread;
    use std::time::Duration;

    use buzz_core::{Buzzer, BuzzerFault};
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    const SAMPLE_RATE: u32 = 48000;
    const AMPLITUDE: f32 = 0.15;

    // Square wave generator
    struct SquareWave {
        frequency: f32,
        sample_rate: u32,
        num_samples: usize,
        current_sample: usize,
    }

    impl SquareWave {
        fn new(frequency: f32, sample_rate: u32) -> Self {
            Self {
                frequency,
                sample_rate,
                num_samples: 0,
                current_sample: 0,
            }
        }

        fn take_duration(mut self, duration: Duration) -> Self {
            self.num_samples = (duration.as_secs_f32() * self.sample_rate as f32) as usize;
            self
        }
    }

    impl Iterator for SquareWave {
        type Item = f32;

        fn next(&mut self) -> Option<Self::Item> {
            if self.num_samples > 0 && self.current_sample >= self.num_samples {
                return None;
            }

            let sample_position = self.current_sample as f32 / self.sample_rate as f32;
            let cycle_position = (sample_position * self.frequency) % 1.0;
            self.current_sample += 1;

            // high for the first half of the cycle
            if cycle_position < 0.5 {
                Some(AMPLITUDE)
            } else {
                Some(-AMPLITUDE)
            }
        }
    }

    impl Source for SquareWave {
        fn current_frame_len(&self) -> Option<usize> {
            if self.num_samples > 0 {
                Some(self.num_samples - self.current_sample)
            } else {
                None
            }
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn total_duration(&self) -> Option<Duration> {
            if self.num_samples > 0 {
                Some(Duration::from_secs_f32(
                    self.num_samples as f32 / self.sample_rate as f32,
                ))
            } else {
                None
            }
        }
    }

    /// Square-wave tones on the default audio device.
    ///
    /// Each emit gets its own sink; replacing the sink cuts the previous
    /// tone, like retuning a PWM pin.
    pub struct SpeakerBuzzer {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sink: Option<Sink>,
    }

    impl SpeakerBuzzer {
        pub fn new() -> anyhow::Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
                sink: None,
            })
        }
    }

    impl Buzzer for SpeakerBuzzer {
        fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), BuzzerFault> {
            let sink = Sink::try_new(&self.handle).map_err(|e| {
                log::error!("Failed to open sink: {}", e);
                BuzzerFault::Unavailable
            })?;
            sink.append(
                SquareWave::new(frequency_hz as f32, SAMPLE_RATE)
                    .take_duration(Duration::from_millis(duration_ms as u64)),
            );
            self.sink = Some(sink);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), BuzzerFault> {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
            Ok(())
        }

        fn wait(&mut self, duration_ms: u32) {
            thread::sleep(Duration::from_millis(duration_ms as u64));
        }
    }
}
