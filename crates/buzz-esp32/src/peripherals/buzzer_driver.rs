//! LEDC buzzer driver
//!
//! Drives the piezo from a dedicated LEDC timer and channel. A tone retunes
//! the timer and sets a 50% duty square wave; stop drops the duty to zero.
//! Waits block the calling task with `FreeRtos::delay_ms`.

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::OutputPin;
use esp_idf_hal::ledc::{
    config::TimerConfig, LedcChannel, LedcDriver, LedcTimer, LedcTimerDriver, LowSpeed,
    Resolution,
};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::prelude::*;
use esp_idf_hal::sys::EspError;

use buzz_core::consts::{MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use buzz_core::{Buzzer, BuzzerFault};

use super::BuzzerPeripherals;

/// Idle timer frequency; retuned on every emit.
const IDLE_FREQUENCY_HZ: u32 = 1_000;

pub struct LedcBuzzer<'d> {
    timer: LedcTimerDriver<'d, LowSpeed>,
    channel: LedcDriver<'d>,
    max_duty: u32,
    sounding: bool,
}

impl<'d> LedcBuzzer<'d> {
    pub fn new<T, C, P>(peripherals: BuzzerPeripherals<T, C, P>) -> Result<Self, EspError>
    where
        T: LedcTimer<SpeedMode = LowSpeed> + Peripheral<P = T> + 'd,
        C: LedcChannel<SpeedMode = LowSpeed> + Peripheral<P = C> + 'd,
        P: OutputPin + 'd,
    {
        // 10-bit keeps the divider valid across the whole tone range
        let timer = LedcTimerDriver::new(
            peripherals.timer,
            &TimerConfig::new()
                .frequency(IDLE_FREQUENCY_HZ.Hz().into())
                .resolution(Resolution::Bits10),
        )?;

        let mut channel = LedcDriver::new(peripherals.channel, &timer, peripherals.pin)?;
        let max_duty = channel.get_max_duty();

        // starts silent
        channel.set_duty(0)?;
        log::info!("Buzzer LEDC initialized (max duty: {})", max_duty);

        Ok(Self {
            timer,
            channel,
            max_duty,
            sounding: false,
        })
    }
}

impl Buzzer for LedcBuzzer<'_> {
    fn emit(&mut self, frequency_hz: u32, _duration_ms: u32) -> Result<(), BuzzerFault> {
        if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&frequency_hz) {
            return Err(BuzzerFault::UnsupportedFrequency(frequency_hz));
        }

        self.timer
            .set_frequency(Hertz(frequency_hz))
            .map_err(|_| BuzzerFault::Driver("timer retune failed"))?;
        self.channel
            .set_duty(self.max_duty / 2)
            .map_err(|_| BuzzerFault::Driver("set duty failed"))?;
        self.sounding = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BuzzerFault> {
        if !self.sounding {
            return Ok(());
        }
        self.channel
            .set_duty(0)
            .map_err(|_| BuzzerFault::Driver("set duty failed"))?;
        self.sounding = false;
        Ok(())
    }

    fn wait(&mut self, duration_ms: u32) {
        FreeRtos::delay_ms(duration_ms);
    }
}
