mod button_driver;
mod buzzer_driver;

pub use button_driver::{Button, ButtonDriver};
pub use buzzer_driver::LedcBuzzer;

use esp_idf_hal::gpio::AnyInputPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::sys::EspError;

pub struct SystemPeripherals {
    pub buttons: ButtonPeripherals,
    pub buzzer: BuzzerPeripherals<
        esp_idf_hal::ledc::TIMER1,
        esp_idf_hal::ledc::CHANNEL1,
        esp_idf_hal::gpio::Gpio9,
    >,
}

/// Button GPIO pins
/// Active low (directly connected to GND when pressed)
pub struct ButtonPeripherals {
    pub btn_a: AnyInputPin,    // GPIO15
    pub btn_b: AnyInputPin,    // GPIO7
    pub btn_up: AnyInputPin,   // GPIO8
    pub btn_down: AnyInputPin, // GPIO18
    pub btn_left: AnyInputPin, // GPIO17
    pub btn_right: AnyInputPin,// GPIO16
    pub btn_boot: AnyInputPin, // GPIO0 (BOOT button)
}

/// LEDC timer, channel and pin dedicated to the piezo
pub struct BuzzerPeripherals<T, C, P> {
    pub timer: T,
    pub channel: C,
    pub pin: P,
}

impl SystemPeripherals {
    pub fn take() -> Result<Self, EspError> {
        let peripherals = Peripherals::take()?;

        Ok(SystemPeripherals {
            buttons: ButtonPeripherals {
                btn_a: peripherals.pins.gpio15.into(),
                btn_b: peripherals.pins.gpio7.into(),
                btn_up: peripherals.pins.gpio8.into(),
                btn_down: peripherals.pins.gpio18.into(),
                btn_left: peripherals.pins.gpio17.into(),
                btn_right: peripherals.pins.gpio16.into(),
                btn_boot: peripherals.pins.gpio0.into(),
            },
            buzzer: BuzzerPeripherals {
                timer: peripherals.ledc.timer1,
                channel: peripherals.ledc.channel1,
                pin: peripherals.pins.gpio9,
            },
        })
    }
}
