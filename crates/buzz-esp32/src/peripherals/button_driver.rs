//! Button driver with edge detection.
//!
//! Polls the active-low button GPIOs and reports presses, so the main loop
//! can turn each press into a feedback cue.

use esp_idf_hal::gpio::{AnyInputPin, Input, PinDriver};
use esp_idf_hal::sys::EspError;

use super::ButtonPeripherals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A = 0,
    B,
    Up,
    Down,
    Left,
    Right,
    Pwr,
}

const BUTTONS: [Button; 7] = [
    Button::A,
    Button::B,
    Button::Up,
    Button::Down,
    Button::Left,
    Button::Right,
    Button::Pwr,
];

/// Button driver for the seven device buttons.
///
/// # Button Mapping
/// - A: GPIO15
/// - B: GPIO7
/// - Up: GPIO8
/// - Down: GPIO18
/// - Left: GPIO17
/// - Right: GPIO16
/// - Pwr (BOOT): GPIO0
pub struct ButtonDriver<'a> {
    pins: [PinDriver<'a, AnyInputPin, Input>; 7],
    previous: [bool; 7],
}

impl<'a> ButtonDriver<'a> {
    pub fn new(peripherals: ButtonPeripherals) -> Result<Self, EspError> {
        let pins = [
            PinDriver::input(peripherals.btn_a)?,
            PinDriver::input(peripherals.btn_b)?,
            PinDriver::input(peripherals.btn_up)?,
            PinDriver::input(peripherals.btn_down)?,
            PinDriver::input(peripherals.btn_left)?,
            PinDriver::input(peripherals.btn_right)?,
            PinDriver::input(peripherals.btn_boot)?,
        ];

        log::info!("ButtonDriver initialized with {} buttons", pins.len());

        Ok(Self {
            pins,
            previous: [false; 7],
        })
    }

    /// Read every pin and return the buttons that went down since the last poll.
    pub fn poll(&mut self) -> impl Iterator<Item = Button> + '_ {
        BUTTONS.into_iter().filter(move |button| {
            let idx = *button as usize;
            // active low
            let pressed = self.pins[idx].is_low();
            let just_pressed = pressed && !self.previous[idx];
            self.previous[idx] = pressed;
            just_pressed
        })
    }
}
