use buzz_core::{Event, Player};
use esp_idf_hal::delay::FreeRtos;

mod peripherals;

use peripherals::{Button, ButtonDriver, LedcBuzzer, SystemPeripherals};

const POLL_INTERVAL_MS: u32 = 10;

fn button_event(button: Button) -> Event {
    match button {
        Button::A => Event::Click,
        Button::B => Event::ModeChange,
        Button::Up => Event::MechanicalKey(1),
        Button::Down => Event::MechanicalKey(2),
        Button::Left => Event::MouseClick(1),
        Button::Right => Event::MouseClick(2),
        Button::Pwr => Event::PowerOff,
    }
}

fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    // It is necessary to call this function once. Otherwise, some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("Buzz ESP32 starting...");

    let peripherals = SystemPeripherals::take()?;
    let mut buttons = ButtonDriver::new(peripherals.buttons)?;

    // the LEDC channel keeps ringing until its duty is cleared, so silences stop it
    let mut player = Player::new(LedcBuzzer::new(peripherals.buzzer)?);

    player.play_event(Event::PowerOn);
    log::info!("Ready, waiting for buttons");

    loop {
        for button in buttons.poll() {
            let event = button_event(button);
            log::info!("{:?} pressed -> {}", button, event.name());
            // blocks this loop until the cue has played
            if let Some(report) = player.play_event(event) {
                if report.faults > 0 {
                    log::warn!("{} played with {} buzzer faults", event.name(), report.faults);
                }
            }
        }

        FreeRtos::delay_ms(POLL_INTERVAL_MS);
    }
}
