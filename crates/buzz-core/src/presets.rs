//! Built-in cue presets
//!
//! Frequencies and durations here are tuning data. Changing them never
//! requires touching the player.

use alloc::vec::Vec;

use crate::{sweep::Sweep, tone::Cue};

pub const CLICK: &[(u32, u32)] = &[(1000, 20)];
pub const ALERT: &[(u32, u32)] = &[(1000, 200), (0, 10)];
pub const MODE_CHANGE: &[(u32, u32)] = &[(800, 50), (0, 10), (1200, 50)];
pub const STOPWATCH_CLICK: &[(u32, u32)] = &[(2000, 20), (0, 40)];
pub const ACKNOWLEDGE: &[(u32, u32)] = &[(1500, 40), (0, 30), (1500, 40)];
pub const SUCCESS: &[(u32, u32)] = &[(1000, 80), (0, 20), (1500, 80), (0, 20), (2000, 150)];
pub const ERROR: &[(u32, u32)] = &[(2000, 80), (0, 20), (1500, 80), (0, 20), (1000, 200)];
pub const WARNING: &[(u32, u32)] = &[(700, 600)];
pub const COUNTDOWN_TICK: &[(u32, u32)] = &[(2500, 15)];
pub const COUNTDOWN_FINAL: &[(u32, u32)] = &[(2500, 400)];

const MECHANICAL_KEY_NAMES: [&str; 4] = [
    "mechanical_key_1",
    "mechanical_key_2",
    "mechanical_key_3",
    "mechanical_key_4",
];

const MOUSE_CLICK_NAMES: [&str; 3] = ["mouse_click_1", "mouse_click_2", "mouse_click_3"];

fn mechanical_key(variant: usize) -> Cue {
    match variant {
        // crisp upward snap
        1 => Cue::builder().sweep(Sweep::new(3000, 3500, 50, 1, 5)).build(),
        2 => Cue::builder().sweep(Sweep::new(3500, 3000, 50, 1, 5)).build(),
        3 => Cue::builder().sweep(Sweep::new(2000, 2600, 100, 1, 8)).build(),
        // press and release
        _ => Cue::builder()
            .sweep(Sweep::new(4500, 3500, 100, 1, 3))
            .silence(5)
            .tone(3000, 5)
            .build(),
    }
}

fn mouse_click(variant: usize) -> Cue {
    match variant {
        1 => Cue::builder().sweep(Sweep::new(5000, 4000, 200, 1, 2)).build(),
        2 => Cue::builder().tone(4000, 5).silence(15).tone(3500, 5).build(),
        _ => Cue::builder().sweep(Sweep::new(6000, 5000, 250, 1, 3)).build(),
    }
}

/// Every preset, in catalog registration order.
pub fn all() -> Vec<(&'static str, Cue)> {
    let mut presets = alloc::vec![
        ("click", Cue::from_pairs(CLICK)),
        ("alert", Cue::from_pairs(ALERT)),
        ("mode_change", Cue::from_pairs(MODE_CHANGE)),
        ("stopwatch_click", Cue::from_pairs(STOPWATCH_CLICK)),
        ("acknowledge", Cue::from_pairs(ACKNOWLEDGE)),
        ("success", Cue::from_pairs(SUCCESS)),
        ("error", Cue::from_pairs(ERROR)),
        ("warning", Cue::from_pairs(WARNING)),
        ("countdown", Cue::from_pairs(COUNTDOWN_TICK)),
        ("countdown_final", Cue::from_pairs(COUNTDOWN_FINAL)),
    ];

    for (i, name) in MECHANICAL_KEY_NAMES.iter().enumerate() {
        presets.push((*name, mechanical_key(i + 1)));
    }
    for (i, name) in MOUSE_CLICK_NAMES.iter().enumerate() {
        presets.push((*name, mouse_click(i + 1)));
    }

    presets.push((
        "power_on",
        Cue::builder().sweep(Sweep::new(500, 2500, 100, 5, 100)).build(),
    ));
    presets.push((
        "power_off",
        Cue::builder()
            .sweep(Sweep::new(2500, 500, 100, 5, 100))
            .silence(20)
            .build(),
    ));

    presets
}

/// Application events that have a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Click,
    Alert,
    ModeChange,
    StopwatchClick,
    Acknowledge,
    Success,
    Error,
    Warning,
    CountdownTick,
    CountdownFinal,
    /// Key sound variant, 1-based. Out-of-range variants clamp.
    MechanicalKey(u8),
    /// Mouse click variant, 1-based. Out-of-range variants clamp.
    MouseClick(u8),
    PowerOn,
    PowerOff,
}

const ALL_EVENTS: &[Event] = &[
    Event::Click,
    Event::Alert,
    Event::ModeChange,
    Event::StopwatchClick,
    Event::Acknowledge,
    Event::Success,
    Event::Error,
    Event::Warning,
    Event::CountdownTick,
    Event::CountdownFinal,
    Event::MechanicalKey(1),
    Event::MechanicalKey(2),
    Event::MechanicalKey(3),
    Event::MechanicalKey(4),
    Event::MouseClick(1),
    Event::MouseClick(2),
    Event::MouseClick(3),
    Event::PowerOn,
    Event::PowerOff,
];

fn variant_name(names: &[&'static str], variant: u8) -> &'static str {
    let index = (variant as usize).clamp(1, names.len()) - 1;
    names[index]
}

impl Event {
    pub fn all() -> &'static [Event] {
        ALL_EVENTS
    }

    /// Catalog key for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Click => "click",
            Event::Alert => "alert",
            Event::ModeChange => "mode_change",
            Event::StopwatchClick => "stopwatch_click",
            Event::Acknowledge => "acknowledge",
            Event::Success => "success",
            Event::Error => "error",
            Event::Warning => "warning",
            Event::CountdownTick => "countdown",
            Event::CountdownFinal => "countdown_final",
            Event::MechanicalKey(n) => variant_name(&MECHANICAL_KEY_NAMES, *n),
            Event::MouseClick(n) => variant_name(&MOUSE_CLICK_NAMES, *n),
            Event::PowerOn => "power_on",
            Event::PowerOff => "power_off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::{CATALOG_CAPACITY, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ},
        tone::StepKind,
    };

    #[test]
    fn test_names_unique_and_fit_catalog() {
        let presets = all();
        assert!(presets.len() <= CATALOG_CAPACITY);
        for (i, (name, _)) in presets.iter().enumerate() {
            assert!(
                presets[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate preset {}",
                name
            );
        }
    }

    #[test]
    fn test_every_preset_is_audible() {
        for (name, cue) in all() {
            assert!(!cue.is_empty(), "{} is empty", name);
            assert!(cue.duration_ms() > 0, "{} never blocks", name);
            for step in cue.steps().iter().filter(|step| !step.is_silence()) {
                assert!(
                    (MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&step.frequency_hz),
                    "{} uses {} Hz",
                    name,
                    step.frequency_hz
                );
            }
        }
    }

    #[test]
    fn test_mode_change_is_tone_gap_tone() {
        assert_eq!(
            Cue::from_pairs(MODE_CHANGE),
            Cue::from_pairs(&[(800, 50), (0, 10), (1200, 50)])
        );
    }

    #[test]
    fn test_mechanical_key_sweeps_glide() {
        let cue = mechanical_key(1);
        let glides = cue
            .steps()
            .iter()
            .filter(|step| step.kind == StepKind::Glide)
            .count();
        assert_eq!(glides, 11);
        assert_eq!(cue.steps().last().unwrap().frequency_hz, 3500);
    }

    #[test]
    fn test_variant_names_clamp() {
        assert_eq!(Event::MechanicalKey(0).name(), "mechanical_key_1");
        assert_eq!(Event::MechanicalKey(3).name(), "mechanical_key_3");
        assert_eq!(Event::MechanicalKey(9).name(), "mechanical_key_4");
        assert_eq!(Event::MouseClick(200).name(), "mouse_click_3");
    }

    #[test]
    fn test_every_preset_has_an_event() {
        for (name, _) in all() {
            assert!(
                Event::all().iter().any(|event| event.name() == name),
                "{} is unreachable",
                name
            );
        }
    }
}
