#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod buzzer;
pub mod catalog;
pub mod consts;
pub mod error;
pub mod history;
pub mod player;
pub mod presets;
pub mod recording;
pub mod sweep;
pub mod tone;

pub use buzzer::Buzzer;
pub use catalog::Catalog;
pub use error::{BuzzerFault, CueError};
pub use player::{PlaybackReport, Player, PlayerConfig, PlayerState};
pub use presets::Event;
pub use sweep::Sweep;
pub use tone::{Cue, StepKind, ToneStep};
