use thiserror::Error;

/// Catalog construction and lookup failures.
///
/// These are programming errors: an event name that was never registered,
/// or a catalog table that registers the same name twice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CueError {
    #[error("unknown cue `{0}`")]
    UnknownCue(alloc::string::String),

    #[error("cue `{0}` is already defined")]
    DuplicateName(&'static str),

    #[error("catalog is full ({capacity} cues)")]
    CatalogFull { capacity: usize },
}

/// Faults reported by a buzzer collaborator.
///
/// The player logs these and keeps its timing; audio is never allowed to
/// stall the device.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerFault {
    #[error("audio output unavailable")]
    Unavailable,

    #[error("unsupported frequency {0} Hz")]
    UnsupportedFrequency(u32),

    #[error("driver error: {0}")]
    Driver(&'static str),
}
