//! Cue catalog - fixed-capacity registry of named cues
//!
//! Catalogs are filled once during start-up and only read afterwards. The
//! process-wide built-in catalog is created lazily on first use.

use alloc::string::ToString;

use heapless::Vec;
use lazy_static::lazy_static;

use crate::{consts::CATALOG_CAPACITY, error::CueError, presets, tone::Cue};

lazy_static! {
    static ref BUILTIN: Catalog = match Catalog::with_presets() {
        Ok(catalog) => catalog,
        Err(e) => panic!("invalid built-in cue table: {}", e),
    };
}

/// The built-in catalog holding every preset.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

struct Entry {
    name: &'static str,
    cue: Cue,
}

/// Mapping from unique event name to cue, in registration order.
pub struct Catalog {
    entries: Vec<Entry, CATALOG_CAPACITY>,
}

impl Catalog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A catalog holding every preset from [`presets::all`].
    pub fn with_presets() -> Result<Self, CueError> {
        let mut catalog = Self::new();
        for (name, cue) in presets::all() {
            catalog.define(name, cue)?;
        }
        log::debug!("Cue catalog ready ({} cues)", catalog.len());
        Ok(catalog)
    }

    /// Register `cue` under `name`. Names are unique.
    pub fn define(&mut self, name: &'static str, cue: Cue) -> Result<(), CueError> {
        if self.contains(name) {
            return Err(CueError::DuplicateName(name));
        }

        self.entries
            .push(Entry { name, cue })
            .map_err(|_| CueError::CatalogFull {
                capacity: CATALOG_CAPACITY,
            })?;
        log::trace!("Defined cue {}", name);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Cue, CueError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.cue)
            .ok_or_else(|| CueError::UnknownCue(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Registered names, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Name and cue pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Cue)> {
        self.entries.iter().map(|entry| (entry.name, &entry.cue))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
