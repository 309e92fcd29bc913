//! Playback history - ring buffer of recently played cues
//!
//! Keeps the last few playbacks in a fixed-size deque so a debug screen or
//! the desktop soundboard can show what the buzzer did without allocating.

use heapless::Deque;

use crate::consts::{CUE_NAME_MAX_LEN, HISTORY_CAPACITY};
use crate::player::PlaybackReport;

/// One finished playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackRecord {
    /// Cue name, empty when played without a catalog lookup.
    /// Truncated to CUE_NAME_MAX_LEN.
    pub name: heapless::String<CUE_NAME_MAX_LEN>,
    pub report: PlaybackReport,
}

impl PlaybackRecord {
    pub fn new(name: &str, report: PlaybackReport) -> Self {
        let mut truncated = heapless::String::new();
        for c in name.chars() {
            if truncated.push(c).is_err() {
                break;
            }
        }
        Self {
            name: truncated,
            report,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// Ring buffer of playback records, oldest dropped first.
pub struct PlaybackHistory {
    records: Deque<PlaybackRecord, HISTORY_CAPACITY>,
    total: u32,
}

impl PlaybackHistory {
    pub const fn new() -> Self {
        Self {
            records: Deque::new(),
            total: 0,
        }
    }

    pub fn push(&mut self, record: PlaybackRecord) {
        if self.records.is_full() {
            self.records.pop_front();
        }
        // room was made above
        let _ = self.records.push_back(record);
        self.total = self.total.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Playbacks recorded since creation, including evicted ones.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PlaybackRecord> {
        self.records.iter()
    }

    /// Newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &PlaybackRecord> {
        self.records.iter().rev().take(count)
    }

    pub fn last(&self) -> Option<&PlaybackRecord> {
        self.records.back()
    }
}

impl Default for PlaybackHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(emitted: u32) -> PlaybackReport {
        PlaybackReport {
            emitted,
            ..PlaybackReport::default()
        }
    }

    #[test]
    fn test_push_and_recent() {
        let mut history = PlaybackHistory::new();
        history.push(PlaybackRecord::new("click", report(1)));
        history.push(PlaybackRecord::new("mode_change", report(2)));

        assert_eq!(history.len(), 2);
        let newest: Vec<_> = history.recent(1).collect();
        assert_eq!(newest[0].name.as_str(), "mode_change");
        assert_eq!(history.last().unwrap().report.emitted, 2);
    }

    #[test]
    fn test_ring_overflow_drops_oldest() {
        let mut history = PlaybackHistory::new();
        for i in 0..(HISTORY_CAPACITY as u32 + 3) {
            history.push(PlaybackRecord::new("tick", report(i)));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.total(), HISTORY_CAPACITY as u32 + 3);
        assert_eq!(history.iter().next().unwrap().report.emitted, 3);
    }

    #[test]
    fn test_long_names_truncate() {
        let record = PlaybackRecord::new("a_really_long_cue_name_that_does_not_fit", report(0));
        assert_eq!(record.name.len(), CUE_NAME_MAX_LEN);
        assert!(!record.is_anonymous());
        assert!(PlaybackRecord::new("", report(0)).is_anonymous());
    }
}
