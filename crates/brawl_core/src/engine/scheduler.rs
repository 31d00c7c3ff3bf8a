//! Deferred cue scheduling keyed by virtual elapsed time.
//!
//! Pre-round warning sequences and similar delayed effects live in an
//! explicit table polled each tick. Cancelling removes the entry before it
//! fires, so a cancelled cue has no partial effects.

use crate::engine::ports::AvCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    due_ms: u64,
    cue: AvCue,
}

#[derive(Debug, Default)]
pub struct CueScheduler {
    next_id: u64,
    entries: Vec<Entry>,
}

impl CueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, cue: AvCue) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due_ms, cue });
        id
    }

    /// Remove one pending entry. Returns false when the entry already fired
    /// or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drop every pending entry in one step.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Pop every entry due at or before `now_ms`, ordered by due time, with
    /// insertion order breaking ties.
    pub fn poll(&mut self, now_ms: u64) -> Vec<AvCue> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.due_ms <= now_ms {
                due.push(e.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| (e.due_ms, e.id.0));
        due.into_iter().map(|e| e.cue).collect()
    }
}
