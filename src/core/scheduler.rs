//! One-shot timed events on an explicitly polled queue.
//!
//! The engine never suspends execution: anything the original design would
//! defer (track start offsets, note spawn cues, hold-audio sequencing) is
//! an entry here, fired by `poll` during the frame tick.

/// A queue of `(fire_time, event)` pairs ordered by fire time.
///
/// Entries scheduled for the same instant fire in insertion order, which
/// keeps per-frame behavior deterministic.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    // Sorted ascending by fire time; stable for equal times.
    entries: Vec<(f32, E)>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: f32, event: E) {
        let pos = self
            .entries
            .partition_point(|(t, _)| *t <= at);
        self.entries.insert(pos, (at, event));
    }

    /// Removes and returns every event due at or before `now`.
    pub fn poll(&mut self, now: f32) -> impl Iterator<Item = E> + '_ {
        let due = self.entries.partition_point(|(t, _)| *t <= now);
        self.entries.drain(..due).map(|(_, e)| e)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
