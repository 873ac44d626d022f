use log::warn;
use serde::Deserialize;

/// A timed interactive event: the player should press at `start_time` and
/// release at `start_time + duration`. Times are seconds from track start
/// (after the track's start offset). Immutable once loaded.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Note {
    pub start_time: f32,
    pub duration: f32,
}

impl Note {
    #[inline(always)]
    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }

    /// The point past which the judge stops waiting on this note and
    /// advances to the next one.
    #[inline(always)]
    pub fn expiry_deadline(&self) -> f32 {
        self.start_time + self.duration * 0.5
    }
}

/// Checks the judge's schedule assumptions: start times non-decreasing and
/// notes non-overlapping. Violations are logged, not rejected; a judge fed
/// a malformed schedule degrades to the documented skip behavior instead
/// of failing the load.
pub fn validate_schedule(track_key: &str, notes: &[Note]) {
    for (i, note) in notes.iter().enumerate() {
        if note.duration < 0.0 {
            warn!("SCHEDULE: track {track_key} note {i} has negative duration {}", note.duration);
        }
        if i == 0 {
            continue;
        }
        let prev = &notes[i - 1];
        if note.start_time < prev.start_time {
            warn!(
                "SCHEDULE: track {track_key} note {i} starts at {} before note {} at {}",
                note.start_time,
                i - 1,
                prev.start_time
            );
        } else if note.start_time < prev.end_time() {
            warn!(
                "SCHEDULE: track {track_key} notes {} and {i} overlap ({} < {})",
                i - 1,
                note.start_time,
                prev.end_time()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, validate_schedule};

    #[test]
    fn end_time_and_expiry_deadline() {
        let note = Note { start_time: 1.0, duration: 0.5 };
        assert!((note.end_time() - 1.5).abs() < f32::EPSILON);
        assert!((note.expiry_deadline() - 1.25).abs() < f32::EPSILON);
    }

    #[test]
    fn validation_accepts_well_formed_and_tolerates_malformed() {
        let good = [
            Note { start_time: 0.5, duration: 0.25 },
            Note { start_time: 1.0, duration: 0.5 },
        ];
        validate_schedule("left", &good);

        // Out-of-order and overlapping schedules only warn; the judge's
        // behavior on them is documented, not undefined.
        let bad = [
            Note { start_time: 1.0, duration: 0.5 },
            Note { start_time: 1.2, duration: 0.1 },
            Note { start_time: 0.1, duration: -0.5 },
        ];
        validate_schedule("right", &bad);
    }
}
