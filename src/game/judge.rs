//! Per-track note judgment state machine.
//!
//! Each track owns a read-only note schedule, a judgment clock that starts
//! after the track's start offset, and three indices into the schedule:
//! the note the clock is waiting to expire (`current_index`), the note the
//! player is holding against (`input_index`, meaningful only while
//! `holding`), and the highest index judged by the release path
//! (`finished`). A note's accuracy is the mean of two half-window
//! contributions: press timing against its start and release timing
//! against its end.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::TrackSettings;
use crate::core::input::KeyId;
use crate::core::presentation::{Presenter, SoundCue};
use crate::core::scheduler::TimerQueue;
use crate::game::accuracy::AccuracyAggregator;
use crate::game::combo::{ComboTracker, shake_for_combo};
use crate::game::note::Note;

/// Delay between the press beep and the looped hold tone.
const HOLD_LOOP_DELAY_SECONDS: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackPhase {
    /// Waiting out the start offset; the judgment clock is not running.
    Idle,
    Running,
    /// Every schedule position has passed. Terminal.
    Completed,
}

/// One-shot events on the spawn clock, which runs from construction and
/// is independent of the judgment clock.
#[derive(Clone, Copy, Debug)]
enum TrackEvent {
    Start,
    Spawn(usize),
    HoldLoop,
}

pub struct TrackJudge {
    track_key: String,
    notes: Arc<[Note]>,
    settings: TrackSettings,
    phase: TrackPhase,
    spawn_clock: f32,
    elapsed: f32,
    timers: TimerQueue<TrackEvent>,
    current_index: usize,
    input_index: usize,
    finished: Option<usize>,
    holding: bool,
    accuracy: f32,
    combo: ComboTracker,
}

impl TrackJudge {
    pub fn new(track_key: impl Into<String>, notes: Arc<[Note]>, settings: TrackSettings) -> Self {
        let mut judge = Self {
            track_key: track_key.into(),
            notes,
            settings,
            phase: TrackPhase::Idle,
            spawn_clock: 0.0,
            elapsed: 0.0,
            timers: TimerQueue::new(),
            current_index: 0,
            input_index: 0,
            finished: None,
            holding: false,
            accuracy: 0.0,
            combo: ComboTracker::new(),
        };
        judge.schedule_initial_timers();
        judge
    }

    fn schedule_initial_timers(&mut self) {
        self.timers.schedule(self.settings.offset.max(0.0), TrackEvent::Start);
        // The spawner emits each note's sprite at start + duration/2 on
        // the spawn clock; with the lead distance of `offset * scale` it
        // reaches the hit line exactly at the note's start time.
        for (i, note) in self.notes.iter().enumerate() {
            self.timers.schedule(note.expiry_deadline(), TrackEvent::Spawn(i));
        }
    }

    /// Discards all per-match state and re-arms the timers, as if the
    /// track had just been constructed.
    pub fn reset(&mut self) {
        self.phase = TrackPhase::Idle;
        self.spawn_clock = 0.0;
        self.elapsed = 0.0;
        self.timers.clear();
        self.current_index = 0;
        self.input_index = 0;
        self.finished = None;
        self.holding = false;
        self.accuracy = 0.0;
        self.combo.reset();
        self.schedule_initial_timers();
    }

    /// Advances both clocks by one frame. Returns `true` on the tick the
    /// track transitions to `Completed`, which is the match's victory
    /// condition.
    pub fn update(
        &mut self,
        delta_time: f32,
        aggregator: &mut AccuracyAggregator,
        presenter: &mut dyn Presenter,
    ) -> bool {
        self.spawn_clock += delta_time;
        let events: Vec<TrackEvent> = self.timers.poll(self.spawn_clock).collect();
        for event in events {
            match event {
                TrackEvent::Start => {
                    if self.phase == TrackPhase::Idle {
                        self.phase = TrackPhase::Running;
                        info!("TRACK START: {} after {:.2}s offset", self.track_key, self.settings.offset);
                        presenter.start_track_audio(&self.track_key);
                    }
                }
                TrackEvent::Spawn(i) => {
                    if let Some(note) = self.notes.get(i) {
                        presenter.spawn_note(&self.track_key, i, note.duration);
                    }
                }
                TrackEvent::HoldLoop => {
                    if self.holding {
                        presenter.play_sound(&self.track_key, SoundCue::HoldLoop);
                    }
                }
            }
        }

        if self.phase == TrackPhase::Idle {
            return false;
        }
        // The judgment clock keeps running after completion so that a
        // still-held note can be released and judged.
        self.elapsed += delta_time;
        if self.phase == TrackPhase::Completed {
            return false;
        }

        if self.notes.is_empty() {
            self.phase = TrackPhase::Completed;
            info!("TRACK COMPLETE: {} (empty schedule)", self.track_key);
            return true;
        }

        // At most one index advance per tick. Notes spaced closer than one
        // frame can be skipped without an individual expiry check; the
        // forced miss for note k only ever fires from note k+1's expiry.
        if let Some(note) = self.current_note()
            && self.elapsed >= note.expiry_deadline()
        {
            if self.current_index >= 1 && self.previous_unfinished() {
                info!(
                    "FORCED MISS: track {}, note {} never released",
                    self.track_key,
                    self.current_index - 1
                );
                self.dispatch_judgment(0.0, aggregator, presenter);
            }
            self.current_index += 1;

            if self.current_index >= self.notes.len() {
                self.phase = TrackPhase::Completed;
                info!("TRACK COMPLETE: {}", self.track_key);
                return true;
            }
        }
        false
    }

    /// Key-down for this track's bound key, evaluated against the note at
    /// `current_index`.
    pub fn key_down(&mut self, presenter: &mut dyn Presenter) {
        if self.holding {
            // A windowing host only reports one down edge per physical
            // press; a repeat edge while held carries no information.
            debug!("REPEAT PRESS: track {} ignored while holding", self.track_key);
            return;
        }
        let idx = self.current_index;
        let Some(note) = self.notes.get(idx).copied() else {
            return;
        };
        if self.finished.is_some_and(|f| f >= idx) {
            warn!(
                "INVALID PRESS: track {}, note {idx} already judged (finished {})",
                self.track_key,
                self.finished_display()
            );
            return;
        }

        presenter.play_sound(&self.track_key, SoundCue::Press);
        self.timers
            .schedule(self.spawn_clock + HOLD_LOOP_DELAY_SECONDS, TrackEvent::HoldLoop);
        debug!(
            "DOWN: track {}, note {idx} start {:.3}, t {:.3}",
            self.track_key, note.start_time, self.elapsed
        );

        let dist = (note.start_time - self.elapsed).abs();
        if dist < self.settings.threshold {
            self.accuracy += 1.0 - dist / self.settings.threshold;
            presenter.set_particles(&self.track_key, true);
        }
        // Pre-release combo credit for a clean start.
        if self.accuracy > self.settings.minimum_positive_accuracy {
            self.combo_increase(presenter);
        }

        self.input_index = self.current_index;
        self.holding = true;
    }

    /// Key-up for this track's bound key. Finalizes the held note's
    /// judgment; a release without an active hold is a logged no-op.
    pub fn key_up(&mut self, aggregator: &mut AccuracyAggregator, presenter: &mut dyn Presenter) {
        if !self.holding {
            debug!("SPURIOUS RELEASE: track {}", self.track_key);
            return;
        }
        self.holding = false;
        presenter.stop_hold_audio(&self.track_key);
        presenter.set_particles(&self.track_key, false);

        let idx = self.input_index;
        let Some(note) = self.notes.get(idx).copied() else {
            self.accuracy = 0.0;
            return;
        };
        let dist = (note.end_time() - self.elapsed).abs();
        if dist < self.settings.threshold {
            self.accuracy += 1.0 - dist / self.settings.threshold;
        }
        debug!(
            "UP: track {}, note {idx} end {:.3}, t {:.3}",
            self.track_key,
            note.end_time(),
            self.elapsed
        );

        self.finished = Some(self.finished.map_or(idx, |f| f.max(idx)));
        // Entry and exit timing each weigh 50%.
        let judged = self.accuracy * 0.5;
        self.dispatch_judgment(judged, aggregator, presenter);
        self.accuracy = 0.0;
        presenter.play_sound(&self.track_key, SoundCue::Release);
    }

    /// Shared terminal path for forced misses and normal releases.
    fn dispatch_judgment(
        &mut self,
        accuracy: f32,
        aggregator: &mut AccuracyAggregator,
        presenter: &mut dyn Presenter,
    ) {
        aggregator.record(accuracy);
        if accuracy >= self.settings.minimum_positive_accuracy {
            presenter.good_click(&self.track_key);
            self.combo_increase(presenter);
        } else {
            self.combo.reset();
            presenter.play_sound(&self.track_key, SoundCue::Miss);
            presenter.line_failed(&self.track_key);
        }
    }

    fn combo_increase(&mut self, presenter: &mut dyn Presenter) {
        let count = self.combo.increase();
        presenter.combo_text(&self.track_key, count);
        let (intensity, duration) = shake_for_combo(count);
        presenter.camera_shake(intensity, duration);
    }

    #[inline(always)]
    fn previous_unfinished(&self) -> bool {
        self.finished.is_none_or(|f| self.current_index - 1 > f)
    }

    /// Bounds-guarded current-note accessor.
    pub fn current_note(&self) -> Option<Note> {
        self.notes.get(self.current_index).copied()
    }

    pub fn track_key(&self) -> &str {
        &self.track_key
    }

    pub fn key(&self) -> KeyId {
        self.settings.key
    }

    pub fn phase(&self) -> TrackPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn combo(&self) -> u32 {
        self.combo.count()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn finished_index(&self) -> Option<usize> {
        self.finished
    }

    fn finished_display(&self) -> i64 {
        self.finished.map_or(-1, |f| f as i64)
    }

    /// Multi-line internal-state readout for a debug overlay. Diagnostic
    /// only; the format is not a contract.
    pub fn debug_readout(&self) -> String {
        format!(
            "note #: {}\nnote # for input: {}\nfinished #: {}\nholding: {}\ntime: {:.3}\nstart time of curr note: {}\naccuracy: {:.3}\ncombo: {}",
            self.current_index,
            self.input_index,
            self.finished_display(),
            self.holding,
            self.elapsed,
            self.current_note().map_or(-1.0, |n| n.start_time),
            self.accuracy,
            self.combo.count(),
        )
    }
}
