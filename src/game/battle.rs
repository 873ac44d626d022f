//! Match orchestration: routes key edges to tracks, fans out the frame
//! tick, and owns the terminal victory/defeat transition.

use log::{debug, info};

use crate::config::Config;
use crate::core::input::{InputEdge, InputState};
use crate::core::presentation::Presenter;
use crate::game::accuracy::AccuracyAggregator;
use crate::game::judge::TrackJudge;
use crate::game::schedule::{ScheduleError, ScheduleSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// All state for one match. Constructed from a schedule set and config,
/// discarded and rebuilt (or `reset`) to restart.
pub struct MatchState {
    tracks: Vec<TrackJudge>,
    aggregator: AccuracyAggregator,
    input: InputState,
    config: Config,
    outcome: Option<Outcome>,
}

impl MatchState {
    /// Builds one judge per configured track. Fails if any configured
    /// track key has no registered schedule.
    pub fn new(schedules: &ScheduleSet, config: Config) -> Result<Self, ScheduleError> {
        let mut tracks = Vec::with_capacity(config.tracks.len());
        for track in &config.tracks {
            let notes = schedules.get(&track.track_key)?;
            tracks.push(TrackJudge::new(track.track_key.clone(), notes, track.settings));
        }
        info!("MATCH START: {} tracks", tracks.len());
        Ok(Self {
            tracks,
            aggregator: AccuracyAggregator::new(),
            input: InputState::new(),
            config,
            outcome: None,
        })
    }

    /// Queues a key edge for the next frame tick.
    pub fn queue_input(&mut self, edge: InputEdge) {
        self.input.queue_edge(edge);
    }

    /// One frame: drain queued edges, advance every track, mirror the
    /// holding flags, then apply any terminal transition. Ticks after the
    /// match has ended are ignored, freezing time progression.
    pub fn update(&mut self, delta_time: f32, presenter: &mut dyn Presenter) {
        if self.outcome.is_some() {
            return;
        }

        while let Some(edge) = self.input.next_edge() {
            if edge.pressed && edge.key == self.config.game.abort_key {
                info!("MATCH ABORT: {} pressed", edge.key);
                self.end(Outcome::Defeat, presenter);
                return;
            }
            let mut routed = false;
            for judge in &mut self.tracks {
                if judge.key() == edge.key {
                    routed = true;
                    if edge.pressed {
                        judge.key_down(presenter);
                    } else {
                        judge.key_up(&mut self.aggregator, presenter);
                    }
                }
            }
            if !routed {
                debug!("input: {} {} matches no track", edge.key, if edge.pressed { "down" } else { "up" });
            }
        }

        let mut victory = false;
        for judge in &mut self.tracks {
            if judge.update(delta_time, &mut self.aggregator, presenter) {
                victory = true;
            }
        }
        for judge in &self.tracks {
            presenter.set_holding(judge.track_key(), self.input.is_down(judge.key()));
        }

        if victory {
            self.end(Outcome::Victory, presenter);
        }
    }

    /// One-shot terminal transition; repeated end requests are ignored.
    fn end(&mut self, outcome: Outcome, presenter: &mut dyn Presenter) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = Some(outcome);
        let text = score_text(self.aggregator.average());
        info!("MATCH END: {outcome:?}, {text} ({} samples)", self.aggregator.len());
        presenter.stop_all_audio();
        presenter.show_end_screen(outcome == Outcome::Victory, &text);
    }

    /// Discards all per-match state and reconstructs it from the loaded
    /// schedules, as a scene reload would.
    pub fn reset(&mut self) {
        for judge in &mut self.tracks {
            judge.reset();
        }
        self.aggregator.clear();
        self.input.clear();
        self.outcome = None;
        info!("MATCH RESET");
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn aggregator(&self) -> &AccuracyAggregator {
        &self.aggregator
    }

    pub fn tracks(&self) -> &[TrackJudge] {
        &self.tracks
    }
}

/// The end-screen score line: the mean accuracy as a percentage with one
/// decimal place.
fn score_text(average: f32) -> String {
    format!("Accuracy: {:.1}%", average * 100.0)
}
