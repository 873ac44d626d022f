//! The one-way boundary between the judgment engine and whatever renders
//! or plays it.
//!
//! Every call is fire-and-forget: the engine never reads anything back,
//! and a host that ignores a callback loses polish, not correctness.

use log::debug;

/// Sound effects the engine can request per track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// Short beep on key-down.
    Press,
    /// Looped tone while a key is held, sequenced shortly after `Press`.
    HoldLoop,
    /// Beep on key-up.
    Release,
    /// Failure sting on a judged miss.
    Miss,
}

/// Presentation sink. All methods default to no-ops so hosts implement
/// only what they draw or play.
#[allow(unused_variables)]
pub trait Presenter {
    fn play_sound(&mut self, track: &str, cue: SoundCue) {}
    /// Stops the looped hold tone for a track, if one is playing.
    fn stop_hold_audio(&mut self, track: &str) {}
    /// Starts a track's backing audio once its start offset elapses.
    fn start_track_audio(&mut self, track: &str) {}
    /// Good-timing particle burst on/off.
    fn set_particles(&mut self, track: &str, on: bool) {}
    /// Telegraph animation flag mirroring live key state.
    fn set_holding(&mut self, track: &str, holding: bool) {}
    /// A note entered the visible field; `duration` sizes the sprite.
    fn spawn_note(&mut self, track: &str, index: usize, duration: f32) {}
    fn combo_text(&mut self, track: &str, combo: u32) {}
    fn camera_shake(&mut self, intensity: f32, duration: f32) {}
    /// A judged note cleared the positive-accuracy bar.
    fn good_click(&mut self, track: &str) {}
    /// A judged note fell below the positive-accuracy bar.
    fn line_failed(&mut self, track: &str) {}
    fn show_end_screen(&mut self, victory: bool, score_text: &str) {}
    fn stop_all_audio(&mut self) {}
}

/// Ignores everything. Useful for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Logs every callback at debug level. Useful when wiring up a host.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;


impl Presenter for LogPresenter {
    fn play_sound(&mut self, track: &str, cue: SoundCue) {
        debug!("present: track {track} sound {cue:?}");
    }

    fn stop_hold_audio(&mut self, track: &str) {
        debug!("present: track {track} hold audio stop");
    }

    fn start_track_audio(&mut self, track: &str) {
        debug!("present: track {track} audio start");
    }

    fn set_particles(&mut self, track: &str, on: bool) {
        debug!("present: track {track} particles {on}");
    }

    fn set_holding(&mut self, track: &str, holding: bool) {
        debug!("present: track {track} holding {holding}");
    }

    fn spawn_note(&mut self, track: &str, index: usize, duration: f32) {
        debug!("present: track {track} spawn note {index} dur {duration:.3}");
    }

    fn combo_text(&mut self, track: &str, combo: u32) {
        debug!("present: track {track} combo {combo}");
    }

    fn camera_shake(&mut self, intensity: f32, duration: f32) {
        debug!("present: shake {intensity:.2} for {duration:.2}s");
    }

    fn good_click(&mut self, track: &str) {
        debug!("present: track {track} good click");
    }

    fn line_failed(&mut self, track: &str) {
        debug!("present: track {track} line failed");
    }

    fn show_end_screen(&mut self, victory: bool, score_text: &str) {
        debug!("present: end screen victory={victory} {score_text}");
    }

    fn stop_all_audio(&mut self) {
        debug!("present: stop all audio");
    }
}
