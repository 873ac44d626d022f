//! Headless note-timing and input-judgment engine for hold-based rhythm
//! games.
//!
//! Tracks of timed notes scroll toward a hit line; the player presses and
//! releases a key per track, and each note is judged on how closely the
//! press matched its start time and the release matched its end time. The
//! engine is purely logical: it consumes a note schedule plus a stream of
//! key edges, advances per-track clocks once per frame, and notifies an
//! abstract [`core::presentation::Presenter`] of everything audible or
//! visible. Rendering, audio mixing, and UI are the host's problem.

pub mod config;
pub mod core;
pub mod game;

pub use crate::core::input::{InputEdge, KeyId};
pub use crate::core::presentation::{LogPresenter, NullPresenter, Presenter, SoundCue};
pub use crate::game::battle::{MatchState, Outcome};
pub use crate::game::note::Note;
pub use crate::game::schedule::{ScheduleError, ScheduleSet};
