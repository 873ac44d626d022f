//! Track-key → note-sequence registry.
//!
//! Schedules are loaded once from a JSON document mapping each track key
//! to its ordered note list, then shared read-only with the judges.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::game::note::{Note, validate_schedule};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no schedule registered for track key '{0}'")]
    NotFound(String),
    #[error("failed to parse schedule document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All note schedules for a match, keyed by track. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSet {
    tracks: HashMap<String, Arc<[Note]>>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct ScheduleDoc(HashMap<String, Vec<Note>>);

impl ScheduleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document of the shape
    /// `{ "left": [ { "start_time": 1.0, "duration": 0.5 }, ... ], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let doc: ScheduleDoc = serde_json::from_str(json)?;
        let mut set = Self::new();
        for (key, notes) in doc.0 {
            set.insert(key, notes);
        }
        Ok(set)
    }

    /// Registers a schedule programmatically (tests, generated content).
    pub fn insert(&mut self, track_key: impl Into<String>, notes: Vec<Note>) {
        let track_key = track_key.into();
        validate_schedule(&track_key, &notes);
        info!("SCHEDULE: track {track_key} loaded with {} notes", notes.len());
        self.tracks.insert(track_key, notes.into());
    }

    /// Looks up the schedule for a track key.
    pub fn get(&self, track_key: &str) -> Result<Arc<[Note]>, ScheduleError> {
        self.tracks
            .get(track_key)
            .cloned()
            .ok_or_else(|| ScheduleError::NotFound(track_key.to_string()))
    }

    pub fn track_keys(&self) -> impl Iterator<Item = &str> {
        self.tracks.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
