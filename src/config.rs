//! Engine configuration, read from `wirebeat.ini`.
//!
//! A `[game]` section carries the log level and the abort binding; each
//! `[track:<key>]` section binds one track's input key and timing
//! windows. Malformed values fall back to defaults with a warning so a
//! hand-edited file never prevents a match from starting.

use std::fmt::Debug;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::core::input::KeyId;

pub const CONFIG_PATH: &str = "wirebeat.ini";

// --- Minimal INI reader ---
//
// Sections are kept in file order so track declaration order is stable.
#[derive(Debug, Default)]
struct IniDoc {
    sections: Vec<(String, Vec<(String, String)>)>,
}

impl IniDoc {
    fn parse(content: &str) -> Self {
        let mut doc = Self::default();
        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') && line.len() >= 2 {
                let name = line[1..line.len() - 1].trim().to_string();
                doc.sections.push((name, Vec::new()));
                continue;
            }
            if let Some(eq_idx) = line.find('=') {
                let (key_raw, value_raw) = line.split_at(eq_idx);
                let key = key_raw.trim();
                if key.is_empty() {
                    continue;
                }
                let value = value_raw[1..].trim().to_string();
                if let Some((_, entries)) = doc.sections.last_mut() {
                    entries.push((key.to_string(), value));
                } else {
                    warn!("config: key '{key}' before any section header, ignored");
                }
            }
        }
        doc
    }
}

fn get<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

fn parse_or<T>(entries: &[(String, String)], key: &str, default: T, section: &str) -> T
where
    T: FromStr + Copy + Debug,
{
    match get(entries, key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("config: [{section}] {key}='{raw}' is invalid, using {default:?}");
            default
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevelSetting {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelSetting {
    pub const fn as_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevelSetting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

/// Match-level settings from `[game]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub log_level: LogLevelSetting,
    /// Pressing this key forfeits the match.
    pub abort_key: KeyId,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevelSetting::Warn,
            abort_key: KeyId::Escape,
        }
    }
}

/// Per-track judgment settings from `[track:<key>]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSettings {
    /// The key the player holds for this track.
    pub key: KeyId,
    /// Half-window width in seconds; a press or release farther than this
    /// from its target contributes nothing.
    pub threshold: f32,
    /// Judged accuracy at or above this counts as a hit; below it resets
    /// the combo.
    pub minimum_positive_accuracy: f32,
    /// Seconds between track creation and the judgment clock starting.
    pub offset: f32,
    /// Scroll speed in units per second; presentation-only.
    pub scale: f32,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            key: KeyId::Space,
            threshold: 0.1,
            minimum_positive_accuracy: 0.8,
            offset: 1.0,
            scale: 1.0,
        }
    }
}

/// One configured track: its schedule key plus judgment settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    pub track_key: String,
    pub settings: TrackSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub game: GameSettings,
    pub tracks: Vec<TrackConfig>,
}

impl Config {
    pub fn from_ini_str(content: &str) -> Self {
        let doc = IniDoc::parse(content);
        let mut config = Self::default();
        for (name, entries) in &doc.sections {
            if name.eq_ignore_ascii_case("game") {
                config.game.log_level =
                    parse_or(entries, "log_level", config.game.log_level, name);
                config.game.abort_key =
                    parse_key_or(entries, "abort_key", config.game.abort_key, name);
            } else if let Some(track_key) = name.strip_prefix("track:") {
                let defaults = TrackSettings::default();
                let settings = TrackSettings {
                    key: parse_key_or(entries, "key", defaults.key, name),
                    threshold: parse_or(entries, "threshold", defaults.threshold, name),
                    minimum_positive_accuracy: parse_or(
                        entries,
                        "minimum_positive_accuracy",
                        defaults.minimum_positive_accuracy,
                        name,
                    ),
                    offset: parse_or(entries, "offset", defaults.offset, name),
                    scale: parse_or(entries, "scale", defaults.scale, name),
                };
                config.tracks.push(TrackConfig {
                    track_key: track_key.trim().to_string(),
                    settings,
                });
            } else {
                warn!("config: unknown section [{name}], ignored");
            }
        }
        config
    }

    /// Loads from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_ini_str(&content),
            Err(e) => {
                warn!("config: could not read {}: {e}, using defaults", path.as_ref().display());
                Self::default()
            }
        }
    }
}

fn parse_key_or(entries: &[(String, String)], key: &str, default: KeyId, section: &str) -> KeyId {
    match get(entries, key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|()| {
            warn!("config: [{section}] {key}='{raw}' is not a key name, using {default}");
            default
        }),
    }
}
