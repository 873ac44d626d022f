use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// A physical key identity, decoupled from any windowing backend.
///
/// Config files name keys the way keymap bindings do: `KeyF`, `Digit3`,
/// `Space`, `Enter`, `Escape`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyId {
    /// A letter key, stored lowercase (`'a'..='z'`).
    Letter(char),
    /// A digit key on the main row (`0..=9`).
    Digit(u8),
    Space,
    Enter,
    Escape,
}

impl FromStr for KeyId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("Key") {
            let mut chars = rest.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && c.is_ascii_alphabetic()
            {
                return Ok(Self::Letter(c.to_ascii_lowercase()));
            }
            return Err(());
        }
        if let Some(rest) = s.strip_prefix("Digit") {
            return match rest.parse::<u8>() {
                Ok(d) if d <= 9 => Ok(Self::Digit(d)),
                _ => Err(()),
            };
        }
        match s {
            "Space" => Ok(Self::Space),
            "Enter" => Ok(Self::Enter),
            "Escape" => Ok(Self::Escape),
            _ => Err(()),
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "Key{}", c.to_ascii_uppercase()),
            Self::Digit(d) => write!(f, "Digit{d}"),
            Self::Space => write!(f, "Space"),
            Self::Enter => write!(f, "Enter"),
            Self::Escape => write!(f, "Escape"),
        }
    }
}

/// A single key transition reported by the host.
#[derive(Clone, Copy, Debug)]
pub struct InputEdge {
    pub key: KeyId,
    pub pressed: bool,
}

/// Queued edges plus live key state.
///
/// Edges are queued as they arrive and drained inside the frame tick, so
/// expiry advancement and input handling mutate track state strictly
/// sequentially within one frame.
#[derive(Debug, Default)]
pub struct InputState {
    queue: VecDeque<InputEdge>,
    down: HashSet<KeyId>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_edge(&mut self, edge: InputEdge) {
        self.queue.push_back(edge);
    }

    /// Pops the next queued edge and applies it to the live key state.
    pub fn next_edge(&mut self) -> Option<InputEdge> {
        let edge = self.queue.pop_front()?;
        if edge.pressed {
            self.down.insert(edge.key);
        } else {
            self.down.remove(&edge.key);
        }
        Some(edge)
    }

    #[inline(always)]
    pub fn is_down(&self, key: KeyId) -> bool {
        self.down.contains(&key)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.down.clear();
    }
}
