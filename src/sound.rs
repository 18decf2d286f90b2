use serde::{Serialize, Deserialize};

/// Sound cue a menu can ask the host to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect {
    /// Sound event key, e.g. "item.book.page_turn"
    pub key: String,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundEffect {
    pub fn new(key: impl Into<String>, volume: f32, pitch: f32) -> Self {
        Self {
            key: key.into(),
            volume,
            pitch,
        }
    }

    /// Cue played when a guide menu opens
    pub fn page_turn() -> Self {
        Self::new("item.book.page_turn", 1.0, 1.0)
    }
}
