//! Text tracks attached to media elements

use std::fmt;

/// Display state of a text track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackMode {
    /// Not loaded, no cues fire
    #[default]
    Disabled,
    /// Loaded and firing cues, but not rendered
    Hidden,
    /// Rendered over the media
    Showing,
}

impl fmt::Display for TrackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Hidden => write!(f, "hidden"),
            Self::Showing => write!(f, "showing"),
        }
    }
}

/// A timed caption/subtitle stream attached to a media element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTrack {
    /// Track kind (`captions`, `subtitles`, ...)
    pub kind: String,
    /// Human readable label shown in the caption picker
    pub label: String,
    /// BCP 47 language tag
    pub language: String,
    /// Current display state
    pub mode: TrackMode,
}

impl TextTrack {
    /// Create a disabled captions track
    #[must_use]
    pub fn captions(label: &str, language: &str) -> Self {
        Self {
            kind: "captions".to_string(),
            label: label.to_string(),
            language: language.to_string(),
            mode: TrackMode::Disabled,
        }
    }

    /// Whether the track is currently rendered
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.mode == TrackMode::Showing
    }
}
