// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track records.
//!
//! A track is one audio recording with metadata and the chords recognized in
//! it. Records are owned by the repository; the playback side only ever sees
//! an immutable [`crate::timeline::ChordTimeline`] built from them.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::timeline::{ChordTimeline, RecognizedChord};

/// Stable identifier assigned by the repository
pub type TrackId = u64;

/// Fallback title for tracks the user has not named yet
pub const UNTITLED_TRACK: &str = "Untitled";

/// Fallback artist label
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A chord as persisted on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredChord {
    /// Chord label, e.g. "C" or "F#m"
    pub name: String,
    /// Seconds from track start
    pub time_offset: f64,
    /// Recognition confidence in [0, 1]
    pub confidence: f64,
}

impl StoredChord {
    /// View this stored chord as a timeline value object
    pub fn to_recognized(&self) -> RecognizedChord {
        RecognizedChord::new(self.name.clone(), self.time_offset, self.confidence)
    }
}

impl From<RecognizedChord> for StoredChord {
    fn from(chord: RecognizedChord) -> Self {
        Self {
            name: chord.name,
            time_offset: chord.time_offset,
            confidence: chord.confidence,
        }
    }
}

/// One recording in the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Repository-assigned identifier
    pub id: TrackId,
    /// User-visible title (may be empty)
    #[serde(default)]
    pub title: String,
    /// Artist name (may be empty)
    #[serde(default)]
    pub artist: String,
    /// Free-form comments
    #[serde(default)]
    pub comments: String,
    /// When the recording was made
    pub created_at: SystemTime,
    /// Audio document file name inside the document store
    pub filename: Option<String>,
    /// Track length in seconds, captured when the recording finished
    pub duration_seconds: f64,
    /// Recognized chords, unordered as stored
    #[serde(default)]
    pub chords: Vec<StoredChord>,
}

impl Track {
    /// Create an empty track record
    pub fn new(id: TrackId) -> Self {
        Self {
            id,
            title: String::new(),
            artist: String::new(),
            comments: String::new(),
            created_at: SystemTime::now(),
            filename: None,
            duration_seconds: 0.0,
            chords: Vec::new(),
        }
    }

    /// Title with the untitled fallback applied
    pub fn display_title(&self) -> &str {
        non_empty_or(&self.title, UNTITLED_TRACK)
    }

    /// Artist with the unknown-artist fallback applied
    pub fn display_artist(&self) -> &str {
        non_empty_or(&self.artist, UNKNOWN_ARTIST)
    }

    /// Chords ordered ascending by time offset.
    ///
    /// Ties keep storage order; the sort key is not required to be strictly
    /// increasing.
    pub fn chords_ordered_by_time_offset(&self) -> Vec<StoredChord> {
        let mut chords = self.chords.clone();
        chords.sort_by(|a, b| a.time_offset.total_cmp(&b.time_offset));
        chords
    }

    /// Build a fresh playback timeline from this track's chords
    pub fn timeline(&self) -> ChordTimeline {
        ChordTimeline::new(self.chords.iter().map(StoredChord::to_recognized).collect())
    }
}

/// The string itself unless it is empty, else the alternative
pub fn non_empty_or<'a>(value: &'a str, alternative: &'a str) -> &'a str {
    if value.is_empty() {
        alternative
    } else {
        value
    }
}
