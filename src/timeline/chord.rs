// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Recognized chord value object.

use serde::{Deserialize, Serialize};

/// A chord label anchored to a time offset within a track.
///
/// The offset marks where the chord starts; it ends where the next chord in
/// the timeline begins (or at track end for the last chord). Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedChord {
    /// Chord label, e.g. "C" or "F#m". Free-form, no enforced vocabulary.
    pub name: String,
    /// Seconds from track start. Non-negative.
    pub time_offset: f64,
    /// Recognition confidence in [0, 1]. Advisory only.
    pub confidence: f64,
}

impl RecognizedChord {
    /// Create a new recognized chord
    pub fn new(name: impl Into<String>, time_offset: f64, confidence: f64) -> Self {
        Self {
            name: name.into(),
            time_offset,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_creation() {
        let chord = RecognizedChord::new("F#m", 12.5, 0.85);
        assert_eq!(chord.name, "F#m");
        assert_eq!(chord.time_offset, 12.5);
        assert_eq!(chord.confidence, 0.85);
    }

    #[test]
    fn test_chord_json_shape() {
        // Same field names the recognition service responds with.
        let json = r#"{"name": "Am", "time_offset": 4.0, "confidence": 1.0}"#;
        let chord: RecognizedChord = serde_json::from_str(json).unwrap();
        assert_eq!(chord.name, "Am");
        assert_eq!(chord.time_offset, 4.0);
    }
}
