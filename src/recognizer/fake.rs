// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fake recognizer for development.
//!
//! Generates random chords at a fixed cadence so the rest of the app can be
//! exercised without the recognition service. This is a stub, not the real
//! algorithm.

use rand::Rng;
use tracing::info;

use crate::error::RecognizerError;
use crate::timeline::RecognizedChord;
use crate::track::Track;

use super::{RecognizeChordsResponse, RecognizerClient};

/// The 24 major and minor triads the stub draws from
const CHORD_NAMES: [&str; 24] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", //
    "Cm", "C#m", "Dm", "D#m", "Em", "Fm", "F#m", "Gm", "G#m", "Am", "A#m", "Bm",
];

/// Default width of the window each random chord lands in, in seconds
const DEFAULT_CHORD_INTERVAL: u64 = 4;

/// Development stand-in for the recognition service.
///
/// Emits one chord at offset 0, then one random chord inside every
/// `chord_interval`-second window across the track's duration, all with full
/// confidence.
#[derive(Debug, Clone)]
pub struct FakeRecognizerClient {
    chord_interval: u64,
}

impl FakeRecognizerClient {
    /// Create a stub with the default 4-second chord cadence
    pub fn new() -> Self {
        Self {
            chord_interval: DEFAULT_CHORD_INTERVAL,
        }
    }

    /// Override the chord cadence (seconds per window, minimum 1)
    pub fn with_chord_interval(mut self, seconds: u64) -> Self {
        self.chord_interval = seconds.max(1);
        self
    }

    fn random_chord_within(&self, begin: u64, end: u64) -> RecognizedChord {
        let mut rng = rand::thread_rng();
        let name = CHORD_NAMES[rng.gen_range(0..CHORD_NAMES.len())];
        let time_offset = rng.gen_range(begin..=end) as f64;
        RecognizedChord::new(name, time_offset, 1.0)
    }
}

impl Default for FakeRecognizerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognizerClient for FakeRecognizerClient {
    fn recognize_chords(&self, track: &Track) -> Result<RecognizeChordsResponse, RecognizerError> {
        if track.filename.is_none() {
            return Err(RecognizerError::NoDocument(track.id));
        }

        let duration = track.duration_seconds as u64;
        let mut chords = vec![self.random_chord_within(0, 0)];

        if duration > self.chord_interval {
            let mut begin = self.chord_interval;
            while begin < duration {
                chords.push(self.random_chord_within(begin, begin + self.chord_interval - 1));
                begin += self.chord_interval;
            }
        }

        info!(track = track.id, chords = chords.len(), "fake recognition done");
        Ok(RecognizeChordsResponse { chords })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with_duration(seconds: f64) -> Track {
        let mut track = Track::new(1);
        track.filename = Some("recording-1.wav".to_string());
        track.duration_seconds = seconds;
        track
    }

    #[test]
    fn test_requires_a_document() {
        let client = FakeRecognizerClient::new();
        let bare = Track::new(1);
        assert!(matches!(
            client.recognize_chords(&bare),
            Err(RecognizerError::NoDocument(1))
        ));
    }

    #[test]
    fn test_short_track_gets_exactly_one_chord() {
        let client = FakeRecognizerClient::new();
        let response = client.recognize_chords(&track_with_duration(3.0)).unwrap();
        assert_eq!(response.chords.len(), 1);
        assert_eq!(response.chords[0].time_offset, 0.0);
    }

    #[test]
    fn test_one_chord_per_window() {
        let client = FakeRecognizerClient::new();
        // 15 seconds at 4-second cadence: windows start at 0, 4, 8, 12.
        let response = client.recognize_chords(&track_with_duration(15.0)).unwrap();
        assert_eq!(response.chords.len(), 4);

        for (i, chord) in response.chords.iter().enumerate().skip(1) {
            let window_start = (i as u64 * 4) as f64;
            assert!(chord.time_offset >= window_start);
            assert!(chord.time_offset <= window_start + 3.0);
        }
    }

    #[test]
    fn test_chords_use_known_names_and_full_confidence() {
        let client = FakeRecognizerClient::new();
        let response = client.recognize_chords(&track_with_duration(60.0)).unwrap();
        for chord in &response.chords {
            assert!(CHORD_NAMES.contains(&chord.name.as_str()));
            assert_eq!(chord.confidence, 1.0);
        }
    }

    #[test]
    fn test_custom_interval() {
        let client = FakeRecognizerClient::new().with_chord_interval(10);
        let response = client.recognize_chords(&track_with_duration(25.0)).unwrap();
        // Windows start at 0, 10, 20.
        assert_eq!(response.chords.len(), 3);
    }
}
