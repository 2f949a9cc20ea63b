// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playback session.
//!
//! Maps the audio player's position callbacks and the user's seek gestures to
//! chord highlight transitions and waveform geometry. Owns no audio: the UI
//! collaborator drives the player and feeds positions in.

use crate::timeline::{active_chord_transition, ChordTimeline, ChordTransition};

use super::position::{clamp_seek_target, format_for_player, SEEK_JUMP_SECONDS};
use super::waveform::{compute_split, WaveformSplit};

/// Offset added when seeking to a chord so the player lands inside the
/// chord's interval rather than exactly on its boundary.
const CHORD_SEEK_NUDGE: f64 = 0.1;

/// Playback state for one track.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    timeline: ChordTimeline,
    duration: f64,
    position: f64,
}

impl PlaybackSession {
    /// Create a session at position 0 for a track of `duration` seconds
    pub fn new(timeline: ChordTimeline, duration: f64) -> Self {
        Self {
            timeline,
            duration,
            position: 0.0,
        }
    }

    /// Current playback position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Track duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The chord timeline driving highlights
    pub fn timeline(&self) -> &ChordTimeline {
        &self.timeline
    }

    /// Replace the timeline after the track's chords were re-recognized.
    ///
    /// Keeps the current position; the next update decides the highlight.
    pub fn set_timeline(&mut self, timeline: ChordTimeline) {
        self.timeline = timeline;
    }

    /// Seek to an absolute position, clamped into the playable range.
    ///
    /// The highlight moves from the chord under the old position to the chord
    /// under the target, in either direction.
    pub fn seek_to(&mut self, seconds: f64) -> ChordTransition {
        let target = clamp_seek_target(seconds, self.duration);

        let new_index = self.timeline.index_of_chord_at(target);
        let previous_index = self.timeline.index_of_chord_at(self.position);
        let transition =
            active_chord_transition(new_index, previous_index, self.timeline.len());

        self.position = target;
        transition
    }

    /// Seek relative to the current position
    pub fn seek_by(&mut self, delta_seconds: f64) -> ChordTransition {
        self.seek_to(self.position + delta_seconds)
    }

    /// Rewind by the standard jump (10 s)
    pub fn rewind(&mut self) -> ChordTransition {
        self.seek_by(-SEEK_JUMP_SECONDS)
    }

    /// Fast-forward by the standard jump (10 s)
    pub fn fast_forward(&mut self) -> ChordTransition {
        self.seek_by(SEEK_JUMP_SECONDS)
    }

    /// Seek to a fraction of the track (tap on the waveform at `ratio` of
    /// its width)
    pub fn seek_to_ratio(&mut self, ratio: f64) -> ChordTransition {
        self.seek_to(self.duration * ratio)
    }

    /// Seek to the start of a chord, nudged slightly past its boundary
    pub fn seek_to_chord(&mut self, index: usize) -> ChordTransition {
        match self.timeline.chord(index) {
            Some(chord) => self.seek_to(chord.time_offset + CHORD_SEEK_NUDGE),
            None => ChordTransition::None,
        }
    }

    /// Process a position callback from the audio player.
    ///
    /// The previous index is inferred rather than remembered: the chord just
    /// before the new one, wrapping to the last chord when the new index is 0.
    /// The same transition therefore re-fires on every callback while the
    /// play head stays inside one chord; applying a highlight is idempotent,
    /// and callers that want each transition once feed the result through an
    /// [`crate::timeline::ActiveChordTracker`].
    pub fn update_position(&mut self, seconds: f64) -> ChordTransition {
        self.position = seconds;

        let chord_count = self.timeline.len();
        let new_index = self.timeline.index_of_chord_at(seconds);
        let previous_index = if new_index > 0 {
            new_index - 1
        } else {
            chord_count.saturating_sub(1)
        };
        active_chord_transition(new_index, previous_index, chord_count)
    }

    /// The player reached the end of the track.
    ///
    /// Rewinds to the start and moves the highlight from the final chord back
    /// to chord 0.
    pub fn handle_track_end(&mut self) -> ChordTransition {
        let previous_index = self.timeline.index_of_chord_at(self.duration);
        self.position = 0.0;
        active_chord_transition(0, previous_index, self.timeline.len())
    }

    /// Waveform played/remaining masks for the current position.
    ///
    /// Returns `None` until the track has a positive duration.
    pub fn waveform_split(&self, total_width: f64, height: f64) -> Option<WaveformSplit> {
        if self.duration <= 0.0 {
            return None;
        }
        Some(compute_split(self.position, self.duration, total_width, height))
    }

    /// Current position formatted for the time indicator label
    pub fn position_display(&self) -> String {
        format_for_player(self.position)
    }
}

/// Frame-count gate for player position callbacks.
///
/// Audio players report positions far more often than a UI can usefully
/// redraw. The throttle admits an update only when the frame index has moved
/// at least `threshold` frames since the last admitted one.
#[derive(Debug, Clone)]
pub struct UpdateThrottle {
    threshold: i64,
    last_admitted_frame: i64,
}

impl UpdateThrottle {
    /// Default frame distance between admitted updates
    pub const DEFAULT_THRESHOLD: i64 = 3000;

    /// Create a throttle with the given frame threshold
    pub fn new(threshold: i64) -> Self {
        Self {
            threshold,
            last_admitted_frame: 0,
        }
    }

    /// Whether an update at `frame_index` should go through
    pub fn should_update(&mut self, frame_index: i64) -> bool {
        if (frame_index - self.last_admitted_frame).abs() < self.threshold {
            return false;
        }
        self.last_admitted_frame = frame_index;
        true
    }
}

impl Default for UpdateThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
