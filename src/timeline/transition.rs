// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Active-chord transition decision.
//!
//! The playback UI highlights the chord currently under the play head. This
//! module decides *whether* a highlight change should happen; the actual
//! rendering (dim the old cell, light the new one, scroll it into view)
//! belongs to the UI collaborator.

/// Outcome of an active-chord check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordTransition {
    /// Nothing to do: the highlight stays where it is
    None,
    /// Deactivate one chord and activate another
    Activate {
        /// Index losing the highlight
        deactivate: usize,
        /// Index gaining the highlight
        activate: usize,
    },
}

impl ChordTransition {
    /// Whether this is a no-op
    pub fn is_none(&self) -> bool {
        matches!(self, ChordTransition::None)
    }
}

/// Decide whether the highlight should move from `previous_index` to
/// `new_index` in a timeline of `chord_count` chords.
///
/// No transition occurs when the index is unchanged or when `new_index` is
/// out of range. Pure function; `previous_index` is not range-checked because
/// deactivating a missing cell is harmless.
pub fn active_chord_transition(
    new_index: usize,
    previous_index: usize,
    chord_count: usize,
) -> ChordTransition {
    if new_index == previous_index || new_index >= chord_count {
        return ChordTransition::None;
    }
    ChordTransition::Activate {
        deactivate: previous_index,
        activate: new_index,
    }
}

/// Tracks the currently highlighted chord across successive position updates.
///
/// Thin stateful wrapper over [`active_chord_transition`] so callers do not
/// have to remember the previous index themselves.
#[derive(Debug, Clone, Default)]
pub struct ActiveChordTracker {
    active_index: usize,
}

impl ActiveChordTracker {
    /// Create a tracker with chord 0 active
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted index
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Propose a new active index; records it if a transition fires.
    pub fn advance_to(&mut self, new_index: usize, chord_count: usize) -> ChordTransition {
        let transition = active_chord_transition(new_index, self.active_index, chord_count);
        if let ChordTransition::Activate { activate, .. } = transition {
            self.active_index = activate;
        }
        transition
    }

    /// Reset the highlight to chord 0 (track restarted)
    pub fn reset(&mut self) {
        self.active_index = 0;
    }
}
