// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord timeline for playback synchronization.
//!
//! This module provides:
//! - The recognized-chord value object
//! - Position-to-chord lookup over a time-ordered chord sequence
//! - The active-chord transition decision used for highlight updates

pub mod chord;
pub mod lookup;
pub mod transition;

pub use chord::RecognizedChord;
pub use lookup::ChordTimeline;
pub use transition::{active_chord_transition, ActiveChordTracker, ChordTransition};
