// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playback synchronization.
//!
//! This module provides:
//! - Seek-target clamping and player-style time formatting
//! - Waveform played/remaining split geometry
//! - A playback session that maps positions to chord highlight transitions

pub mod position;
pub mod session;
pub mod waveform;

pub use position::{clamp_seek_target, format_for_player, END_SEEK_BACKOFF, SEEK_JUMP_SECONDS};
pub use session::{PlaybackSession, UpdateThrottle};
pub use waveform::{compute_split, Rect, WaveformSplit};
