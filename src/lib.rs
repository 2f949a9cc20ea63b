// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! DECHORD - Chord recognition recording core.
//!
//! The application core of a guitar-recording app: a track library with
//! recognized chords, a chord timeline synchronized to playback position,
//! waveform split geometry, document storage, and the boundary to a
//! chord-recognition service.
//!
//! The actual recognition algorithm lives behind [`recognizer::RecognizerClient`];
//! this crate only orchestrates record -> store -> recognize -> play back.

pub mod config;
pub mod documents;
pub mod error;
pub mod events;
pub mod library;
pub mod playback;
pub mod recognizer;
pub mod repository;
pub mod timeline;
pub mod track;

pub use error::{DocumentError, RecognizerError, RepositoryError};
pub use events::{EventBus, TrackEvent};
pub use library::TrackLibrary;
pub use timeline::{ChordTimeline, ChordTransition, RecognizedChord};
pub use track::{StoredChord, Track, TrackId};
