// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track repository.
//!
//! CRUD over the track library behind a trait, so the orchestration layer and
//! tests do not care where records live. The provided implementation keeps
//! the library in memory and persists it as a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RepositoryError;
use crate::track::{StoredChord, Track, TrackId};

/// Storage interface for tracks and their chords
pub trait TrackRepository {
    /// All tracks, newest first
    fn all_tracks_ordered_by_creation_date_descending(&self) -> Vec<Track>;

    /// A single track by id
    fn track(&self, id: TrackId) -> Option<Track>;

    /// Chords of a track, ascending by time offset
    fn all_chords_ordered_by_time_offset(
        &self,
        id: TrackId,
    ) -> Result<Vec<StoredChord>, RepositoryError>;

    /// Insert a new empty track and return its id
    fn add_new_track(&mut self) -> TrackId;

    /// Replace a track record wholesale
    fn update_track(&mut self, track: Track) -> Result<(), RepositoryError>;

    /// Remove a track, returning the removed record
    fn delete_track(&mut self, id: TrackId) -> Result<Track, RepositoryError>;

    /// Append one chord to a track
    fn add_new_chord(&mut self, id: TrackId, chord: StoredChord) -> Result<(), RepositoryError>;

    /// Drop all chords of a track (before re-recognition)
    fn clear_chords(&mut self, id: TrackId) -> Result<(), RepositoryError>;

    /// Flush pending changes to storage
    fn save(&mut self) -> Result<(), RepositoryError>;
}

/// On-disk shape of the library file
#[derive(Debug, Serialize, Deserialize, Default)]
struct LibraryFile {
    next_id: TrackId,
    tracks: Vec<Track>,
}

/// JSON-file-backed track repository.
///
/// Without a path it behaves as a plain in-memory store, which is what the
/// tests use.
#[derive(Debug, Default)]
pub struct JsonTrackRepository {
    path: Option<PathBuf>,
    next_id: TrackId,
    tracks: Vec<Track>,
    dirty: bool,
}

impl JsonTrackRepository {
    /// Create an in-memory repository with no backing file
    pub fn in_memory() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Open a repository backed by the given library file.
    ///
    /// A missing file yields an empty library; it will be created on the
    /// first save.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            info!(path = %path.display(), "library file not found, starting empty");
            return Ok(Self {
                path: Some(path),
                next_id: 1,
                ..Default::default()
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| RepositoryError::Io {
            path: path.clone(),
            source,
        })?;
        let file: LibraryFile =
            serde_json::from_str(&contents).map_err(|source| RepositoryError::Format {
                path: path.clone(),
                source,
            })?;

        debug!(tracks = file.tracks.len(), "library loaded");
        Ok(Self {
            path: Some(path),
            next_id: file.next_id.max(1),
            tracks: file.tracks,
            dirty: false,
        })
    }

    fn find(&self, id: TrackId) -> Result<&Track, RepositoryError> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::TrackNotFound(id))
    }

    fn find_mut(&mut self, id: TrackId) -> Result<&mut Track, RepositoryError> {
        self.tracks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::TrackNotFound(id))
    }
}

impl TrackRepository for JsonTrackRepository {
    fn all_tracks_ordered_by_creation_date_descending(&self) -> Vec<Track> {
        let mut tracks = self.tracks.clone();
        tracks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracks
    }

    fn track(&self, id: TrackId) -> Option<Track> {
        self.find(id).ok().cloned()
    }

    fn all_chords_ordered_by_time_offset(
        &self,
        id: TrackId,
    ) -> Result<Vec<StoredChord>, RepositoryError> {
        Ok(self.find(id)?.chords_ordered_by_time_offset())
    }

    fn add_new_track(&mut self) -> TrackId {
        let id = self.next_id;
        self.next_id += 1;
        self.tracks.push(Track::new(id));
        self.dirty = true;
        id
    }

    fn update_track(&mut self, track: Track) -> Result<(), RepositoryError> {
        let record = self.find_mut(track.id)?;
        *record = track;
        self.dirty = true;
        Ok(())
    }

    fn delete_track(&mut self, id: TrackId) -> Result<Track, RepositoryError> {
        let index = self
            .tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(RepositoryError::TrackNotFound(id))?;
        self.dirty = true;
        Ok(self.tracks.remove(index))
    }

    fn add_new_chord(&mut self, id: TrackId, chord: StoredChord) -> Result<(), RepositoryError> {
        self.find_mut(id)?.chords.push(chord);
        self.dirty = true;
        Ok(())
    }

    fn clear_chords(&mut self, id: TrackId) -> Result<(), RepositoryError> {
        self.find_mut(id)?.chords.clear();
        self.dirty = true;
        Ok(())
    }

    fn save(&mut self) -> Result<(), RepositoryError> {
        if !self.dirty {
            return Ok(());
        }
        let Some(path) = self.path.clone() else {
            // In-memory store: nothing to flush, but the changes are "saved".
            self.dirty = false;
            return Ok(());
        };

        let file = LibraryFile {
            next_id: self.next_id,
            tracks: self.tracks.clone(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|source| RepositoryError::Format {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, json).map_err(|source| RepositoryError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), tracks = self.tracks.len(), "library saved");
        self.dirty = false;
        Ok(())
    }
}
