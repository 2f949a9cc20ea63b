// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track library orchestration.
//!
//! Ties the pieces together: repository, document store, recognizer client
//! and event bus. Every flow here mirrors a user action: finish a
//! recording, run recognition, edit metadata, delete a recording, open
//! playback.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::documents::DocumentStore;
use crate::events::{EventBus, TrackEvent};
use crate::playback::PlaybackSession;
use crate::recognizer::{recognize_with_deadline, RecognizerClient};
use crate::repository::TrackRepository;
use crate::timeline::ChordTimeline;
use crate::track::{Track, TrackId};

/// Default upper bound on one recognition round trip
const DEFAULT_RECOGNITION_DEADLINE: Duration = Duration::from_secs(60);

/// The application core's facade over the track library
pub struct TrackLibrary {
    repository: Box<dyn TrackRepository>,
    documents: Box<dyn DocumentStore>,
    recognizer: Arc<dyn RecognizerClient + Send + Sync>,
    events: EventBus,
    recognition_deadline: Duration,
}

impl TrackLibrary {
    /// Assemble a library from its collaborators
    pub fn new(
        repository: Box<dyn TrackRepository>,
        documents: Box<dyn DocumentStore>,
        recognizer: Arc<dyn RecognizerClient + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            documents,
            recognizer,
            events: EventBus::new(),
            recognition_deadline: DEFAULT_RECOGNITION_DEADLINE,
        }
    }

    /// Override the recognition deadline
    pub fn with_recognition_deadline(mut self, deadline: Duration) -> Self {
        self.recognition_deadline = deadline;
        self
    }

    /// The bus list and playback views subscribe to
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// All tracks, newest first
    pub fn tracks(&self) -> Vec<Track> {
        self.repository.all_tracks_ordered_by_creation_date_descending()
    }

    /// One track by id
    pub fn track(&self, id: TrackId) -> Option<Track> {
        self.repository.track(id)
    }

    /// Register a finished recording as a new track.
    ///
    /// Assigns a fresh document file name and stores the measured duration;
    /// the caller has already written the audio to
    /// [`DocumentStore::document_path`] for that name.
    pub fn create_track_for_recording(&mut self, duration_seconds: f64) -> Result<Track> {
        let id = self.repository.add_new_track();
        let mut track = self
            .repository
            .track(id)
            .context("freshly added track vanished")?;

        track.filename = Some(self.documents.file_name_for_new_track());
        track.duration_seconds = duration_seconds;
        self.repository.update_track(track.clone())?;
        self.repository.save()?;

        info!(track = id, "track created");
        self.events.publish(TrackEvent::Created(id));
        Ok(track)
    }

    /// Run chord recognition for a track and persist the results.
    ///
    /// Previously recognized chords are replaced. Returns the number of
    /// chords stored.
    pub fn recognize_track(&mut self, id: TrackId) -> Result<usize> {
        let track = self
            .repository
            .track(id)
            .with_context(|| format!("no track with id {}", id))?;

        let response =
            recognize_with_deadline(self.recognizer.clone(), &track, self.recognition_deadline)
                .context("chord recognition failed")?;

        self.repository.clear_chords(id)?;
        for chord in &response.chords {
            self.repository.add_new_chord(id, chord.clone().into())?;
        }
        self.repository.save()?;

        info!(track = id, chords = response.chords.len(), "chords stored");
        self.events.publish(TrackEvent::Updated(id));
        Ok(response.chords.len())
    }

    /// Update a track's user-editable metadata
    pub fn update_metadata(
        &mut self,
        id: TrackId,
        title: &str,
        artist: &str,
        comments: &str,
    ) -> Result<()> {
        let mut track = self
            .repository
            .track(id)
            .with_context(|| format!("no track with id {}", id))?;

        track.title = title.to_string();
        track.artist = artist.to_string();
        track.comments = comments.to_string();
        self.repository.update_track(track)?;
        self.repository.save()?;

        self.events.publish(TrackEvent::Updated(id));
        Ok(())
    }

    /// Delete a track and its audio document.
    ///
    /// The document goes first: if it cannot be removed, the record stays in
    /// the library so the two never diverge.
    pub fn delete_track(&mut self, id: TrackId) -> Result<()> {
        let track = self
            .repository
            .track(id)
            .with_context(|| format!("no track with id {}", id))?;
        self.documents.delete_document(&track)?;
        self.repository.delete_track(id)?;
        self.repository.save()?;

        info!(track = id, "track deleted");
        self.events.publish(TrackEvent::Deleted(id));
        Ok(())
    }

    /// A fresh chord timeline for a track
    pub fn timeline(&self, id: TrackId) -> Result<ChordTimeline> {
        let chords = self.repository.all_chords_ordered_by_time_offset(id)?;
        Ok(ChordTimeline::new(
            chords.iter().map(|c| c.to_recognized()).collect(),
        ))
    }

    /// Open a playback session for a track
    pub fn playback_session(&self, id: TrackId) -> Result<PlaybackSession> {
        let track = self
            .repository
            .track(id)
            .with_context(|| format!("no track with id {}", id))?;
        Ok(PlaybackSession::new(
            self.timeline(id)?,
            track.duration_seconds,
        ))
    }
}
