// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Recognition service boundary.
//!
//! Chord recognition itself happens elsewhere (a remote service with the
//! actual signal-processing model). This module defines the client trait the
//! core calls through, the response shape, a deadline wrapper for the
//! blocking call, and a fake client for development.

pub mod fake;

pub use fake::FakeRecognizerClient;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RecognizerError;
use crate::timeline::RecognizedChord;
use crate::track::Track;

/// Chords recognized in one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeChordsResponse {
    /// Recognized chords; ordering is not guaranteed by the service
    pub chords: Vec<RecognizedChord>,
}

impl RecognizeChordsResponse {
    /// A response with no chords
    pub fn empty() -> Self {
        Self { chords: Vec::new() }
    }

    /// Decode the service's JSON payload (an array of chord objects)
    pub fn from_json(payload: &str) -> Result<Self, RecognizerError> {
        let chords: Vec<RecognizedChord> =
            serde_json::from_str(payload).map_err(RecognizerError::BadResponse)?;
        Ok(Self { chords })
    }
}

/// A client that can recognize the chords in a track's audio document.
///
/// The call is synchronous and may take as long as an upload plus model
/// inference; callers that care wrap it in [`recognize_with_deadline`].
pub trait RecognizerClient {
    /// Recognize chords for the given track
    fn recognize_chords(&self, track: &Track) -> Result<RecognizeChordsResponse, RecognizerError>;
}

/// Run a recognition call with an upper bound on waiting time.
///
/// The call runs on a worker thread; if it does not respond within
/// `deadline` the caller gets [`RecognizerError::Timeout`] and the worker is
/// left to finish on its own (its late result is discarded).
pub fn recognize_with_deadline(
    client: Arc<dyn RecognizerClient + Send + Sync>,
    track: &Track,
    deadline: Duration,
) -> Result<RecognizeChordsResponse, RecognizerError> {
    let (sender, receiver) = bounded(1);
    let track = track.clone();

    thread::spawn(move || {
        let result = client.recognize_chords(&track);
        // The receiver may be gone after a timeout.
        let _ = sender.send(result);
    });

    match receiver.recv_timeout(deadline) {
        Ok(result) => {
            debug!("recognition completed within deadline");
            result
        }
        Err(RecvTimeoutError::Timeout) => {
            warn!(?deadline, "recognition timed out");
            Err(RecognizerError::Timeout(deadline))
        }
        Err(RecvTimeoutError::Disconnected) => Err(RecognizerError::WorkerLost),
    }
}
