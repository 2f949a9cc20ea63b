// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for DECHORD.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::track::TrackId;

/// Errors raised by the track repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced track does not exist in the store
    #[error("no track with id {0}")]
    TrackNotFound(TrackId),

    /// Reading or writing the library file failed
    #[error("library file I/O failed: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The library file could not be parsed or serialized
    #[error("library file is not valid JSON: {path}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the document store
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Deleting or inspecting a document failed
    #[error("cannot access document '{file_name}'")]
    Io {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised at the recognizer-client boundary
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// The track cannot be submitted (no audio document recorded yet)
    #[error("track {0} has no audio document to recognize")]
    NoDocument(TrackId),

    /// The client did not produce a response within the deadline
    #[error("recognition did not complete within {0:?}")]
    Timeout(Duration),

    /// The recognition worker disappeared without responding
    #[error("recognition worker terminated unexpectedly")]
    WorkerLost,

    /// The service responded but the payload could not be decoded
    #[error("unreadable recognition response")]
    BadResponse(#[source] serde_json::Error),
}
