// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Audio document storage.
//!
//! Recordings live as files in a documents directory; track records only
//! hold the file name. The store hands out paths and disposes of documents
//! when their track is deleted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::error::DocumentError;
use crate::track::Track;

/// File name extension for new recordings
const RECORDING_EXTENSION: &str = "wav";

/// Storage interface for the audio documents behind tracks
pub trait DocumentStore {
    /// Unique file name for a recording that is about to start
    fn file_name_for_new_track(&self) -> String;

    /// Absolute path of a stored document
    fn document_path(&self, file_name: &str) -> PathBuf;

    /// Delete the document behind a track.
    ///
    /// A document that is already missing is tolerated; any other failure
    /// propagates.
    fn delete_document(&self, track: &Track) -> Result<(), DocumentError>;
}

/// Document store rooted at a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSystemDocumentStore {
    root: PathBuf,
}

impl FileSystemDocumentStore {
    /// Create a store rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The documents directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for FileSystemDocumentStore {
    fn file_name_for_new_track(&self) -> String {
        let timestamp_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        format!("recording-{}.{}", timestamp_millis, RECORDING_EXTENSION)
    }

    fn document_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn delete_document(&self, track: &Track) -> Result<(), DocumentError> {
        let Some(file_name) = track.filename.as_deref() else {
            // Nothing was ever recorded for this track.
            return Ok(());
        };
        let path = self.document_path(file_name);

        if !path.exists() {
            warn!(file_name, "document already missing, tolerating");
            return Ok(());
        }

        fs::remove_file(&path).map_err(|source| DocumentError::Io {
            file_name: file_name.to_string(),
            source,
        })
    }
}
