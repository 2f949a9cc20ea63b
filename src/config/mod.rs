// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Application configuration.
//!
//! Loaded from a TOML file; every field has a sensible default so an empty
//! file (or no file at all) yields a working setup with the fake recognizer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which recognizer client to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    /// The random-chord development stub
    Fake,
    /// The remote recognition service (configured elsewhere; the HTTP
    /// client is not part of this core)
    Remote,
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Directory holding the audio documents
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,
    /// Path of the JSON track library file
    #[serde(default = "default_library_path")]
    pub library_path: PathBuf,
    /// Recognizer client to use
    #[serde(default = "default_recognizer")]
    pub recognizer: RecognizerKind,
    /// Seconds per chord window for the fake recognizer
    #[serde(default = "default_chord_interval")]
    pub fake_chord_interval_seconds: u64,
    /// Upper bound on one recognition round trip
    #[serde(default = "default_recognition_timeout")]
    pub recognition_timeout_seconds: u64,
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("documents")
}
fn default_library_path() -> PathBuf {
    PathBuf::from("library.json")
}
fn default_recognizer() -> RecognizerKind {
    RecognizerKind::Fake
}
fn default_chord_interval() -> u64 {
    4
}
fn default_recognition_timeout() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            library_path: default_library_path(),
            recognizer: default_recognizer(),
            fake_chord_interval_seconds: default_chord_interval(),
            recognition_timeout_seconds: default_recognition_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("Failed to parse TOML configuration")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml = self.to_toml()?;
        fs::write(path.as_ref(), toml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}
