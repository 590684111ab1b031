//! Error types for question loading, configuration, and settings storage.
//!
//! Deck operations themselves never fail: these errors only surface from
//! I/O boundaries, and the deck's `load_*` entry points absorb them into the
//! terminal empty state.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced at the crate's I/O and configuration boundaries.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("question source {path:?} could not be read: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question source: {0}")]
    MalformedSource(#[from] serde_json::Error),

    #[error("invalid deck configuration: {0}")]
    InvalidConfig(String),

    #[error("settings file {path:?} could not be read: {source}")]
    SettingsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path:?} could not be written: {source}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {path:?}: {source}")]
    MalformedSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("background question load was interrupted")]
    LoadInterrupted,
}

impl DeckError {
    /// Whether this error came from reading or decoding the question source.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            DeckError::SourceUnreadable { .. } | DeckError::MalformedSource(_) | DeckError::LoadInterrupted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = DeckError::InvalidConfig("bonus probability 2 outside [0, 1]".to_string());
        assert_eq!(
            error.to_string(),
            "invalid deck configuration: bonus probability 2 outside [0, 1]"
        );
    }

    #[test]
    fn test_source_error_classification() {
        let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(DeckError::MalformedSource(malformed).is_source_error());
        assert!(DeckError::LoadInterrupted.is_source_error());
        assert!(!DeckError::InvalidConfig(String::new()).is_source_error());
    }
}
