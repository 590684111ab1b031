//! Decoding the bundled question resource.
//!
//! The resource is a JSON object holding an ordered list of prompts:
//!
//! ```json
//! { "questions": ["Who would survive longest on a desert island?", "..."] }
//! ```
//!
//! Unknown fields are ignored. A missing `questions` field is malformed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// File name of the bundled question resource.
pub const DEFAULT_QUESTION_ASSET: &str = "questions.json";

/// Decoded question resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSource {
    pub questions: Vec<String>,
}

impl QuestionSource {
    /// Decode from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DeckError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and decode a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DeckError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_reader(BufReader::new(file))?;
        log::debug!("read {} questions from {:?}", source.questions.len(), path);
        Ok(source)
    }

    /// Take the prompts in file order.
    #[must_use]
    pub fn into_questions(self) -> Vec<String> {
        self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_in_order() {
        let source = QuestionSource::from_json_str(r#"{"questions": ["a", "b", "c"]}"#).unwrap();
        assert_eq!(source.into_questions(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let source =
            QuestionSource::from_json_str(r#"{"version": 2, "questions": ["only"]}"#).unwrap();
        assert_eq!(source.questions, vec!["only"]);
    }

    #[test]
    fn test_missing_questions_is_malformed() {
        let err = QuestionSource::from_json_str(r#"{"prompts": []}"#).unwrap_err();
        assert!(matches!(err, DeckError::MalformedSource(_)));
    }

    #[test]
    fn test_wrong_element_type_is_malformed() {
        let err = QuestionSource::from_json_str(r#"{"questions": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, DeckError::MalformedSource(_)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuestionSource::from_path(dir.path().join(DEFAULT_QUESTION_ASSET)).unwrap_err();
        assert!(matches!(err, DeckError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_from_reader() {
        let bytes: &[u8] = br#"{"questions": []}"#;
        let source = QuestionSource::from_reader(bytes).unwrap();
        assert!(source.questions.is_empty());
    }
}
