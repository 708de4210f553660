//! Hand-history file import.
//!
//! The hand-history grammar itself is an external collaborator behind the
//! [`HandParser`] trait: a pure function from file text to an ordered
//! sequence of [`HandHistory`] records. The bundled [`JsonHandParser`]
//! deserializes a JSON array of hand records; tests substitute their own
//! implementations through the same seam.

use std::fs;
use std::path::Path;

use crate::error::{HandbaseError, Result};
use crate::store::HandHistory;

/// Parses raw file text into an ordered sequence of hand records.
///
/// Implementations must be pure: same text, same records, in file order.
pub trait HandParser {
    /// Parse the full text of a hand-history file.
    fn parse(&self, text: &str) -> anyhow::Result<Vec<HandHistory>>;
}

/// Bundled parser for the JSON hand-file format: a top-level array of
/// hand records.
pub struct JsonHandParser;

impl HandParser for JsonHandParser {
    fn parse(&self, text: &str) -> anyhow::Result<Vec<HandHistory>> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Read a hand-history file and parse it into hand records.
///
/// Both read and parse failures surface as [`HandbaseError::Import`] with
/// the underlying message verbatim.
pub fn import_hands(path: &Path, parser: &dyn HandParser) -> Result<Vec<HandHistory>> {
    let text = fs::read_to_string(path).map_err(|e| HandbaseError::Import {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parser.parse(&text).map_err(|e| HandbaseError::Import {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HANDS_JSON: &str = r#"[
        {"hand_id": 1, "players": [
            {"seat_number": 1, "nickname": "alice", "stack_size": 100.0,
             "currency": "Dollar", "dealt_cards": ["Ah", "Kd"]}
        ]},
        {"hand_id": 2, "players": [
            {"seat_number": 1, "nickname": "bob", "stack_size": 75.5}
        ]}
    ]"#;

    #[test]
    fn json_parser_preserves_file_order() {
        let hands = JsonHandParser.parse(HANDS_JSON).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].hand_id, 1);
        assert_eq!(hands[1].hand_id, 2);
    }

    #[test]
    fn json_parser_rejects_malformed_text() {
        assert!(JsonHandParser.parse("not json").is_err());
    }

    #[test]
    fn import_reads_and_parses_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(HANDS_JSON.as_bytes()).unwrap();
        let hands = import_hands(file.path(), &JsonHandParser).unwrap();
        assert_eq!(hands.len(), 2);
    }

    #[test]
    fn missing_file_surfaces_as_import_error() {
        let err = import_hands(Path::new("/nonexistent/hands.json"), &JsonHandParser)
            .unwrap_err();
        assert!(matches!(err, HandbaseError::Import { .. }));
    }

    #[test]
    fn parse_failure_surfaces_as_import_error_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{{ broken").unwrap();
        let err = import_hands(file.path(), &JsonHandParser).unwrap_err();
        match err {
            HandbaseError::Import { path, .. } => assert_eq!(path, file.path()),
            other => panic!("expected Import error, got {:?}", other),
        }
    }
}
