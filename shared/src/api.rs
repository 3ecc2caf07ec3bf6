//! Wire contract of the processing service.

use crate::error::SubmitError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROCESS_ENDPOINT: &str = "/api/process";
pub const RESULTS_PREFIX: &str = "/api/results";

pub const FIELD_FILE: &str = "file";
pub const FIELD_MODEL: &str = "model";
pub const FIELD_CONFIDENCE: &str = "confidence";
pub const FIELD_DISPLAY_MODE: &str = "displayMode";

/// Filename attached to bytes fetched from a sample or a pasted URL.
pub const FETCHED_FILENAME: &str = "image.jpg";

const FILE_ID_KEY: &str = "fileId";

/// Reference to the annotated output of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub file_id: String,
    pub result_url: String,
}

impl ProcessingResult {
    pub fn new(file_id: impl Into<String>, results_prefix: &str) -> Self {
        let file_id = file_id.into();
        let result_url = format!("{}/{}", results_prefix.trim_end_matches('/'), file_id);
        Self { file_id, result_url }
    }
}

/// Pulls `fileId` out of a successful response body.
///
/// A body that is not JSON at all is `Unknown`; JSON of any shape other than
/// an object with a non-empty string `fileId` is `MalformedResponse`.
pub fn parse_file_id(body: &[u8]) -> Result<String, SubmitError> {
    let response: Value = serde_json::from_slice(body)
        .map_err(|e| SubmitError::Unknown(format!("Failed to parse response: {}", e)))?;

    match response.as_object().and_then(|obj| obj.get(FILE_ID_KEY)) {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        _ => Err(SubmitError::MalformedResponse {
            missing: FILE_ID_KEY,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_url_joins_prefix_and_id() {
        let result = ProcessingResult::new("abc123", RESULTS_PREFIX);
        assert_eq!(result.result_url, "/api/results/abc123");

        let result = ProcessingResult::new("abc123", "https://gpu.example.com/results/");
        assert_eq!(result.result_url, "https://gpu.example.com/results/abc123");
    }

    #[test]
    fn file_id_is_required() {
        assert_eq!(parse_file_id(br#"{"fileId":"f-9"}"#).unwrap(), "f-9");
        assert_eq!(
            parse_file_id(b"{}"),
            Err(SubmitError::MalformedResponse { missing: "fileId" })
        );
        assert_eq!(
            parse_file_id(br#"{"fileId":42}"#),
            Err(SubmitError::MalformedResponse { missing: "fileId" })
        );
        assert_eq!(
            parse_file_id(br#"{"fileId":""}"#),
            Err(SubmitError::MalformedResponse { missing: "fileId" })
        );
    }

    #[test]
    fn non_json_bodies_are_parse_failures() {
        assert!(matches!(parse_file_id(b"<html>"), Err(SubmitError::Unknown(_))));
        assert!(matches!(parse_file_id(b""), Err(SubmitError::Unknown(_))));
    }

    #[test]
    fn json_that_is_not_an_object_is_malformed() {
        let malformed = Err(SubmitError::MalformedResponse { missing: "fileId" });
        assert_eq!(parse_file_id(br#"["abc123"]"#), malformed);
        assert_eq!(parse_file_id(b"[]"), malformed);
        assert_eq!(parse_file_id(b"null"), malformed);
        assert_eq!(parse_file_id(br#""abc123""#), malformed);
    }
}
