//! JSON payloads exchanged between the form and the backend.
//!
//! The request side of `POST /api/compare` is
//! [`SubmissionRequest`](crate::model::submission::SubmissionRequest) itself.

use crate::model::document::GeneratedDocument;
use serde::{Deserialize, Serialize};

/// How the backend handed the document to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Publication {
    /// Written to `path` and opened in a new browser tab.
    Saved { path: String },
    /// Left to the form, which opens a tab and writes the document into it.
    Inline,
    /// A file or browser step failed; the failure was logged and nothing is confirmed.
    NotConfirmed,
}

/// Successful answer to `POST /api/compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub document: GeneratedDocument,
    pub publication: Publication,
}

/// Body of a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
