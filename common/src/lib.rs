//! Shared domain for the code comparator request form.
//!
//! Both the Yew frontend and the actix backend depend on this crate, so the
//! rules for what makes a submission valid and how it is rendered live in one
//! place:
//!
//! - [`model`]: the `SubmissionRequest` assembled from the form and the
//!   `GeneratedDocument` produced from it.
//! - [`validation`]: required-field and organization checks.
//! - [`render`]: the HTML summary of a submission.
//! - [`manifest`]: extraction of extension pack names from an uploaded JSON manifest.
//! - [`requests`]: JSON payloads exchanged between frontend and backend.

pub mod error;
pub mod manifest;
pub mod model;
pub mod render;
pub mod requests;
pub mod validation;

use error::ValidationError;
use model::document::GeneratedDocument;
use model::submission::SubmissionRequest;

/// Validates a submission and renders it.
///
/// Nothing is rendered for an invalid request; the caller only ever gets a
/// document for a submission that passed every check.
pub fn process(request: &SubmissionRequest) -> Result<GeneratedDocument, ValidationError> {
    validation::validate(request)?;
    Ok(render::render(request))
}
