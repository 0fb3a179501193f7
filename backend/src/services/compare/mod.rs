//! # Compare Service Module
//!
//! Routes for turning a filled-in form into a published document.
//!
//! ## Sub-modules:
//! - `submit`: validates a submission, renders it and publishes the result.

mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for the compare endpoint.
const API_PATH: &str = "/api/compare";

/// Configures and returns the Actix `Scope` for the compare route.
///
/// # Registered Routes:
///
/// *   **`POST /api/compare`**:
///     - **Handler**: `submit::process`
///     - **Description**: Accepts a JSON `SubmissionRequest`. A valid submission is
///       rendered to HTML and published according to the configured `PublishMode`;
///       the response carries the document and how it was published. An invalid one
///       gets `422 Unprocessable Entity` with the message to show in the form.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(submit::process))
}
