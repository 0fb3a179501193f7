//! Extension pack manifests uploaded from the form.
//!
//! When the category is "Extension Pack", the form uploads a JSON manifest and
//! offers the names it lists as selectable items.
//!
//! The provided route is:
//! - `POST /api/extension_packs/upload`: multipart/form-data with a `file` field
//!   holding a `.json` manifest. Answers `200 OK` with a JSON array of
//!   `OneBoardName` values, or `400 Bad Request` with the message to show when
//!   the file is missing, is not `.json`, or does not parse.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod upload;

const API_PATH: &str = "/api/extension_packs";

/// Configures and returns the Actix scope for extension pack routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to upload a manifest and list its extension packs.
        .route("/upload", post().to(upload::process))
}
