//! Local server for the code comparator request form.
//!
//! Serves the embedded form, parses uploaded extension pack manifests and
//! turns accepted submissions into an HTML document that is saved and opened
//! in the browser.

pub mod config;
pub mod errors;
pub mod logging;
pub mod publish;
pub mod services;
