//! Shared fixtures for the backend HTTP tests.

#![allow(dead_code)]

use comparator_backend::config::{AppConfig, PublishMode};
use comparator_backend::publish::browser::BrowserLauncher;
use common::model::category::Category;
use common::model::credentials::OrgCredentials;
use common::model::submission::SubmissionRequest;
use common::model::tech::TechToCompare;
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Browser stand-in that remembers what it was asked to open.
#[derive(Default)]
pub struct RecordingBrowser {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingBrowser {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, target: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Other, "no browser available"));
        }
        self.opened.lock().unwrap().push(target.to_string());
        Ok(())
    }
}

pub fn test_config(dir: &Path, publish_mode: PublishMode) -> AppConfig {
    AppConfig {
        output_dir: dir.join("out"),
        log_file: dir.join("comparator.log"),
        publish_mode,
        open_browser_on_start: false,
        ..AppConfig::default()
    }
}

/// (u1,p1,orgA) → (u2,p2,orgB), Component [Picking], Handler, e@x.com
pub fn complete_request() -> SubmissionRequest {
    SubmissionRequest {
        source: OrgCredentials::new("u1", "p1", "orgA"),
        target: OrgCredentials::new("u2", "p2", "orgB"),
        category: Category::Component,
        selected_items: vec!["Picking".to_string()],
        tech_to_compare: TechToCompare::Handler,
        email_id: "e@x.com".to_string(),
    }
}

pub const BOUNDARY: &str = "comparator-test-boundary";

/// Content type for bodies built by [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// A multipart body with one part per `(field name, filename, content)`.
pub fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/json\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body.into_bytes()
}
