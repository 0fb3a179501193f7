//! Process-wide settings.
//!
//! Built once in `main` and handed to handlers as `web::Data<AppConfig>`.
//! The values are fixed; only the log level can be changed, through `RUST_LOG`.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTPUT_DIR: &str = "comparator_output";
pub const DEFAULT_LOG_FILE: &str = "comparator.log";

/// Largest JSON body accepted by the compare endpoint, and largest manifest upload.
pub const JSON_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Where a rendered document goes once a submission is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    /// Write `<output_dir>/<Prefix><DDMonYYYY>.html` and open it in the system browser.
    Persisted,
    /// Return the document only; the form opens a tab and writes it there.
    Inline,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub publish_mode: PublishMode,
    /// Open the form in the browser once the server is listening.
    pub open_browser_on_start: bool,
}

impl AppConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            publish_mode: PublishMode::Persisted,
            open_browser_on_start: true,
        }
    }
}
