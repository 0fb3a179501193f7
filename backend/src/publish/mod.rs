//! # Document Publishing
//!
//! Hands an accepted submission's document to the user.
//!
//! In [`PublishMode::Persisted`] the document is written to
//! `<output_dir>/<Prefix><DDMonYYYY>.html`, where the prefix is the category
//! label without spaces and the date is today's local date. A later submission
//! on the same day and category replaces the file. The file is then opened in
//! a new browser tab.
//!
//! In [`PublishMode::Inline`] nothing happens here; the form opens the tab
//! itself with the document from the compare response.
//!
//! Write and browser failures are logged and reported as
//! [`Publication::NotConfirmed`]; they never fail the request.

pub mod browser;

use crate::config::{AppConfig, PublishMode};
use browser::BrowserLauncher;
use chrono::{Local, NaiveDate};
use common::model::category::Category;
use common::model::document::GeneratedDocument;
use common::requests::Publication;
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const FILE_DATE_FORMAT: &str = "%d%b%Y";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("could not create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("could not open {path} in a browser: {source}")]
    BrowserOpen { path: PathBuf, source: io::Error },
}

/// Publishes `document` using today's date for the file name.
pub fn publish(
    document: &GeneratedDocument,
    category: Category,
    config: &AppConfig,
    launcher: &dyn BrowserLauncher,
) -> Publication {
    publish_on(document, category, Local::now().date_naive(), config, launcher)
}

/// Publishes `document` as if submitted on `date`.
pub fn publish_on(
    document: &GeneratedDocument,
    category: Category,
    date: NaiveDate,
    config: &AppConfig,
    launcher: &dyn BrowserLauncher,
) -> Publication {
    match config.publish_mode {
        PublishMode::Inline => Publication::Inline,
        PublishMode::Persisted => {
            let path = output_path(&config.output_dir, category, date);
            match persist_and_open(document, &path, launcher) {
                Ok(()) => Publication::Saved {
                    path: path.display().to_string(),
                },
                Err(e) => {
                    error!("{}", e);
                    Publication::NotConfirmed
                }
            }
        }
    }
}

/// `<output_dir>/<Prefix><DDMonYYYY>.html`
pub fn output_path(output_dir: &Path, category: Category, date: NaiveDate) -> PathBuf {
    output_dir.join(format!(
        "{}{}.html",
        category.file_prefix(),
        date.format(FILE_DATE_FORMAT)
    ))
}

fn persist_and_open(
    document: &GeneratedDocument,
    path: &Path,
    launcher: &dyn BrowserLauncher,
) -> Result<(), PublishError> {
    write_document(document, path)?;

    let target = browser::local_target(path).map_err(|source| PublishError::BrowserOpen {
        path: path.to_path_buf(),
        source,
    })?;
    launcher
        .open(&target)
        .map_err(|source| PublishError::BrowserOpen {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Opened {} in a new browser tab", path.display());
    Ok(())
}

fn write_document(document: &GeneratedDocument, path: &Path) -> Result<(), PublishError> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| PublishError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, document.as_str()).map_err(|source| PublishError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        opened: Mutex<Vec<String>>,
    }

    impl BrowserLauncher for Recorder {
        fn open(&self, target: &str) -> io::Result<()> {
            self.opened.lock().unwrap().push(target.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl BrowserLauncher for Broken {
        fn open(&self, _target: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            output_dir: dir.join("out"),
            log_file: dir.join("comparator.log"),
            open_browser_on_start: false,
            ..AppConfig::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn doc(html: &str) -> GeneratedDocument {
        GeneratedDocument::new(html.to_string())
    }

    #[test]
    fn file_name_uses_category_and_day() {
        let path = output_path(Path::new("out"), Category::ExtensionPack, date());
        assert_eq!(path, Path::new("out").join("ExtensionPack19Oct2026.html"));

        let path = output_path(
            Path::new("out"),
            Category::Component,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        );
        assert_eq!(path, Path::new("out").join("Component05Mar2026.html"));
    }

    #[test]
    fn persisted_document_is_written_and_opened() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let recorder = Recorder::default();

        let publication = publish_on(&doc("<h1>x</h1>"), Category::Component, date(), &config, &recorder);

        let expected = config.output_dir.join("Component19Oct2026.html");
        assert_eq!(
            publication,
            Publication::Saved {
                path: expected.display().to_string()
            }
        );
        assert_eq!(fs::read_to_string(&expected).unwrap(), "<h1>x</h1>");

        let opened = recorder.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(Path::new(&opened[0]).is_absolute());
        assert!(opened[0].ends_with("Component19Oct2026.html"));
    }

    #[test]
    fn second_submission_same_day_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let recorder = Recorder::default();

        publish_on(&doc("first"), Category::Component, date(), &config, &recorder);
        publish_on(&doc("second"), Category::Component, date(), &config, &recorder);

        let files: Vec<_> = fs::read_dir(&config.output_dir).unwrap().collect();
        assert_eq!(files.len(), 1);
        let path = config.output_dir.join("Component19Oct2026.html");
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn browser_failure_is_not_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let publication = publish_on(&doc("x"), Category::Component, date(), &config, &Broken);

        assert_eq!(publication, Publication::NotConfirmed);
        assert!(config.output_dir.join("Component19Oct2026.html").exists());
    }

    #[test]
    fn write_failure_is_not_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the output directory should be.
        let blocker = dir.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();
        let config = config_in(dir.path());
        let recorder = Recorder::default();

        let publication = publish_on(&doc("x"), Category::Component, date(), &config, &recorder);

        assert_eq!(publication, Publication::NotConfirmed);
        assert!(recorder.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn inline_mode_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            publish_mode: PublishMode::Inline,
            ..config_in(dir.path())
        };
        let recorder = Recorder::default();

        let publication = publish_on(&doc("x"), Category::Component, date(), &config, &recorder);

        assert_eq!(publication, Publication::Inline);
        assert!(!config.output_dir.exists());
        assert!(recorder.opened.lock().unwrap().is_empty());
    }
}
