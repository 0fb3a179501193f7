use std::io;
use std::path::Path;

/// Opens a URL or a local file in a browser tab.
///
/// Handlers receive it as `web::Data<dyn BrowserLauncher>` so tests can
/// substitute a recorder for the system browser.
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Delegates to the desktop's default browser.
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, target: &str) -> io::Result<()> {
        webbrowser::open(target)
    }
}

/// Absolute path handed to the launcher for a local document.
///
/// `webbrowser` opens local paths as file URLs. Not canonicalized: on Windows
/// that yields a `\\?\` verbatim path.
pub fn local_target(path: &Path) -> io::Result<String> {
    Ok(std::path::absolute(path)?.display().to_string())
}
