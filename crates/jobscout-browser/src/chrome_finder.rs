use crate::{Error, Result};
use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
    "/opt/google/chrome/chrome",
];

#[cfg(target_os = "macos")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
    "/Applications/Google Chrome Canary.app/Contents/MacOS/Google Chrome Canary",
];

#[cfg(target_os = "windows")]
const INSTALL_LOCATIONS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const INSTALL_LOCATIONS: &[&str] = &[];

/// Executable names looked up on `PATH` after the fixed install locations
const PATH_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Locates the Chrome or Chromium binary used for scraping
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// An explicit path must be usable as given; otherwise install
    /// locations are tried before `PATH`.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(path) = &self.custom_path {
            ensure_launchable(path)?;
            return Ok(path.clone());
        }

        let installed = INSTALL_LOCATIONS
            .iter()
            .map(Path::new)
            .find(|path| ensure_launchable(path).is_ok());
        if let Some(path) = installed {
            tracing::debug!("Found Chrome at {}", path.display());
            return Ok(path.to_path_buf());
        }

        if let Some(path) = PATH_CANDIDATES.iter().find_map(|name| which::which(name).ok()) {
            tracing::debug!("Found Chrome on PATH: {}", path.display());
            return Ok(path);
        }

        Err(Error::Launch(format!(
            "Chrome not found. Checked: {} and {} on PATH. Use --chrome-path to specify location.",
            INSTALL_LOCATIONS.join(", "),
            PATH_CANDIDATES.join("/")
        )))
    }
}

/// A launch candidate must exist and, on unix, carry an execute bit
fn ensure_launchable(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::Launch(format!("Chrome not found at: {}", path.display())));
        }
        Err(e) => return Err(e.into()),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
            return Err(Error::Launch(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    #[cfg(not(unix))]
    {
        if !metadata.is_file() {
            return Err(Error::Launch(format!("Not a Chrome binary: {}", path.display())));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_explicit_executable_is_returned_as_given() {
        let binary = tempfile::NamedTempFile::new().unwrap();
        #[cfg(unix)]
        set_mode(binary.path(), 0o755);

        let found = ChromeFinder::new(Some(binary.path().to_path_buf())).find().unwrap();
        assert_eq!(found, binary.path());
    }

    #[test]
    fn test_missing_explicit_path_is_launch_error() {
        let err = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome")))
            .find()
            .unwrap_err();

        assert!(matches!(err, Error::Launch(_)));
        assert!(err.to_string().contains("Chrome not found at: /nonexistent/chrome"));
    }

    #[cfg(unix)]
    #[test]
    fn test_explicit_path_without_execute_bit_is_rejected() {
        let binary = tempfile::NamedTempFile::new().unwrap();
        set_mode(binary.path(), 0o644);

        let err = ChromeFinder::new(Some(binary.path().to_path_buf()))
            .find()
            .unwrap_err();

        assert!(err.to_string().contains("not executable"));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_not_a_chrome_binary() {
        let dir = tempfile::tempdir().unwrap();

        let err = ChromeFinder::new(Some(dir.path().to_path_buf()))
            .find()
            .unwrap_err();

        assert!(matches!(err, Error::Launch(_)));
    }
}
