use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Chrome user-data directory for one scrape session.
///
/// Throwaway directories are deleted on drop. Named profiles live under
/// `~/.jobscout/profiles/<name>` and keep cookies between runs, which makes
/// CAPTCHA challenges less frequent.
pub struct ProfileManager {
    path: PathBuf,
    throwaway: bool,
}

impl ProfileManager {
    /// Fresh directory under the system temp dir, removed when dropped
    pub fn temporary() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("jobscout-profile-")
            .tempdir()?
            .keep();
        tracing::debug!("Using throwaway profile {}", path.display());

        Ok(Self {
            path,
            throwaway: true,
        })
    }

    /// Directory that survives the session; created if missing
    pub fn persistent(path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&path)?;
        tracing::debug!("Using persistent profile {}", path.display());

        Ok(Self {
            path,
            throwaway: false,
        })
    }

    /// Persistent profile by name under [`ProfileManager::profiles_dir`]
    pub fn named(name: &str) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(Error::Browser(format!("Invalid profile name: '{}'", name)));
        }

        Self::persistent(Self::profiles_dir()?.join(name))
    }

    pub fn profiles_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?;
        Ok(home.join(".jobscout").join("profiles"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.throwaway
    }
}

/// A profile name is a single path component
fn is_valid_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..") && !name.contains(['/', '\\'])
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if !self.throwaway {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove profile {}: {}", self.path.display(), e);
            }
        }
    }
}
