pub mod completion;
pub mod scrape;
pub mod selectors;
pub mod show;

use anyhow::{Result, anyhow};
use jobscout_core::JobStore;
use std::path::PathBuf;

/// Store rooted at the given data directory, or `~/.jobscout/data`
pub fn open_store(data_dir: Option<PathBuf>) -> Result<JobStore> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => JobStore::default_data_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory; pass --data-dir"))?,
    };
    let store = JobStore::new(data_dir);
    tracing::debug!("Using data directory {}", store.data_dir().display());
    Ok(store)
}
