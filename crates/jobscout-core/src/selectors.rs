//! CSS selector table for the job results page.
//!
//! The target markup changes often, so selectors live here as data rather
//! than inside the extraction code. Each entry may list comma-separated
//! alternatives; the browser's query engine matches any of them.
//!
//! A table can be replaced at runtime with [`SelectorSet::from_file`], which
//! reads the same JSON shape that [`SelectorSet::default`] serializes to.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version of the built-in table, bumped whenever a selector changes
pub const BUILTIN_VERSION: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    pub version: u32,
    #[serde(rename = "jobsContainer")]
    pub jobs_container: String,
    #[serde(rename = "jobCards")]
    pub job_cards: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "jobLink")]
    pub job_link: String,
    #[serde(rename = "postedDate")]
    pub posted_date: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            version: BUILTIN_VERSION,
            jobs_container: "#rso, .dURPMd, .ULSxyf".to_string(),
            job_cards: ".EimVGf, .MjjYud, .g, div[data-hveid]".to_string(),
            job_title: ".tNxQIb.PUpOsf, h3, .LC20lb, .DKV0Md, [role=\"heading\"]".to_string(),
            company: ".wHYlTd.MKCbgd.a3jPc, .VuuXrf, .tjvcx".to_string(),
            location: ".wHYlTd.FqK3wc.MKCbgd, .rllt__details".to_string(),
            job_link: "a[href*=\"jobs\"], a[data-ved], h3 a".to_string(),
            posted_date: "span.Yf9oye[aria-label*=\"Posted\"], .MUxGbd".to_string(),
        }
    }
}

impl SelectorSet {
    /// Load a selector table from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading selector table from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let selectors: SelectorSet = serde_json::from_str(&content)?;
        selectors.validate()?;

        tracing::info!(
            "Loaded selector table version {} from {}",
            selectors.version,
            path.display()
        );

        Ok(selectors)
    }

    /// Logical field names paired with their selectors
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("jobsContainer", self.jobs_container.as_str()),
            ("jobCards", self.job_cards.as_str()),
            ("jobTitle", self.job_title.as_str()),
            ("company", self.company.as_str()),
            ("location", self.location.as_str()),
            ("jobLink", self.job_link.as_str()),
            ("postedDate", self.posted_date.as_str()),
        ]
    }

    /// Every field must carry at least one non-empty alternative
    pub fn validate(&self) -> Result<()> {
        for (name, selector) in self.entries() {
            let has_alternative = selector.split(',').any(|alt| !alt.trim().is_empty());
            if !has_alternative {
                return Err(Error::InvalidSelectors(format!(
                    "selector for '{}' is empty",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_is_valid() {
        let selectors = SelectorSet::default();
        assert!(selectors.validate().is_ok());
        assert_eq!(selectors.version, BUILTIN_VERSION);
    }

    #[test]
    fn test_validate_rejects_blank_selector() {
        let selectors = SelectorSet {
            company: " , ".to_string(),
            ..SelectorSet::default()
        };

        let err = selectors.validate().unwrap_err();
        assert!(err.to_string().contains("company"));
    }

    #[test]
    fn test_from_file_reads_alternate_table() {
        let alternate = SelectorSet {
            version: 99,
            job_cards: "li.job".to_string(),
            ..SelectorSet::default()
        };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&alternate).unwrap()).unwrap();

        let loaded = SelectorSet::from_file(file.path()).unwrap();
        assert_eq!(loaded, alternate);
    }

    #[test]
    fn test_from_file_rejects_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"version": 1, "jobCards": "li"}}"#).unwrap();

        let result = SelectorSet::from_file(file.path());
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
