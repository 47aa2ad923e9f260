use crate::Result;
use crate::job::JobRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Reads and writes job records as a JSON array on disk.
///
/// Relative paths resolve under the store's data directory; absolute paths
/// are used as given. Writes overwrite the whole file.
pub struct JobStore {
    data_dir: PathBuf,
}

impl JobStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Default data directory: `~/.jobscout/data`
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".jobscout").join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve a file name against the data directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// Write records as pretty-printed JSON, creating parent directories
    pub fn save(&self, records: &[JobRecord], path: &Path) -> Result<PathBuf> {
        let path = self.resolve(path);
        tracing::debug!("Writing job file to: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, records)?;

        tracing::info!("Saved {} jobs to {}", records.len(), path.display());

        Ok(path)
    }

    /// Read records back; a missing file yields an empty list
    pub fn load(&self, path: &Path) -> Result<Vec<JobRecord>> {
        let path = self.resolve(path);

        if !path.exists() {
            tracing::debug!("No job file at {}, returning empty list", path.display());
            return Ok(Vec::new());
        }

        tracing::debug!("Reading job file from: {}", path.display());

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let records: Vec<JobRecord> = serde_json::from_reader(reader)?;

        tracing::info!("Loaded {} jobs from {}", records.len(), path.display());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample_jobs() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: "Software Engineer".to_string(),
                company: "Tech Corp".to_string(),
                location: "Remote".to_string(),
                link: "http://example.com/job1".to_string(),
                posted_date: "3 days ago".to_string(),
                scrape_time: "2024-10-01T12:00:00.000Z".to_string(),
                job_index: 0,
            },
            JobRecord {
                title: "Data Scientist".to_string(),
                company: "Data Inc".to_string(),
                location: String::new(),
                link: String::new(),
                posted_date: String::new(),
                scrape_time: "2024-10-01T12:00:00.004Z".to_string(),
                job_index: 2,
            },
        ]
    }

    #[test]
    fn test_save_then_load_returns_same_records() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());
        let jobs = sample_jobs();

        store.save(&jobs, Path::new("jobs.json")).unwrap();
        let loaded = store.load(Path::new("jobs.json")).unwrap();

        assert_eq!(loaded, jobs);
    }

    #[test]
    fn test_relative_path_resolves_under_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().join("data"));

        let written = store
            .save(&sample_jobs(), Path::new("runs/today/jobs.json"))
            .unwrap();

        assert_eq!(written, temp.path().join("data/runs/today/jobs.json"));
        assert!(written.exists());
    }

    #[test]
    fn test_absolute_path_is_used_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(PathBuf::from("/nonexistent/data"));
        let target = temp.path().join("out.json");

        let written = store.save(&sample_jobs(), &target).unwrap();
        assert_eq!(written, target);
    }

    #[test]
    fn test_save_writes_two_space_indented_array() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());

        let path = store.save(&sample_jobs(), Path::new("jobs.json")).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.starts_with("[\n  {\n    \"title\": \"Software Engineer\""));
        assert!(content.contains("\"postedDate\": \"\""));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());
        let jobs = sample_jobs();

        store.save(&jobs, Path::new("jobs.json")).unwrap();
        store.save(&jobs[..1], Path::new("jobs.json")).unwrap();

        let loaded = store.load(Path::new("jobs.json")).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());

        let loaded = store.load(Path::new("nonExistentFile.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());
        fs::write(temp.path().join("bad.json"), "[{\"title\": \"x\"").unwrap();

        let result = store.load(Path::new("bad.json"));
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_wrong_shape_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let store = JobStore::new(temp.path().to_path_buf());
        fs::write(temp.path().join("object.json"), "{\"jobs\": []}").unwrap();

        let result = store.load(Path::new("object.json"));
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
