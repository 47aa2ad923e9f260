use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single job posting scraped from the results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    #[serde(rename = "postedDate")]
    pub posted_date: String,
    #[serde(rename = "scrapeTime")]
    pub scrape_time: String,
    #[serde(rename = "jobIndex")]
    pub job_index: usize,
}

/// Raw field values read from one job card, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub posted_date: String,
}

impl JobFields {
    /// Turn the fields into a record if both title and company are present.
    ///
    /// `job_index` is the card's position in the current pass.
    pub fn into_record(self, job_index: usize, scraped_at: DateTime<Utc>) -> Option<JobRecord> {
        if self.title.is_empty() || self.company.is_empty() {
            return None;
        }

        Some(JobRecord {
            title: self.title,
            company: self.company,
            location: self.location,
            link: self.link,
            posted_date: self.posted_date,
            scrape_time: format_scrape_time(scraped_at),
            job_index,
        })
    }
}

/// ISO-8601 form stored in `scrapeTime`, e.g. `2024-10-01T12:00:00.000Z`
pub fn format_scrape_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, company: &str) -> JobFields {
        JobFields {
            title: title.to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            link: "https://example.com/job".to_string(),
            posted_date: "2 days ago".to_string(),
        }
    }

    #[test]
    fn test_into_record_keeps_complete_fields() {
        let record = fields("Software Engineer", "Tech Corp")
            .into_record(3, Utc::now())
            .unwrap();

        assert_eq!(record.title, "Software Engineer");
        assert_eq!(record.company, "Tech Corp");
        assert_eq!(record.location, "Remote");
        assert_eq!(record.job_index, 3);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.scrape_time).is_ok());
    }

    #[test]
    fn test_into_record_requires_title_and_company() {
        let now = Utc::now();
        assert!(fields("", "Tech Corp").into_record(0, now).is_none());
        assert!(fields("Software Engineer", "").into_record(0, now).is_none());
        assert!(JobFields::default().into_record(0, now).is_none());
    }

    #[test]
    fn test_scrape_time_format() {
        use chrono::TimeZone;

        let at = Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap();
        assert_eq!(format_scrape_time(at), "2024-10-01T12:00:00.000Z");
    }

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = JobRecord {
            title: "Data Scientist".to_string(),
            company: "Data Inc".to_string(),
            location: String::new(),
            link: String::new(),
            posted_date: String::new(),
            scrape_time: "2024-01-01T00:00:00.000Z".to_string(),
            job_index: 0,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"postedDate\":\"\""));
        assert!(json.contains("\"scrapeTime\":\"2024-01-01T00:00:00.000Z\""));
        assert!(json.contains("\"jobIndex\":0"));
    }
}
