//! The scrape pipeline: navigate, wait for results, extract, return records.
//!
//! A pass moves through [`PassState::AwaitingResults`] and
//! [`PassState::Extracting`] before ending in `Done` or `Failed`. Failures
//! before extraction are fatal to the pass. Once extracting, a card that is
//! missing a title or company, or whose lookup errors, is dropped and the
//! pass carries on.

use crate::driver::DriverSession;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use jobscout_core::{JobFields, JobRecord, ScraperConfig, SelectorSet, build_search_url};

/// Where a scrape pass currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    AwaitingResults,
    Extracting,
    Done,
    Failed,
}

impl PassState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassState::AwaitingResults => "awaiting-results",
            PassState::Extracting => "extracting",
            PassState::Done => "done",
            PassState::Failed => "failed",
        }
    }
}

/// Runs scrape passes with a fixed configuration and selector table
pub struct JobsScraper {
    config: ScraperConfig,
    selectors: SelectorSet,
}

impl JobsScraper {
    pub fn new(config: ScraperConfig, selectors: SelectorSet) -> Result<Self> {
        config.validate()?;
        selectors.validate()?;

        Ok(Self { config, selectors })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Run one pass on `session`, then close it whatever the outcome.
    ///
    /// Taking the session by value makes this the single place it is closed.
    pub async fn run<D: DriverSession>(
        &self,
        mut session: D,
        query: &str,
        location: Option<&str>,
    ) -> Result<Vec<JobRecord>> {
        let result = self.scrape(&mut session, query, location).await;

        if let Err(e) = &result {
            tracing::error!("Scrape failed: {}", e);
        }

        if let Err(e) = session.close().await {
            tracing::warn!("Failed to close browser session: {}", e);
        }

        result
    }

    /// Navigate to the search page, wait for results and extract them
    pub async fn scrape<D: DriverSession>(
        &self,
        session: &mut D,
        query: &str,
        location: Option<&str>,
    ) -> Result<Vec<JobRecord>> {
        let url = build_search_url(query, location);
        tracing::info!("Searching jobs for '{}'", query);
        transition(PassState::AwaitingResults);

        if let Err(e) = session.navigate(&url, self.config.timeout()).await {
            transition(PassState::Failed);
            return Err(e);
        }

        let settle = self.config.scroll_delay();
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }

        let ready = session
            .wait_for_selector(&self.selectors.jobs_container, self.config.results_wait())
            .await;

        if !ready {
            transition(PassState::Failed);
            return Err(Error::results_not_loaded());
        }

        self.extract(session).await
    }

    /// Read every job card on the loaded page.
    ///
    /// Each record's `jobIndex` is the card's position among all cards,
    /// including the ones that were dropped.
    pub async fn extract<D: DriverSession>(&self, session: &D) -> Result<Vec<JobRecord>> {
        transition(PassState::Extracting);

        let cards = match session.query_all(&self.selectors.job_cards).await {
            Ok(cards) => cards,
            Err(e) => {
                transition(PassState::Failed);
                return Err(e);
            }
        };
        tracing::debug!("Found {} job cards", cards.len());

        let mut jobs = Vec::new();
        let mut last_scraped = DateTime::<Utc>::MIN_UTC;

        for (index, card) in cards.iter().enumerate() {
            let fields = match self.read_fields(session, card).await {
                Ok(fields) => fields,
                Err(e) => {
                    tracing::debug!("Dropping job card {}: {}", index, e);
                    continue;
                }
            };

            // Clamp so scrape times never run backwards within a pass
            let scraped_at = Utc::now().max(last_scraped);
            last_scraped = scraped_at;

            match fields.into_record(index, scraped_at) {
                Some(job) => jobs.push(job),
                None => tracing::debug!("Dropping job card {}: missing title or company", index),
            }
        }

        if jobs.len() > self.config.max_jobs {
            tracing::warn!(
                "Extracted {} jobs, more than the configured maximum of {}",
                jobs.len(),
                self.config.max_jobs
            );
        }

        transition(PassState::Done);
        tracing::info!("Extracted {} jobs from {} cards", jobs.len(), cards.len());

        Ok(jobs)
    }

    async fn read_fields<D: DriverSession>(
        &self,
        session: &D,
        card: &D::Element,
    ) -> Result<JobFields> {
        let selectors = &self.selectors;

        let title = session.read_text(card, &selectors.job_title).await;
        let company = session.read_text(card, &selectors.company).await;
        let location = session.read_text(card, &selectors.location).await;
        let posted_date = session.read_text(card, &selectors.posted_date).await;
        let link = session
            .find_attribute(card, &selectors.job_link, "href")
            .await?
            .unwrap_or_default();

        Ok(JobFields {
            title,
            company,
            location,
            link,
            posted_date,
        })
    }
}

fn transition(state: PassState) {
    tracing::debug!("Scrape pass -> {}", state.as_str());
}
