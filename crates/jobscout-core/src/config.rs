use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Run parameters for one scrape invocation.
///
/// There is intentionally no `Default`: callers supply every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    pub headless: bool,
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: u64,
    /// Soft upper bound on records per pass; exceeding it only logs a warning
    #[serde(rename = "maxJobs")]
    pub max_jobs: usize,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    #[serde(rename = "scrollDelayMs")]
    pub scroll_delay_ms: u64,
    #[serde(rename = "captchaWaitMs")]
    pub captcha_wait_ms: u64,
}

impl ScraperConfig {
    /// Check the numeric bounds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "timeoutMs must be greater than 0".to_string(),
            ));
        }
        if self.max_jobs == 0 {
            return Err(Error::InvalidConfig(
                "maxJobs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    /// How long to wait for the results container.
    ///
    /// A visible window gets the extra CAPTCHA allowance so a person can
    /// clear a challenge by hand.
    pub fn results_wait(&self) -> Duration {
        if self.headless {
            self.timeout()
        } else {
            Duration::from_millis(self.timeout_ms.saturating_add(self.captcha_wait_ms))
        }
    }
}
