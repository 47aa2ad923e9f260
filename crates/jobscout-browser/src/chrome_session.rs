use crate::driver::DriverSession;
use crate::profile::ProfileManager;
use crate::{Error, Result};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::element::Element;
use chromiumoxide::Page;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Interval between selector checks while waiting for results
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const TEXT_CONTENT_FN: &str = "function() { return this.textContent; }";

/// The browser process and the task pumping its CDP events
struct BrowserProcess {
    browser: Option<Browser>,
    handler_task: Option<JoinHandle<()>>,
}

impl BrowserProcess {
    /// Close the browser and stop the handler; later calls are no-ops
    async fn shutdown(&mut self) -> Result<()> {
        let closed = match self.browser.take() {
            Some(mut browser) => {
                tracing::debug!("Closing browser session");
                let closed = browser.close().await.map(|_| ());
                let _ = browser.wait().await;
                Some(closed)
            }
            None => None,
        };

        self.stop_handler();

        if let Some(closed) = closed {
            closed?;
            tracing::info!("Browser closed");
        }
        Ok(())
    }

    fn stop_handler(&mut self) {
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}

impl Drop for BrowserProcess {
    fn drop(&mut self) {
        self.stop_handler();
    }
}

/// A launched Chrome process with the one page a scrape works on.
///
/// Dropping the session without calling `close` still tears the process
/// down, since chromiumoxide kills the child it spawned.
pub struct ChromeSession {
    page: Page,
    process: BrowserProcess,
    // Declared last so the profile directory outlives the browser process
    _profile: ProfileManager,
}

impl ChromeSession {
    pub(crate) fn new(
        browser: Browser,
        page: Page,
        handler_task: JoinHandle<()>,
        profile: ProfileManager,
    ) -> Self {
        Self {
            page,
            process: BrowserProcess {
                browser: Some(browser),
                handler_task: Some(handler_task),
            },
            _profile: profile,
        }
    }

    async fn first_match(element: &Element, selector: &str) -> Result<Option<Element>> {
        Ok(element.find_elements(selector).await?.into_iter().next())
    }
}

#[async_trait]
impl DriverSession for ChromeSession {
    type Element = Element;

    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        tracing::debug!("Navigating to {}", url);

        let reason = match tokio::time::timeout(timeout, self.page.goto(url)).await {
            Ok(Ok(_)) => {
                tracing::debug!("Navigation complete: {}", url);
                return Ok(());
            }
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!("timed out after {}ms", timeout.as_millis()),
        };

        tracing::error!("Error navigating to {}: {}", url, reason);
        Err(Error::Navigation {
            url: url.to_string(),
            reason,
        })
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        loop {
            match self.page.find_elements(selector).await {
                Ok(elements) if !elements.is_empty() => return true,
                Ok(_) => {}
                Err(e) => tracing::debug!("Selector check for '{}' failed: {}", selector, e),
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::debug!(
                    "Timed out after {}ms waiting for '{}'",
                    timeout.as_millis(),
                    selector
                );
                return false;
            }

            tokio::time::sleep(POLL_INTERVAL.min(deadline - now)).await;
        }
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        Ok(self.page.find_elements(selector).await?)
    }

    async fn find_text(&self, element: &Element, selector: &str) -> Result<Option<String>> {
        let Some(found) = Self::first_match(element, selector).await? else {
            return Ok(None);
        };

        let returns = found.call_js_fn(TEXT_CONTENT_FN, false).await?;
        Ok(returns
            .result
            .value
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    async fn find_attribute(
        &self,
        element: &Element,
        selector: &str,
        attr: &str,
    ) -> Result<Option<String>> {
        match Self::first_match(element, selector).await? {
            Some(found) => Ok(found.attribute(attr).await?),
            None => Ok(None),
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.process.shutdown().await
    }
}
