use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A live browser page that the extraction pipeline drives.
///
/// Implementations own the browser process behind the page. `close` must be
/// safe to call more than once.
#[async_trait]
pub trait DriverSession: Send + Sync {
    /// Handle to an element returned by [`DriverSession::query_all`]
    type Element: Send + Sync;

    /// Load `url`, failing with a navigation error on timeout or network failure
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// Whether an element matching `selector` appears within `timeout`.
    ///
    /// A timeout is reported as `false`, never as an error.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> bool;

    /// All elements matching `selector`, in document order
    async fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Text content of the first descendant of `element` matching `selector`
    async fn find_text(&self, element: &Self::Element, selector: &str) -> Result<Option<String>>;

    /// Attribute `attr` of the first descendant of `element` matching `selector`
    async fn find_attribute(
        &self,
        element: &Self::Element,
        selector: &str,
        attr: &str,
    ) -> Result<Option<String>>;

    /// Terminate the browser
    async fn close(&mut self) -> Result<()>;

    /// Trimmed text of the first match, or an empty string if there is none
    /// or the lookup fails
    async fn read_text(&self, element: &Self::Element, selector: &str) -> String {
        match self.find_text(element, selector).await {
            Ok(text) => text.map(|t| t.trim().to_string()).unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Failed to read text for '{}': {}", selector, e);
                String::new()
            }
        }
    }

    /// Attribute of the first match, or an empty string if absent
    async fn read_attribute(&self, element: &Self::Element, selector: &str, attr: &str) -> String {
        match self.find_attribute(element, selector, attr).await {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Failed to read '{}' of '{}': {}", attr, selector, e);
                String::new()
            }
        }
    }
}
