//! Optional tweaks that make an automated session look less like one.
//!
//! None of this affects what the pipeline extracts. It is kept behind
//! [`SessionHardening`] so it can be swapped out or disabled without touching
//! navigation.

use crate::Result;
use async_trait::async_trait;
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::network::SetUserAgentOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams;

#[async_trait]
pub trait SessionHardening: Send + Sync {
    /// Extra command-line flags for the browser process
    fn launch_args(&self) -> Vec<String> {
        Vec::new()
    }

    /// Applied once to the fresh page, before any navigation
    async fn apply(&self, page: &Page) -> Result<()>;
}

/// Leaves the session untouched
pub struct NoHardening;

#[async_trait]
impl SessionHardening for NoHardening {
    async fn apply(&self, _page: &Page) -> Result<()> {
        Ok(())
    }
}

const STEALTH_SCRIPT: &str = r#"
Object.defineProperty(navigator, 'webdriver', { get: () => false });
Object.defineProperty(navigator, 'languages', { get: () => ['en-US', 'en'] });
Object.defineProperty(navigator, 'plugins', { get: () => [1, 2, 3, 4, 5] });
window.chrome = window.chrome || { runtime: {} };
"#;

/// Overrides the user agent and hides the common automation markers
pub struct StealthHardening {
    user_agent: String,
}

impl StealthHardening {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl SessionHardening for StealthHardening {
    fn launch_args(&self) -> Vec<String> {
        vec!["--disable-blink-features=AutomationControlled".to_string()]
    }

    async fn apply(&self, page: &Page) -> Result<()> {
        if !self.user_agent.is_empty() {
            tracing::debug!("Overriding user agent: {}", self.user_agent);
            page.execute(SetUserAgentOverrideParams::new(self.user_agent.clone()))
                .await?;
        }

        page.execute(AddScriptToEvaluateOnNewDocumentParams::new(STEALTH_SCRIPT))
            .await?;

        tracing::debug!("Stealth script installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hardening_adds_no_args() {
        assert!(NoHardening.launch_args().is_empty());
    }

    #[test]
    fn test_stealth_disables_automation_flag() {
        let hardening = StealthHardening::new("Mozilla/5.0 test");
        assert!(
            hardening
                .launch_args()
                .contains(&"--disable-blink-features=AutomationControlled".to_string())
        );
    }
}
