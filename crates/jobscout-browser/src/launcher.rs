use crate::chrome_session::ChromeSession;
use crate::hardening::{NoHardening, SessionHardening};
use crate::profile::ProfileManager;
use crate::{Error, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use jobscout_core::ScraperConfig;
use std::path::PathBuf;
use std::sync::Arc;

pub const VIEWPORT_WIDTH: u32 = 1920;
pub const VIEWPORT_HEIGHT: u32 = 1080;

/// Starts a Chrome process and opens the single page a scrape works on
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile: Option<String>,
    hardening: Arc<dyn SessionHardening>,
}

impl ChromeLauncher {
    pub fn new(chrome_path: PathBuf) -> Self {
        Self {
            chrome_path,
            profile: None,
            hardening: Arc::new(NoHardening),
        }
    }

    /// Use a named persistent profile instead of a throwaway one
    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    pub fn with_hardening(mut self, hardening: Arc<dyn SessionHardening>) -> Self {
        self.hardening = hardening;
        self
    }

    /// Launch Chrome and return a session with one blank page
    pub async fn launch(&self, config: &ScraperConfig) -> Result<ChromeSession> {
        let profile = match &self.profile {
            Some(name) => ProfileManager::named(name)?,
            None => ProfileManager::temporary()?,
        };

        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .user_data_dir(profile.path())
            .window_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
            .viewport(Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
                ..Viewport::default()
            })
            .request_timeout(config.timeout())
            .args(self.build_args());

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(Error::Launch)?;

        tracing::info!(
            "Launching Chrome ({}) from {}",
            if config.headless { "headless" } else { "headful" },
            self.chrome_path.display()
        );

        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;

        // The handler must be polled for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler_task.abort();
                return Err(Error::Launch(format!("Failed to open page: {}", e)));
            }
        };

        if let Err(e) = self.hardening.apply(&page).await {
            tracing::warn!("Session hardening failed, continuing without it: {}", e);
        }

        tracing::info!("Chrome started successfully");

        Ok(ChromeSession::new(browser, page, handler_task, profile))
    }

    /// Chrome flags on top of chromiumoxide's defaults
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ];
        args.extend(self.hardening.launch_args());
        args
    }
}
