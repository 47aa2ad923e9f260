use anyhow::{Result, anyhow};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use jobscout_browser::{ChromeFinder, ChromeLauncher, JobsScraper, StealthHardening};
use jobscout_core::{ScraperConfig, SelectorSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Everything the `scrape` command needs, gathered from flags and env
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub query: String,
    pub location: Option<String>,
    pub output: PathBuf,
    pub data_dir: Option<PathBuf>,
    pub config: ScraperConfig,
    pub chrome_path: Option<PathBuf>,
    pub profile: Option<String>,
    pub selectors: Option<PathBuf>,
    pub stealth: bool,
}

pub fn execute(options: ScrapeOptions) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Dropping the scrape future on Ctrl-C drops the session, which kills Chrome
    let result = runtime.block_on(async {
        tokio::select! {
            result = scrape(options) => result,
            _ = tokio::signal::ctrl_c() => {
                println!("\n❌ Interrupted - no jobs saved");
                Err(anyhow!("Interrupted"))
            }
        }
    });

    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

async fn scrape(options: ScrapeOptions) -> Result<()> {
    let selectors = match &options.selectors {
        Some(path) => SelectorSet::from_file(path)?,
        None => SelectorSet::default(),
    };
    let scraper = JobsScraper::new(options.config.clone(), selectors)?;
    let store = super::open_store(options.data_dir.clone())?;

    println!("🔍 Locating Chrome...");
    let chrome_binary = ChromeFinder::new(options.chrome_path.clone()).find()?;
    println!("✅ Found Chrome at: {}", chrome_binary.display());

    let mut launcher = ChromeLauncher::new(chrome_binary);
    if options.stealth {
        launcher = launcher.with_hardening(Arc::new(StealthHardening::new(
            options.config.user_agent.clone(),
        )));
    }
    if let Some(profile) = &options.profile {
        println!("📁 Using profile: {}", profile);
        launcher = launcher.with_profile(profile.clone());
    }

    let session = launcher.launch(scraper.config()).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(match &options.location {
        Some(location) => format!("Searching '{}' in {}...", options.query, location),
        None => format!("Searching '{}'...", options.query),
    });
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = scraper
        .run(session, &options.query, options.location.as_deref())
        .await;
    spinner.finish_and_clear();

    let jobs = result?;
    let path = store.save(&jobs, &options.output)?;

    println!(
        "{} Saved {} jobs to {}",
        style("✅").green(),
        style(jobs.len()).bold(),
        path.display()
    );

    Ok(())
}
