use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jobscout_cli::OutputFormat;
use jobscout_cli::commands;
use jobscout_core::ScraperConfig;
use std::path::PathBuf;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Scrape job listings from search results into JSON",
    long_about = "jobscout drives Chrome to a job search results page, extracts each posting \
                  with CSS selectors and saves the postings as a JSON array."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (pretty, json, table)
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// Directory that relative job file paths resolve against [default: ~/.jobscout/data]
    #[arg(long, global = true, env = "JOBSCOUT_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for jobs and save the results
    Scrape {
        /// Search query, e.g. "Software Engineer"
        #[arg(value_name = "QUERY")]
        query: String,

        /// Location to search in, e.g. "Remote"
        #[arg(short, long)]
        location: Option<String>,

        /// Output file (relative paths go under the data directory)
        #[arg(short, long, default_value = "jobs.json")]
        output: PathBuf,

        /// Show the browser window (allows solving a CAPTCHA by hand)
        #[arg(long)]
        headful: bool,

        /// Navigation and results timeout in milliseconds
        #[arg(long, env = "JOBSCOUT_TIMEOUT_MS", default_value_t = 30_000)]
        timeout: u64,

        /// Expected upper bound on jobs per run (a warning is logged above it)
        #[arg(long, env = "JOBSCOUT_MAX_JOBS", default_value_t = 50)]
        max_jobs: usize,

        /// User agent applied by the stealth hardening
        #[arg(long, env = "JOBSCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
        user_agent: String,

        /// Delay after navigation before looking for results, in milliseconds
        #[arg(long, env = "JOBSCOUT_SCROLL_DELAY_MS", default_value_t = 1_000)]
        scroll_delay: u64,

        /// Extra wait for results in headful mode, in milliseconds
        #[arg(long, env = "JOBSCOUT_CAPTCHA_WAIT_MS", default_value_t = 5_000)]
        captcha_wait: u64,

        /// Path to Chrome executable (auto-detected if not specified)
        #[arg(long, env = "JOBSCOUT_CHROME_PATH")]
        chrome_path: Option<PathBuf>,

        /// Named browser profile kept between runs (temporary if omitted)
        #[arg(long)]
        profile: Option<String>,

        /// JSON selector table to use instead of the built-in one
        #[arg(long, value_name = "FILE")]
        selectors: Option<PathBuf>,

        /// Disable user-agent override and automation hiding
        #[arg(long)]
        no_stealth: bool,
    },

    /// Display jobs from a saved JSON file
    Show {
        /// Job file (relative paths go under the data directory)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the built-in selector table as JSON
    Selectors,

    /// Generate shell completion scripts
    #[command(after_long_help = "SUPPORTED SHELLS:\n  \
        bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n  \
        bash:  jobscout completion --shell bash >> ~/.bashrc\n  \
        zsh:   echo 'source <(jobscout completion --shell zsh)' >> ~/.zshrc\n  \
        fish:  jobscout completion --shell fish > ~/.config/fish/completions/jobscout.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Scrape {
            query,
            location,
            output,
            headful,
            timeout,
            max_jobs,
            user_agent,
            scroll_delay,
            captcha_wait,
            chrome_path,
            profile,
            selectors,
            no_stealth,
        } => commands::scrape::execute(commands::scrape::ScrapeOptions {
            query,
            location,
            output,
            data_dir: cli.data_dir,
            config: ScraperConfig {
                headless: !headful,
                timeout_ms: timeout,
                max_jobs,
                user_agent,
                scroll_delay_ms: scroll_delay,
                captcha_wait_ms: captcha_wait,
            },
            chrome_path,
            profile,
            selectors,
            stealth: !no_stealth,
        }),
        Commands::Show { file } => commands::show::execute(&file, cli.data_dir, cli.format),
        Commands::Selectors => commands::selectors::execute(),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // Directives match by target prefix, so `jobscout` covers every workspace crate
    let filter = if verbose {
        EnvFilter::new("jobscout=debug")
    } else {
        EnvFilter::new("jobscout=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
