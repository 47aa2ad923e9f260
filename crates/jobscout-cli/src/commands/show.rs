use crate::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use jobscout_core::{JobRecord, estimate_posted_date};
use std::path::{Path, PathBuf};

pub fn execute(file: &Path, data_dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let store = super::open_store(data_dir)?;
    let jobs = store.load(file)?;

    tracing::debug!("Showing {} jobs as {}", jobs.len(), format.as_str());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&jobs)?),
        OutputFormat::Table => print_table(&jobs),
        OutputFormat::Pretty => print_pretty(&jobs, &store.resolve(file)),
    }

    Ok(())
}

/// Approximate posting date, using the record's scrape time as the reference
pub fn estimated_posted(job: &JobRecord) -> Option<NaiveDate> {
    let scraped_at = DateTime::parse_from_rfc3339(&job.scrape_time)
        .ok()?
        .with_timezone(&Utc);
    Some(estimate_posted_date(&job.posted_date, scraped_at))
}

fn posted_column(job: &JobRecord) -> String {
    estimated_posted(job)
        .map(|date| date.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_pretty(jobs: &[JobRecord], path: &Path) {
    use console::style;

    if jobs.is_empty() {
        println!("No jobs found in {}", path.display());
        return;
    }

    println!(
        "\n{}",
        style(format!("{} jobs from {}", jobs.len(), path.display()))
            .bold()
            .cyan()
    );

    for job in jobs {
        println!(
            "\n{} {}",
            style(format!("#{}", job.job_index)).dim(),
            style(&job.title).bold()
        );
        println!("  {}", style(&job.company).green());
        if !job.location.is_empty() {
            println!("  📍 {}", job.location);
        }
        if !job.posted_date.is_empty() {
            println!("  🕒 {} (~{})", job.posted_date, posted_column(job));
        }
        if !job.link.is_empty() {
            println!("  🔗 {}", style(&job.link).dim());
        }
    }
}

fn print_table(jobs: &[JobRecord]) {
    let title_width = column_width(jobs.iter().map(|j| j.title.as_str()), "Title");
    let company_width = column_width(jobs.iter().map(|j| j.company.as_str()), "Company");
    let location_width = column_width(jobs.iter().map(|j| j.location.as_str()), "Location");

    println!(
        "{:>4}  {:<tw$}  {:<cw$}  {:<lw$}  Posted (est.)",
        "#",
        "Title",
        "Company",
        "Location",
        tw = title_width,
        cw = company_width,
        lw = location_width
    );

    for job in jobs {
        println!(
            "{:>4}  {:<tw$}  {:<cw$}  {:<lw$}  {}",
            job.job_index,
            truncate(&job.title, title_width),
            truncate(&job.company, company_width),
            truncate(&job.location, location_width),
            posted_column(job),
            tw = title_width,
            cw = company_width,
            lw = location_width
        );
    }
}

const MAX_COLUMN_WIDTH: usize = 40;

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMN_WIDTH)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
