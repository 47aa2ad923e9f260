use chrono::{DateTime, Duration, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RELATIVE_AGE: Regex = Regex::new(
        r"(?i)(\d+)\s*(minutes?|mins?|hours?|hrs?|days?|weeks?|months?|h|d|w|m)\b"
    )
    .unwrap();
}

/// Placeholder values that carry no date information
const UNKNOWN_MARKERS: &[&str] = &["n/a", "na", "none", "unknown"];

/// Approximate the calendar date of a posting from its free-text age.
///
/// Understands phrases such as `"3 days ago"`, `"5h"`, `"2 weeks ago"` and
/// `"yesterday"`. A month counts as 30 days. Anything unrecognised falls back
/// to the scrape date.
pub fn estimate_posted_date(posted: &str, scraped_at: DateTime<Utc>) -> NaiveDate {
    let fallback = scraped_at.date_naive();
    let text = posted.trim().to_lowercase();

    if text.is_empty() || UNKNOWN_MARKERS.contains(&text.as_str()) {
        return fallback;
    }

    if text.contains("yesterday") {
        return fallback.pred_opt().unwrap_or(fallback);
    }

    let Some(caps) = RELATIVE_AGE.captures(&text) else {
        tracing::debug!("Cannot parse posted date '{}', using scrape date", posted);
        return fallback;
    };

    let Ok(amount) = caps[1].parse::<i64>() else {
        return fallback;
    };

    let offset = match &caps[2] {
        "minute" | "minutes" | "min" | "mins" => Duration::try_minutes(amount),
        "hour" | "hours" | "hr" | "hrs" | "h" => Duration::try_hours(amount),
        "day" | "days" | "d" => Duration::try_days(amount),
        "week" | "weeks" | "w" => Duration::try_weeks(amount),
        "month" | "months" | "m" => Duration::try_days(amount.saturating_mul(30)),
        _ => None,
    };

    offset
        .and_then(|offset| scraped_at.checked_sub_signed(offset))
        .map(|date| date.date_naive())
        .unwrap_or(fallback)
}
