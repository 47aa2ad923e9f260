use anyhow::Result;
use jobscout_core::SelectorSet;

/// Print the built-in selector table as JSON, ready to edit and pass to
/// `scrape --selectors`
pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&SelectorSet::default())?);
    Ok(())
}
