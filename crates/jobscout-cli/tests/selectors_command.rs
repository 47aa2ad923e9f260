use assert_cmd::Command;
use jobscout_core::SelectorSet;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_jobscout_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("jobscout")
}

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_selectors_prints_builtin_table() {
    let mut cmd = Command::new(get_jobscout_bin());
    cmd.arg("selectors");

    let output = cmd.assert().success().get_output().stdout.clone();
    let printed: SelectorSet = serde_json::from_slice(&output).unwrap();

    assert_eq!(printed, SelectorSet::default());
}

#[test]
fn test_custom_selector_fixture_loads() {
    let selectors = SelectorSet::from_file(&fixture_path("selectors.json")).unwrap();

    assert_eq!(selectors.version, 100);
    assert_eq!(selectors.job_cards, "li.job-card");
}
