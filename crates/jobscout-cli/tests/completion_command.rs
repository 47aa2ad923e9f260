use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_jobscout_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("jobscout")
}

fn completion_script(shell: &str) -> String {
    let mut cmd = Command::new(get_jobscout_bin());
    cmd.arg("completion").arg("--shell").arg(shell);

    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_completion_help_lists_install_steps() {
    let mut cmd = Command::new(get_jobscout_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUPPORTED SHELLS"))
        .stdout(predicate::str::contains("jobscout completion --shell bash >> ~/.bashrc"))
        .stdout(predicate::str::contains("~/.config/fish/completions/jobscout.fish"));
}

#[test]
fn test_bash_completion_covers_subcommands() {
    let script = completion_script("bash");

    assert!(script.contains("complete -F _jobscout"));
    for subcommand in ["scrape", "show", "selectors", "completion"] {
        assert!(script.contains(subcommand), "missing subcommand {}", subcommand);
    }
}

#[test]
fn test_bash_completion_covers_scrape_flags() {
    let script = completion_script("bash");

    for flag in ["--location", "--headful", "--max-jobs", "--captcha-wait", "--no-stealth"] {
        assert!(script.contains(flag), "missing flag {}", flag);
    }
}

#[test]
fn test_bash_completion_offers_output_formats() {
    let script = completion_script("bash");

    assert!(script.contains("--data-dir"));
    assert!(script.contains("pretty json table"));
}

#[test]
fn test_zsh_completion_describes_scrape() {
    let script = completion_script("zsh");

    assert!(script.contains("#compdef jobscout"));
    assert!(script.contains("Search for jobs and save the results"));
    assert!(script.contains("--selectors"));
}

#[test]
fn test_fish_completion_covers_profile_flags() {
    let script = completion_script("fish");

    assert!(script.contains("complete -c jobscout"));
    assert!(script.contains("-l profile"));
    assert!(script.contains("-l no-stealth"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    let mut cmd = Command::new(get_jobscout_bin());
    cmd.arg("completion").arg("--shell").arg("tcsh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
