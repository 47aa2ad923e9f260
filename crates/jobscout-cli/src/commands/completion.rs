use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Print the completion script for `shell` to stdout
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    write_script(shell, cmd, &mut io::stdout())
}

pub fn write_script(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    tracing::debug!("Generating {} completions for {}", shell, bin_name);
    generate(shell, cmd, bin_name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_names_binary() {
        let mut cmd = Command::new("jobscout").subcommand(Command::new("scrape"));
        let mut buf = Vec::new();

        write_script(Shell::Bash, &mut cmd, &mut buf).unwrap();

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_jobscout()"));
        assert!(script.contains("scrape"));
    }
}
