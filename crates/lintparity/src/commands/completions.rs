//! Handler for the `lintparity completions` command.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell as Target;
use lintparity_config as cli;

pub(crate) fn handle(args: cli::CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut std::io::stdout().lock())
}

fn write_completions<W: Write>(shell: cli::Shell, out: &mut W) -> Result<()> {
    let mut cmd = cli::Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(target(shell), &mut cmd, bin, out);
    out.flush()?;
    Ok(())
}

fn target(shell: cli::Shell) -> Target {
    match shell {
        cli::Shell::Bash => Target::Bash,
        cli::Shell::Elvish => Target::Elvish,
        cli::Shell::Fish => Target::Fish,
        cli::Shell::Powershell => Target::PowerShell,
        cli::Shell::Zsh => Target::Zsh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: cli::Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_completes_subcommands() {
        let out = script(cli::Shell::Bash);
        assert!(out.contains("lintparity"));
        assert!(out.contains("compare"));
        assert!(out.contains("normalize"));
    }

    #[test]
    fn zsh_script_names_the_binary() {
        assert!(script(cli::Shell::Zsh).contains("#compdef lintparity"));
    }
}
