use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

pub fn run_completions<W: Write>(out: &mut W, shell: CompletionShell) -> Result<(), CliError> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();

    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut command, bin_name, out),
        CompletionShell::Zsh => generate(shells::Zsh, &mut command, bin_name, out),
        CompletionShell::Fish => generate(shells::Fish, &mut command, bin_name, out),
    }

    Ok(())
}
