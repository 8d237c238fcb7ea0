//! Shell completion generation.

use crate::utils::CliResult;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

pub fn cmd_completions(shell: Shell, command: &mut Command) -> CliResult<()> {
    let name = command.get_name().to_string();
    generate(shell, command, name, &mut io::stdout());
    Ok(())
}
