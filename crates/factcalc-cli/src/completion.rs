//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Write a completion script for the CLI described by `C`.
///
/// The script is registered under the command's own name, so it matches
/// whatever binary `C` was derived for.
pub fn generate_completion<C: CommandFactory>(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = C::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
