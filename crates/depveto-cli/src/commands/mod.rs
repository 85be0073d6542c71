//! Command dispatch and handler modules.

mod check;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check {
            descriptor,
            rules,
            deny,
            versions,
            format,
        } => check::exec(
            &descriptor,
            rules.as_deref(),
            deny.as_deref(),
            &versions,
            format,
        ),
    }
}
