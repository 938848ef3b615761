//! Command dispatch and handler modules.

mod publish;
mod test_;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Publish {
            repository,
            artifact,
        } => publish::exec(repository.as_deref(), &artifact).await,
        Command::Test { args } => test_::exec(&args),
    }
}
