//! CLI argument definitions for Jargo.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jargo",
    version,
    about = "Publish and test Java projects against Maven repositories",
    long_about = "Jargo publishes project artifacts to Maven repositories, remote or \
                  local, with generated POMs, version metadata, and checksum files, \
                  and runs project test tools as managed subprocesses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish artifacts to a Maven repository
    Publish {
        /// Repository to publish to: a [repositories] entry name, a URL, or a
        /// local path (overrides the manifest)
        #[arg(short, long)]
        repository: Option<String>,

        /// Artifact spec `path[:classifier[:type]]`, replacing the manifest
        /// artifact list (repeatable)
        #[arg(short, long)]
        artifact: Vec<String>,
    },

    /// Run the project's test tool
    Test {
        /// Extra options passed to the test tool
        #[arg(last = true)]
        args: Vec<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
