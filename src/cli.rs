use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::run::RunArgs;
use crate::commands::transcript::TranscriptArgs;

#[derive(Parser)]
#[command(
    name = "task-action",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Hand an issue, pull request or task to the code-generation CLI and push the result
    Run(RunArgs),

    /// Print the transcript of an issue or pull request
    Transcript(TranscriptArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
