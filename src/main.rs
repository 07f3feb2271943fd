mod cli;
mod commands;
mod infra;
mod shared;
#[cfg(test)]
mod testing;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use shared::env_var::{EnvVars, workflow_error};

#[tokio::main]
async fn main() -> ExitCode {
    shared::logging::init_tracing();
    let Cli { command } = Cli::parse();

    let result = match command {
        Commands::Run(args) => args.run().await,
        Commands::Transcript(args) => args.run().await,
        Commands::Config(cmd) => cmd.run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "task-action", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            if EnvVars::load().github_actions {
                println!("{}", workflow_error(&format!("{e:#}")));
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
