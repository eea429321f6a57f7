use clap::Parser;

mod cli_args;
mod cli_command;
mod modules;
#[cfg(test)]
mod tests;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::workflow;
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ESC_BIN: &str = "esc";
pub(crate) const ACCESS_TOKEN_ENV: &str = "PULUMI_ACCESS_TOKEN";
pub(crate) const ACTIONS_ENV: &str = "GITHUB_ACTIONS";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if let Err(err) = handle_command(cli.command).await {
        if running_in_actions() {
            workflow::error(&format!("{err:#}"));
        }
        return Err(err);
    }
    Ok(())
}

fn running_in_actions() -> bool {
    std::env::var(ACTIONS_ENV).is_ok_and(|value| value == "true")
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => filter,
        _ => match verbosity {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            _ => "debug".to_string(),
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
