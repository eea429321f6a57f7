use crate::cli_args::*;
use crate::modules::export::{handle_open, handle_resolve};

pub(crate) async fn handle_command(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Open(args) => handle_open(args).await?,
        Command::Resolve(args) => handle_resolve(args)?,
    }

    Ok(())
}
