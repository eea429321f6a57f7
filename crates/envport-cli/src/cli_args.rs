use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::esc::args::*;
pub use crate::modules::export::args::*;
pub use crate::modules::workflow::args::*;

#[derive(Parser)]
#[command(name = "envport")]
#[command(about = "Open a secrets environment and export its values to a CI pipeline")]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Open an environment and export the selected values")]
    Open(OpenArgs),
    #[command(about = "Resolve exports against a local dotenv snapshot")]
    Resolve(ResolveArgs),
}
