pub(crate) mod args;
mod cli;

pub(crate) use cli::EscCli;
