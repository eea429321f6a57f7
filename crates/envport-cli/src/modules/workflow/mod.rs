pub(crate) mod args;
mod commands;
mod file_command;

pub(crate) use commands::{add_mask, error, warning};
pub(crate) use file_command::FileCommand;
