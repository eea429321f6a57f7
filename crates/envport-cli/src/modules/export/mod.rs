pub(crate) mod actions;
pub(crate) mod args;
pub(crate) mod format;

pub(crate) use actions::{handle_open, handle_resolve};
