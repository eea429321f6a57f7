pub(crate) mod esc;
pub(crate) mod export;
pub(crate) mod system;
pub(crate) mod workflow;
