pub(crate) mod config;

pub(crate) use config::{ActionConfig, ExportConfig};
