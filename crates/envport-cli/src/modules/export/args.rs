use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::cli_args::{EscArgs, SinkArgs};

#[derive(Args, Clone, Default)]
pub struct ExportArgs {
    #[arg(long, env = "INPUT_KEYS", help = "Comma separated keys to export")]
    pub keys: Option<String>,
    #[arg(
        long = "export-environment-variables",
        env = "INPUT_EXPORT-ENVIRONMENT-VARIABLES",
        help = "true/false, or a mapping such as `TO=FROM,KEY,*`"
    )]
    pub mapping: Option<String>,
    #[arg(
        long = "export-env",
        env = "INPUT_EXPORT-ENV",
        help = "Legacy boolean switch, used when no mapping is given"
    )]
    pub toggle: Option<String>,
}

#[derive(Args)]
pub struct OpenArgs {
    #[arg(long, env = "INPUT_ENVIRONMENT", help = "Environment to open ([org/][project/]name)")]
    pub environment: Option<String>,
    #[command(flatten)]
    pub export: ExportArgs,
    #[command(flatten)]
    pub esc: EscArgs,
    #[command(flatten)]
    pub sinks: SinkArgs,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[arg(long, help = "Dotenv snapshot to read, or - for stdin")]
    pub snapshot: PathBuf,
    #[command(flatten)]
    pub export: ExportArgs,
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,
    #[arg(long, help = "Print values instead of redacting them")]
    pub show_values: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}
