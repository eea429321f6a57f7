use clap::Args;
use std::path::PathBuf;

#[derive(Args, Clone)]
pub struct SinkArgs {
    #[arg(long, env = "GITHUB_ENV", help = "File receiving exported environment variables")]
    pub env_file: Option<PathBuf>,
    #[arg(long, env = "GITHUB_OUTPUT", help = "File receiving step outputs")]
    pub output_file: Option<PathBuf>,
}
