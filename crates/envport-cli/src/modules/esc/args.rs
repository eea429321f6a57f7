use clap::Args;
use std::path::PathBuf;

#[derive(Args, Clone)]
pub struct EscArgs {
    #[arg(long, env = "ESC_BIN", default_value = crate::DEFAULT_ESC_BIN, help = "Secrets CLI executable")]
    pub esc_bin: PathBuf,
    #[arg(long, env = "INPUT_CLOUD-URL", help = "Backend URL passed to `esc login`")]
    pub cloud_url: Option<String>,
    #[arg(
        long,
        env = "PULUMI_ACCESS_TOKEN",
        hide_env_values = true,
        help = "Access token used to log in before opening the environment"
    )]
    pub access_token: Option<String>,
}
