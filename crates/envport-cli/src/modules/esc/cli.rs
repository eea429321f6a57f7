use std::path::{Path, PathBuf};
use std::process::Stdio;

use envport_core::EnvironmentRef;
use tokio::process::Command;
use tracing::{debug, info};
use zeroize::{Zeroize, Zeroizing};

use crate::ACCESS_TOKEN_ENV;

/// Runs the external secrets CLI. Every failure is terminal; nothing is retried.
pub(crate) struct EscCli {
    program: PathBuf,
    access_token: Option<String>,
}

impl EscCli {
    pub(crate) fn new(program: &Path, access_token: Option<String>) -> Self {
        Self {
            program: program.to_path_buf(),
            access_token,
        }
    }

    pub(crate) async fn login(&self, cloud_url: Option<&str>) -> anyhow::Result<()> {
        let mut args = vec!["login"];
        if let Some(url) = cloud_url {
            args.push(url);
        }
        info!(program = %self.program.display(), cloud_url = ?cloud_url, "logging in");
        let status = self
            .command(&args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|err| self.spawn_error(&args, err))?;
        if !status.success() {
            anyhow::bail!(
                "{} {} failed ({})",
                self.program.display(),
                args.join(" "),
                status
            );
        }
        Ok(())
    }

    /// Returns the environment as dotenv text, wiped when dropped.
    pub(crate) async fn open_environment(
        &self,
        environment: &EnvironmentRef,
    ) -> anyhow::Result<Zeroizing<String>> {
        let reference = environment.to_string();
        let args = ["env", "open", reference.as_str(), "--format", "dotenv"];
        info!(environment = %reference, "opening environment");
        let output = self
            .command(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|err| self.spawn_error(&args, err))?;
        if !output.status.success() {
            anyhow::bail!(
                "failed to open environment {} ({})",
                reference,
                output.status
            );
        }
        debug!(bytes = output.stdout.len(), "environment opened");
        match String::from_utf8(output.stdout) {
            Ok(text) => Ok(Zeroizing::new(text)),
            Err(err) => {
                err.into_bytes().zeroize();
                anyhow::bail!("environment {} is not valid UTF-8", reference)
            }
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(token) = &self.access_token {
            cmd.env(ACCESS_TOKEN_ENV, token);
        }
        cmd
    }

    fn spawn_error(&self, args: &[&str], err: std::io::Error) -> anyhow::Error {
        anyhow::anyhow!(
            "failed to start {} {}: {}",
            self.program.display(),
            args.join(" "),
            err
        )
    }
}
