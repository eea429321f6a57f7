use std::path::PathBuf;

use envport_core::{parse_strict_bool, EnvironmentRef, EnvportError, ExportInputs};

use crate::cli_args::{ExportArgs, OpenArgs};

pub(crate) const EXPORT_TOGGLE_FIELD: &str = "export-env";

/// Export settings read once from flags and `INPUT_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub keys: Option<String>,
    pub mapping: Option<String>,
    pub toggle: Option<bool>,
}

impl ExportConfig {
    pub(crate) fn from_args(args: &ExportArgs) -> anyhow::Result<Self> {
        let toggle = parse_strict_bool(EXPORT_TOGGLE_FIELD, args.toggle.as_deref())?;
        Ok(Self {
            keys: non_blank(args.keys.as_deref()),
            mapping: non_blank(args.mapping.as_deref()),
            toggle,
        })
    }

    pub(crate) fn inputs(&self) -> ExportInputs<'_> {
        ExportInputs {
            keys: self.keys.as_deref(),
            mapping: self.mapping.as_deref(),
            toggle: self.toggle,
        }
    }
}

/// Everything `envport open` needs, validated before any command runs.
pub(crate) struct ActionConfig {
    pub environment: EnvironmentRef,
    pub export: ExportConfig,
    pub esc_bin: PathBuf,
    pub cloud_url: Option<String>,
    pub access_token: Option<String>,
    pub env_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

impl ActionConfig {
    pub(crate) fn from_args(args: OpenArgs) -> anyhow::Result<Self> {
        let environment = non_blank(args.environment.as_deref())
            .ok_or_else(|| EnvportError::missing("environment"))?;
        let environment = EnvironmentRef::parse(&environment)?;
        let export = ExportConfig::from_args(&args.export)?;
        let cloud_url = non_blank(args.esc.cloud_url.as_deref());
        if let Some(url) = cloud_url.as_deref() {
            ensure_cloud_url(url)?;
        }
        Ok(Self {
            environment,
            export,
            esc_bin: args.esc.esc_bin,
            cloud_url,
            access_token: non_blank(args.esc.access_token.as_deref()),
            env_file: args.sinks.env_file.filter(|path| !path.as_os_str().is_empty()),
            output_file: args
                .sinks
                .output_file
                .filter(|path| !path.as_os_str().is_empty()),
        })
    }
}

pub(crate) fn ensure_cloud_url(url: &str) -> anyhow::Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        anyhow::bail!("cloud-url must start with https:// or http://, got '{url}'");
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
