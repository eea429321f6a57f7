use std::fs;
use std::io::{self, Read};
use std::path::Path;

use envport_core::{resolve, EnvironmentRef, ExportEntry, ExportResult, Snapshot};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::cli_args::*;
use crate::modules::esc::EscCli;
use crate::modules::export::format::{build_report, is_valid_env_key, print_report_table};
use crate::modules::system::{ActionConfig, ExportConfig};
use crate::modules::workflow::{add_mask, warning, FileCommand};

pub(crate) async fn handle_open(args: OpenArgs) -> anyhow::Result<()> {
    let config = ActionConfig::from_args(args)?;
    let esc = EscCli::new(&config.esc_bin, config.access_token.clone());

    if let Some(token) = config.access_token.as_deref() {
        add_mask(token);
        esc.login(config.cloud_url.as_deref()).await?;
    } else {
        debug!("no access token configured, relying on existing login");
    }

    let raw = esc.open_environment(&config.environment).await?;
    let (snapshot, parsed) = Snapshot::parse_with_report(&raw);
    if parsed.skipped > 0 {
        debug!(skipped = parsed.skipped, "ignored malformed snapshot lines");
    }
    for (_, value) in snapshot.iter() {
        add_mask(value);
    }

    let (spec, result) = resolve(&snapshot, config.export.inputs());
    for entry in result.unresolved() {
        warning(&missing_message(entry, &config.environment));
    }

    let exported = emit_exports(
        &result,
        config.output_file.as_deref(),
        config.env_file.as_deref(),
    )?;
    info!(
        environment = %config.environment,
        keys = snapshot.len(),
        exported,
        missing = result.len() - exported,
        remainder = spec.export_remainder,
        "environment exported"
    );
    Ok(())
}

pub(crate) fn handle_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let export = ExportConfig::from_args(&args.export)?;
    let raw = read_snapshot_source(&args.snapshot)?;
    let (snapshot, parsed) = Snapshot::parse_with_report(&raw);
    let (spec, result) = resolve(&snapshot, export.inputs());
    for entry in result.unresolved() {
        warn!(destination = %entry.destination, source = %entry.source, "source key not found");
    }

    let report = build_report(&spec, &result, parsed, args.show_values);
    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Table => print_report_table(&report),
    }
    Ok(())
}

/// Writes every resolved pair to the configured sinks. Values must already be masked.
///
/// Every pair is checked against every sink first, so a rejected pair leaves
/// both files untouched.
pub(crate) fn emit_exports(
    result: &ExportResult,
    output_file: Option<&Path>,
    env_file: Option<&Path>,
) -> anyhow::Result<usize> {
    let outputs = output_file.map(FileCommand::new);
    let env = env_file.map(FileCommand::new);
    if outputs.is_none() {
        debug!("no output file configured, skipping step outputs");
    }
    if env.is_none() {
        debug!("no env file configured, skipping environment variables");
    }

    let pairs: Vec<(&str, &str)> = result.resolved().collect();
    for (name, _) in &pairs {
        if !is_valid_env_key(name) {
            warn!(name = %name, "exported name is not a valid shell identifier");
        }
    }
    let sinks: Vec<&FileCommand> = outputs.iter().chain(env.iter()).collect();
    for sink in &sinks {
        for (name, value) in &pairs {
            sink.check_entry(name, value)?;
        }
    }
    for sink in &sinks {
        sink.append_all(&pairs)?;
        debug!(path = %sink.path().display(), exported = pairs.len(), "wrote file command");
    }
    Ok(pairs.len())
}

pub(crate) fn missing_message(entry: &ExportEntry, environment: &EnvironmentRef) -> String {
    if entry.destination == entry.source {
        format!(
            "key '{}' was not found in environment {}",
            entry.source, environment
        )
    } else {
        format!(
            "key '{}' (exported as '{}') was not found in environment {}",
            entry.source, entry.destination, environment
        )
    }
}

fn read_snapshot_source(path: &Path) -> anyhow::Result<Zeroizing<String>> {
    if path == Path::new("-") {
        let mut buffer = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|err| anyhow::anyhow!("failed to read {}: {}", path.display(), err))
}
