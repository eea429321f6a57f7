use crate::cli_args::*;
use crate::modules::export::actions::{emit_exports, missing_message};
use crate::modules::export::format::{build_report, is_valid_env_key, EntryStatus};
use crate::modules::system::{ActionConfig, ExportConfig};
use envport_core::{resolve, EnvironmentRef, EnvportError, ExportInputs, Snapshot};
use std::path::PathBuf;

fn open_args(environment: Option<&str>) -> OpenArgs {
    OpenArgs {
        environment: environment.map(str::to_string),
        export: ExportArgs::default(),
        esc: EscArgs {
            esc_bin: PathBuf::from("esc"),
            cloud_url: None,
            access_token: None,
        },
        sinks: SinkArgs {
            env_file: None,
            output_file: None,
        },
    }
}

#[test]
fn export_config_normalizes_blank_inputs() {
    let config = ExportConfig::from_args(&ExportArgs {
        keys: Some("  ".to_string()),
        mapping: Some(" X=A ".to_string()),
        toggle: Some("".to_string()),
    })
    .expect("valid config");
    assert_eq!(config.keys, None);
    assert_eq!(config.mapping.as_deref(), Some("X=A"));
    assert_eq!(config.toggle, None);
    assert_eq!(
        config.inputs(),
        ExportInputs {
            keys: None,
            mapping: Some("X=A"),
            toggle: None,
        }
    );
}

#[test]
fn export_config_rejects_ambiguous_toggle() {
    let err = ExportConfig::from_args(&ExportArgs {
        toggle: Some("yes".to_string()),
        ..Default::default()
    })
    .expect_err("strict boolean");
    let err = err.downcast::<EnvportError>().expect("envport error");
    assert!(matches!(err, EnvportError::InvalidBoolean { ref value, .. } if value == "yes"));
}

#[test]
fn action_config_requires_environment() {
    for environment in [None, Some(""), Some("   ")] {
        let err = ActionConfig::from_args(open_args(environment))
            .err()
            .expect("missing environment");
        assert_eq!(
            err.to_string(),
            "missing required configuration: environment"
        );
    }
}

#[test]
fn action_config_validates_before_running_anything() {
    let mut args = open_args(Some("acme/app/prod"));
    args.esc.cloud_url = Some("api.example.com".to_string());
    let err = ActionConfig::from_args(args).err().expect("bad cloud url");
    assert!(err.to_string().contains("cloud-url"));

    let mut args = open_args(Some("acme/app/prod"));
    args.export.toggle = Some("TRUE".to_string());
    args.esc.access_token = Some("  ".to_string());
    args.sinks.env_file = Some(PathBuf::new());
    let config = ActionConfig::from_args(args).expect("valid config");
    assert_eq!(config.environment.to_string(), "acme/app/prod");
    assert_eq!(config.export.toggle, Some(true));
    assert_eq!(config.access_token, None);
    assert_eq!(config.env_file, None);
}

#[test]
fn emit_exports_writes_outputs_and_env() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("output");
    let env = dir.path().join("env");
    let snapshot = Snapshot::parse("A=1\nB=two=2\n");
    let (_, result) = resolve(
        &snapshot,
        ExportInputs {
            mapping: Some("X=A,B,MISSING"),
            ..Default::default()
        },
    );

    let exported = emit_exports(&result, Some(&output), Some(&env)).expect("emit");
    assert_eq!(exported, 2);

    for path in [&output, &env] {
        let contents = std::fs::read_to_string(path).expect("read sink");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("B<<ghadelimiter_"));
        assert_eq!(lines[1], "two=2");
        assert!(lines[3].starts_with("X<<ghadelimiter_"));
        assert_eq!(lines[4], "1");
        assert!(!contents.contains("MISSING"));
    }
}

#[test]
fn emit_exports_rejects_before_touching_sinks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("output");
    let env = dir.path().join("env");
    let snapshot = Snapshot::parse("A=1\nB=2\n");
    let (_, result) = resolve(
        &snapshot,
        ExportInputs {
            mapping: Some("A,B\nC=B"),
            ..Default::default()
        },
    );
    assert_eq!(result.resolved().count(), 2);

    let err = emit_exports(&result, Some(&output), Some(&env)).expect_err("line break in name");
    assert!(err.to_string().contains("line breaks"));
    assert!(!output.exists());
    assert!(!env.exists());
}

#[test]
fn emit_exports_without_sinks_counts_only() {
    let snapshot = Snapshot::parse("A=1");
    let (_, result) = resolve(&snapshot, ExportInputs::default());
    assert_eq!(emit_exports(&result, None, None).expect("emit"), 1);
}

#[test]
fn missing_message_names_rename_target() {
    let environment = EnvironmentRef::parse("acme/prod").expect("environment");
    let (_, result) = resolve(
        &Snapshot::new(),
        ExportInputs {
            mapping: Some("X=A,B"),
            ..Default::default()
        },
    );
    let messages: Vec<String> = result
        .unresolved()
        .map(|entry| missing_message(entry, &environment))
        .collect();
    assert_eq!(
        messages,
        vec![
            "key 'B' was not found in environment acme/prod".to_string(),
            "key 'A' (exported as 'X') was not found in environment acme/prod".to_string(),
        ]
    );
}

#[test]
fn report_redacts_values_by_default() {
    let (snapshot, parsed) = Snapshot::parse_with_report("A=secret\nbroken\n");
    let (spec, result) = resolve(
        &snapshot,
        ExportInputs {
            keys: Some("A,B"),
            ..Default::default()
        },
    );

    let report = build_report(&spec, &result, parsed, false);
    assert_eq!(report.skipped_lines, 1);
    assert_eq!(report.entries[0].status, EntryStatus::Exported);
    assert_eq!(report.entries[0].value.as_deref(), Some("***"));
    assert_eq!(report.entries[1].status, EntryStatus::Missing);
    assert_eq!(report.entries[1].value, None);

    let json = serde_json::to_value(build_report(&spec, &result, parsed, true)).expect("json");
    assert_eq!(json["entries"][0]["value"], "secret");
    assert_eq!(json["entries"][1]["status"], "missing");
    assert!(json["entries"][1].get("value").is_none());
}

#[test]
fn env_key_validation() {
    assert!(is_valid_env_key("DB_URL"));
    assert!(is_valid_env_key("_private1"));
    assert!(!is_valid_env_key("1ABC"));
    assert!(!is_valid_env_key("my-key"));
    assert!(!is_valid_env_key(""));
    assert!(is_valid_env_key("_"));
    assert!(!is_valid_env_key("A B"));
    assert!(!is_valid_env_key("CAFÉ"));
}
