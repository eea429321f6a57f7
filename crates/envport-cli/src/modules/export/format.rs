use envport_core::{ExportResult, ExportSpec, ParseReport};
use serde::Serialize;
use zeroize::Zeroize;

pub(crate) const REDACTED: &str = "***";

#[derive(Serialize)]
pub(crate) struct ExportReport {
    pub export_remainder: bool,
    pub lines: usize,
    pub skipped_lines: usize,
    pub entries: Vec<ExportReportEntry>,
}

#[derive(Serialize)]
pub(crate) struct ExportReportEntry {
    pub destination: String,
    pub source: String,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Drop for ExportReportEntry {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub(crate) enum EntryStatus {
    Exported,
    Missing,
}

impl EntryStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Exported => "exported",
            Self::Missing => "missing",
        }
    }
}

pub(crate) fn build_report(
    spec: &ExportSpec,
    result: &ExportResult,
    parsed: ParseReport,
    show_values: bool,
) -> ExportReport {
    let entries = result
        .entries
        .iter()
        .map(|entry| ExportReportEntry {
            destination: entry.destination.clone(),
            source: entry.source.clone(),
            status: if entry.is_resolved() {
                EntryStatus::Exported
            } else {
                EntryStatus::Missing
            },
            value: entry.value.as_ref().map(|value| {
                if show_values {
                    value.clone()
                } else {
                    REDACTED.to_string()
                }
            }),
        })
        .collect();
    ExportReport {
        export_remainder: spec.export_remainder,
        lines: parsed.lines,
        skipped_lines: parsed.skipped,
        entries,
    }
}

pub(crate) fn print_report_table(report: &ExportReport) {
    let mut dest_width = "DESTINATION".len();
    let mut source_width = "SOURCE".len();
    for entry in &report.entries {
        dest_width = dest_width.max(entry.destination.len());
        source_width = source_width.max(entry.source.len());
    }

    println!(
        "{:<dest_width$}  {:<source_width$}  {:<8}  VALUE",
        "DESTINATION", "SOURCE", "STATUS"
    );
    for entry in &report.entries {
        println!(
            "{:<dest_width$}  {:<source_width$}  {:<8}  {}",
            entry.destination,
            entry.source,
            entry.status.as_str(),
            entry.value.as_deref().unwrap_or("-"),
        );
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_valid_env_key(key: &str) -> bool {
    match key.as_bytes() {
        [first, rest @ ..] => {
            (first.is_ascii_alphabetic() || *first == b'_')
                && rest
                    .iter()
                    .all(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
        }
        [] => false,
    }
}
