use std::io::{self, Write};

pub(crate) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub(crate) fn format_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

/// Mask commands for a secret, one per non-empty line.
pub(crate) fn mask_commands(secret: &str) -> Vec<String> {
    secret
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format_command("add-mask", line))
        .collect()
}

fn issue(line: &str) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

pub(crate) fn add_mask(secret: &str) {
    for line in mask_commands(secret) {
        issue(&line);
    }
}

pub(crate) fn warning(message: &str) {
    issue(&format_command("warning", message));
}

pub(crate) fn error(message: &str) {
    issue(&format_command("error", message));
}
