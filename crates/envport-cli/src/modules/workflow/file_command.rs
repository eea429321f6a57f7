use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Append-only `name<<DELIMITER` file used for step outputs and exported variables.
pub(crate) struct FileCommand {
    path: PathBuf,
    delimiter: String,
}

impl FileCommand {
    pub(crate) fn new(path: &Path) -> Self {
        Self::with_delimiter(path, format!("{DELIMITER_PREFIX}{}", Uuid::now_v7()))
    }

    pub(crate) fn with_delimiter(path: &Path, delimiter: String) -> Self {
        Self {
            path: path.to_path_buf(),
            delimiter,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Fails if the pair cannot be written without breaking the heredoc framing.
    pub(crate) fn check_entry(&self, name: &str, value: &str) -> anyhow::Result<()> {
        if name.is_empty() {
            anyhow::bail!("name must not be empty");
        }
        if name.contains(['\n', '\r']) {
            anyhow::bail!("name '{}' must not contain line breaks", name.escape_debug());
        }
        if name.contains(&self.delimiter) {
            anyhow::bail!("name '{name}' must not contain the delimiter");
        }
        if value.contains(&self.delimiter) {
            anyhow::bail!("value for '{name}' must not contain the delimiter");
        }
        Ok(())
    }

    /// Appends every pair, or nothing when any of them is rejected.
    pub(crate) fn append_all(&self, entries: &[(&str, &str)]) -> anyhow::Result<()> {
        for (name, value) in entries {
            self.check_entry(name, value)?;
        }
        if entries.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| anyhow::anyhow!("failed to open {}: {}", self.path.display(), err))?;
        let delimiter = &self.delimiter;
        for (name, value) in entries {
            write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n").map_err(|err| {
                anyhow::anyhow!("failed to write {}: {}", self.path.display(), err)
            })?;
        }
        Ok(())
    }
}
