use std::collections::BTreeMap;
use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::constants::MAPPING_SEPARATOR;

/// Key/value pairs produced by opening an environment.
///
/// Keys are unique and case-sensitive. Every value is treated as a secret:
/// `Debug` never prints values, and values are wiped when replaced or when
/// the snapshot drops.
#[derive(Default, PartialEq, Eq)]
pub struct Snapshot {
    values: BTreeMap<String, String>,
}

/// Counters collected while parsing, for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub lines: usize,
    pub skipped: usize,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dotenv-style `KEY=VALUE` text. Malformed lines are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_report(raw).0
    }

    #[must_use]
    pub fn parse_with_report(raw: &str) -> (Self, ParseReport) {
        let mut snapshot = Self::new();
        let mut report = ParseReport::default();
        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            report.lines += 1;
            match parse_line(line) {
                Some((key, value)) => snapshot.insert(key, value),
                None => report.skipped += 1,
            }
        }
        (snapshot, report)
    }

    /// Inserts a pair. A replaced value is wiped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if let Some(mut replaced) = self.values.insert(key.into(), value.into()) {
            replaced.zeroize();
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes back to one `KEY="VALUE"` line per entry.
    ///
    /// Values are always wrapped in quotes so that a value which itself starts
    /// or ends with `"` survives another pass through [`Snapshot::parse`].
    #[must_use]
    pub fn to_dotenv(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::new());
        for (key, value) in &self.values {
            out.push_str(key);
            out.push(MAPPING_SEPARATOR);
            out.push('"');
            out.push_str(value);
            out.push_str("\"\n");
        }
        out
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(MAPPING_SEPARATOR)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        for value in self.values.values_mut() {
            value.zeroize();
        }
    }
}
