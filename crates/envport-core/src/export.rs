use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{LIST_SEPARATOR, MAPPING_SEPARATOR, WILDCARD_TOKEN};
use crate::snapshot::Snapshot;
use crate::toggle::parse_bool_literal;

/// Raw export configuration as supplied by the user.
///
/// `keys` is a comma separated key list, `mapping` is either a boolean literal
/// or a mapping string (`*`, `KEY`, `TO=FROM` tokens), and `toggle` is a boolean
/// that has already been parsed strictly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportInputs<'a> {
    pub keys: Option<&'a str>,
    pub mapping: Option<&'a str>,
    pub toggle: Option<bool>,
}

/// Which snapshot keys are exported, and under which names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSpec {
    /// destination → source
    pub mappings: BTreeMap<String, String>,
    pub export_remainder: bool,
}

impl ExportSpec {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn remainder() -> Self {
        Self {
            mappings: BTreeMap::new(),
            export_remainder: true,
        }
    }

    /// Identity mapping for each key of a comma separated list.
    #[must_use]
    pub fn from_keys(raw: &str) -> Self {
        let mut spec = Self::none();
        for key in tokens(raw) {
            spec.insert(key, key);
        }
        spec
    }

    /// Parses a mapping string. Later tokens replace earlier ones with the
    /// same destination.
    #[must_use]
    pub fn parse_mapping(raw: &str) -> Self {
        let mut spec = Self::none();
        for token in tokens(raw) {
            if token == WILDCARD_TOKEN {
                spec.export_remainder = true;
                continue;
            }
            let Some((destination, source)) = token.split_once(MAPPING_SEPARATOR) else {
                spec.insert(token, token);
                continue;
            };
            match (destination.trim(), source.trim()) {
                ("", "") => {}
                ("", name) | (name, "") => spec.insert(name, name),
                (destination, source) => spec.insert(destination, source),
            }
        }
        spec
    }

    /// Applies the precedence rules between the mapping string, the boolean
    /// toggle and the key list.
    #[must_use]
    pub fn resolve_inputs(inputs: ExportInputs<'_>) -> Self {
        let keys = non_empty(inputs.keys);
        match non_empty(inputs.mapping) {
            Some(mapping) => match parse_bool_literal(mapping) {
                None => Self::parse_mapping(mapping),
                Some(enabled) => Self::toggled(enabled, keys),
            },
            None => match (inputs.toggle, keys) {
                (Some(enabled), keys) => Self::toggled(enabled, keys),
                (None, Some(keys)) => Self::from_keys(keys),
                (None, None) => Self::remainder(),
            },
        }
    }

    fn toggled(enabled: bool, keys: Option<&str>) -> Self {
        match (enabled, keys) {
            (false, _) => Self::none(),
            (true, Some(keys)) => Self::from_keys(keys),
            (true, None) => Self::remainder(),
        }
    }

    /// Sets `destination` to read from `source`.
    pub fn insert(&mut self, destination: &str, source: &str) {
        self.mappings
            .insert(destination.to_string(), source.to_string());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty() && !self.export_remainder
    }

    /// Adds an identity mapping for every snapshot key that is neither an
    /// explicit source nor an explicit destination.
    #[must_use]
    pub fn expand(&self, snapshot: &Snapshot) -> Self {
        let mut expanded = self.clone();
        if !self.export_remainder {
            return expanded;
        }
        let sources: BTreeSet<&str> = self.mappings.values().map(String::as_str).collect();
        for key in snapshot.keys() {
            if sources.contains(key) || self.mappings.contains_key(key) {
                continue;
            }
            expanded.insert(key, key);
        }
        expanded
    }

    /// Looks up every mapping in the snapshot, in destination order.
    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> ExportResult {
        let entries = self
            .mappings
            .iter()
            .map(|(destination, source)| ExportEntry {
                destination: destination.clone(),
                source: source.clone(),
                value: snapshot.get(source).map(str::to_string),
            })
            .collect();
        ExportResult { entries }
    }
}

/// One destination/source pair and the value found for it, if any.
///
/// The value is a copy of a snapshot secret and is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExportEntry {
    pub destination: String,
    pub source: String,
    pub value: Option<String>,
}

impl ExportEntry {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Debug for ExportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportEntry")
            .field("destination", &self.destination)
            .field("source", &self.source)
            .field("value", &self.value.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportResult {
    pub entries: Vec<ExportEntry>,
}

impl ExportResult {
    /// `(destination, value)` pairs that can be emitted.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| {
            entry
                .value
                .as_deref()
                .map(|value| (entry.destination.as_str(), value))
        })
    }

    /// Entries whose source is missing from the snapshot.
    pub fn unresolved(&self) -> impl Iterator<Item = &ExportEntry> {
        self.entries.iter().filter(|entry| !entry.is_resolved())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the export configuration against a snapshot.
///
/// Missing sources are reported in the result, never as an error.
#[must_use]
pub fn resolve(snapshot: &Snapshot, inputs: ExportInputs<'_>) -> (ExportSpec, ExportResult) {
    let spec = ExportSpec::resolve_inputs(inputs).expand(snapshot);
    let result = spec.apply(snapshot);
    debug!(
        mappings = spec.mappings.len(),
        remainder = spec.export_remainder,
        unresolved = result.unresolved().count(),
        "resolved exports"
    );
    (spec, result)
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
