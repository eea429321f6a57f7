use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::errors::EnvportError;

/// Matches the YAML 1.2 core schema boolean spellings exactly.
#[must_use]
pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&raw) {
        Some(true)
    } else if FALSE_LITERALS.contains(&raw) {
        Some(false)
    } else {
        None
    }
}

/// Parses a field that must hold a boolean when it is set at all.
pub fn parse_strict_bool(field: &str, raw: Option<&str>) -> Result<Option<bool>, EnvportError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    parse_bool_literal(raw)
        .map(Some)
        .ok_or_else(|| EnvportError::InvalidBoolean {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
