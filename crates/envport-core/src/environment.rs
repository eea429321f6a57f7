use std::fmt;
use std::str::FromStr;

use crate::errors::EnvportError;

/// An environment reference of the form `[<org>/][<project>/]<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRef {
    pub org: Option<String>,
    pub project: Option<String>,
    pub name: String,
}

impl EnvironmentRef {
    pub fn parse(raw: &str) -> Result<Self, EnvportError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(EnvportError::missing("environment"));
        }
        let invalid = |reason: &str| EnvportError::InvalidEnvironment {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let segments: Vec<&str> = value.split('/').collect();
        if segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(invalid("path segments must not be empty"));
        }
        if segments
            .iter()
            .any(|segment| segment.chars().any(char::is_whitespace))
        {
            return Err(invalid("whitespace is not allowed"));
        }
        match segments.as_slice() {
            [name] => Ok(Self {
                org: None,
                project: None,
                name: name.to_string(),
            }),
            [org, name] => Ok(Self {
                org: Some(org.to_string()),
                project: None,
                name: name.to_string(),
            }),
            [org, project, name] => Ok(Self {
                org: Some(org.to_string()),
                project: Some(project.to_string()),
                name: name.to_string(),
            }),
            _ => Err(invalid("expected at most org/project/name")),
        }
    }
}

impl FromStr for EnvironmentRef {
    type Err = EnvportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EnvironmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(org) = &self.org {
            write!(f, "{org}/")?;
        }
        if let Some(project) = &self.project {
            write!(f, "{project}/")?;
        }
        write!(f, "{}", self.name)
    }
}
