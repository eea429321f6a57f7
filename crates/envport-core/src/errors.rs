#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvportError {
    #[error("input '{field}' must be one of true|True|TRUE|false|False|FALSE, got '{value}'")]
    InvalidBoolean { field: String, value: String },
    #[error("missing required configuration: {name}")]
    MissingConfig { name: String },
    #[error("invalid environment '{value}': {reason}")]
    InvalidEnvironment { value: String, reason: String },
}

impl EnvportError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingConfig { name: name.into() }
    }
}
