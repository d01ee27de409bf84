use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GitlabError;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

const MAX_KEY_LENGTH: usize = 255;

/// Variable kind as exposed to CI jobs: a plain environment variable or a
/// file whose path is placed in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    #[default]
    EnvVar,
    File,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::EnvVar => "env_var",
            VariableType::File => "file",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = GitlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "env_var" => Ok(VariableType::EnvVar),
            "file" => Ok(VariableType::File),
            other => Err(GitlabError::InvalidType {
                value: other.to_string(),
            }),
        }
    }
}

/// An instance-level CI/CD variable as returned by the GitLab API.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceVariable {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub variable_type: VariableType,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub masked: bool,
}

impl fmt::Debug for InstanceVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceVariable")
            .field("key", &self.key)
            .field("value", &"[REDACTED]")
            .field("variable_type", &self.variable_type)
            .field("protected", &self.protected)
            .field("masked", &self.masked)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateVariableRequest {
    pub key: String,
    pub value: String,
    pub variable_type: VariableType,
    pub protected: bool,
    pub masked: bool,
}

/// Update payload. `key` is immutable after creation and therefore has no
/// field here; the target variable is addressed by the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateVariableRequest {
    pub value: String,
    pub variable_type: VariableType,
    pub protected: bool,
    pub masked: bool,
}

// NOTE: Same rules the GitLab UI enforces for variable names
pub fn is_valid_variable_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
