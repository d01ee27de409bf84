use std::fmt;

use crate::gitlab::{InstanceVariable, VariableType};

/// Locally managed state for one instance variable.
///
/// The identity slot doubles as the remote key: it is set after a successful
/// create (or import) and cleared when a read discovers the remote object is
/// gone. A state with no id represents the absent resource.
#[derive(Clone, PartialEq, Eq)]
pub struct VariableState {
    pub id: Option<String>,
    pub key: String,
    pub value: String,
    pub variable_type: VariableType,
    pub protected: bool,
    pub masked: bool,
}

impl VariableState {
    /// New desired state with the field defaults (env_var, unprotected,
    /// unmasked).
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            value: value.into(),
            variable_type: VariableType::default(),
            protected: false,
            masked: false,
        }
    }

    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }

    /// Signals that the remote resource no longer exists.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Overwrites every field from a fetched remote object.
    pub fn set_all(&mut self, variable: &InstanceVariable) {
        self.key = variable.key.clone();
        self.value = variable.value.clone();
        self.variable_type = variable.variable_type;
        self.protected = variable.protected;
        self.masked = variable.masked;
    }
}

impl fmt::Debug for VariableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableState")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("value", &"[REDACTED]")
            .field("variable_type", &self.variable_type)
            .field("protected", &self.protected)
            .field("masked", &self.masked)
            .finish()
    }
}

/// Error carrier returned by adapter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.summary, detail),
            None => f.write_str(&self.summary),
        }
    }
}

impl std::error::Error for Diagnostic {}
