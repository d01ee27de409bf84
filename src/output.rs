use tabled::{Table, Tabled};

use crate::gitlab::InstanceVariable;
use crate::state::VariableState;

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Tabled)]
pub struct VariableRow {
    pub key: String,
    pub value: String,
    #[tabled(rename = "type")]
    pub variable_type: String,
    pub protected: bool,
    pub masked: bool,
}

impl VariableRow {
    pub fn from_variable(variable: &InstanceVariable, reveal: bool) -> Self {
        Self {
            key: variable.key.clone(),
            value: if reveal {
                variable.value.clone()
            } else {
                REDACTED.to_string()
            },
            variable_type: variable.variable_type.to_string(),
            protected: variable.protected,
            masked: variable.masked,
        }
    }

    pub fn from_state(state: &VariableState, reveal: bool) -> Self {
        Self {
            key: state.key.clone(),
            value: if reveal {
                state.value.clone()
            } else {
                REDACTED.to_string()
            },
            variable_type: state.variable_type.to_string(),
            protected: state.protected,
            masked: state.masked,
        }
    }
}

pub fn render_table(rows: Vec<VariableRow>) -> String {
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::VariableType;

    fn sample_variable() -> InstanceVariable {
        InstanceVariable {
            key: "DB_PASS".to_string(),
            value: "super_secret".to_string(),
            variable_type: VariableType::EnvVar,
            protected: true,
            masked: true,
        }
    }

    #[test]
    fn test_row_redacts_value_by_default() {
        let row = VariableRow::from_variable(&sample_variable(), false);
        assert_eq!(row.value, REDACTED);
        assert_eq!(row.key, "DB_PASS");
        assert_eq!(row.variable_type, "env_var");
    }

    #[test]
    fn test_row_reveals_value_when_asked() {
        let row = VariableRow::from_variable(&sample_variable(), true);
        assert_eq!(row.value, "super_secret");
    }

    #[test]
    fn test_render_table_contains_headers_and_key() {
        let rows = vec![VariableRow::from_variable(&sample_variable(), false)];
        let table = render_table(rows);

        assert!(table.contains("key"));
        assert!(table.contains("DB_PASS"));
        assert!(!table.contains("super_secret"));
    }
}
