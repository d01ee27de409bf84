mod client;
mod error;
mod types;

pub use client::GitlabClient;
pub use error::GitlabError;
pub use types::{
    CreateVariableRequest, InstanceVariable, UpdateVariableRequest, VariableType,
    is_valid_variable_key,
};
