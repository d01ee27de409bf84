//! glivar - GitLab instance variable manager
//!
//! A library for managing the lifecycle of instance-level CI/CD variables
//! against the GitLab REST API.

pub mod adapter;
pub mod gitlab;
pub mod output;
pub mod state;

pub use adapter::InstanceVariableAdapter;
pub use gitlab::{GitlabClient, GitlabError, InstanceVariable, VariableType};
pub use state::{Diagnostic, VariableState};
