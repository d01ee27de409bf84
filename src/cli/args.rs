use clap::{Parser, Subcommand};

use crate::gitlab::VariableType;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(long, global = true, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API endpoint, e.g. https://gitlab.example.com/api/v4
    #[arg(long, global = true, env = "GITLAB_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an instance-level CI/CD variable
    Create(CreateArgs),
    /// Show one variable by key
    Get(GetArgs),
    /// Update an existing variable (the key itself cannot change)
    Update(UpdateArgs),
    /// Delete a variable by key
    Delete(DeleteArgs),
    /// Adopt an existing remote variable by its key
    Import(ImportArgs),
    /// List all instance-level variables
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    pub key: String,

    #[arg(long, env = "GLIVAR_VALUE", hide_env_values = true)]
    pub value: String,

    #[arg(long, default_value = "env_var")]
    pub variable_type: VariableType,

    #[arg(long)]
    pub protected: bool,

    #[arg(long)]
    pub masked: bool,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    pub key: String,

    /// Print the variable value instead of redacting it
    #[arg(long)]
    pub reveal: bool,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    pub key: String,

    #[arg(long, env = "GLIVAR_VALUE", hide_env_values = true)]
    pub value: String,

    #[arg(long, default_value = "env_var")]
    pub variable_type: VariableType,

    #[arg(long)]
    pub protected: bool,

    #[arg(long)]
    pub masked: bool,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    pub key: String,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    pub key: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print variable values instead of redacting them
    #[arg(long)]
    pub reveal: bool,
}
