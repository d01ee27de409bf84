mod adapter;
mod cli;
mod error;
mod gitlab;
mod output;
mod state;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use adapter::InstanceVariableAdapter;
use cli::{Cli, Command};
use error::GlivarError;
use gitlab::GitlabClient;
use output::{VariableRow, render_table};
use state::VariableState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let token = cli.token.clone().ok_or_else(|| {
        GlivarError::Config(
            "No API token provided. Set GITLAB_TOKEN or use --token".to_string(),
        )
    })?;
    let client = match cli.base_url.clone() {
        Some(base_url) => GitlabClient::with_base_url(token, base_url),
        None => GitlabClient::new(token),
    }
    .map_err(GlivarError::from)?;

    client.verify_auth().await.map_err(GlivarError::from)?;
    tracing::debug!("GitLab authentication verified");

    let adapter = InstanceVariableAdapter::new(client);

    match cli.command {
        Command::Create(args) => {
            let mut state = VariableState::new(&args.key, &args.value);
            state.variable_type = args.variable_type;
            state.protected = args.protected;
            state.masked = args.masked;

            adapter.create(&mut state).await?;
            tracing::info!(key = %state.key, "instance variable created");
        }
        Command::Get(args) => {
            let state = adapter.import(&args.key).await?;
            println!(
                "{}",
                render_table(vec![VariableRow::from_state(&state, args.reveal)])
            );
        }
        Command::Update(args) => {
            let mut state = VariableState::new(&args.key, &args.value);
            state.id = Some(args.key.clone());
            state.variable_type = args.variable_type;
            state.protected = args.protected;
            state.masked = args.masked;

            adapter.update(&mut state).await?;
            tracing::info!(key = %state.key, "instance variable updated");
        }
        Command::Delete(args) => {
            let mut state = VariableState::new(&args.key, "");
            state.id = Some(args.key.clone());

            adapter.delete(&mut state).await?;
            tracing::info!(key = %args.key, "instance variable deleted");
        }
        Command::Import(args) => {
            let state = adapter.import(&args.key).await?;
            tracing::info!(key = %state.key, "instance variable imported");
            println!(
                "{}",
                render_table(vec![VariableRow::from_state(&state, false)])
            );
        }
        Command::List(args) => {
            let variables = adapter.client().list_variables().await?;
            let rows: Vec<VariableRow> = variables
                .iter()
                .map(|v| VariableRow::from_variable(v, args.reveal))
                .collect();
            println!("{}", render_table(rows));
        }
    }

    Ok(())
}
