use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlivarError {
    #[error(transparent)]
    Gitlab(#[from] crate::gitlab::GitlabError),

    #[error("configuration error: {0}")]
    Config(String),
}
