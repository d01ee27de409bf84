//! Lifecycle operations for the instance variable resource.
//!
//! Each operation is one blocking round trip against the GitLab API that
//! translates between [`VariableState`] and the wire types. There is no
//! state machine beyond {absent, present}: the four operations plus the
//! not-found transition inside [`InstanceVariableAdapter::read`] are the
//! only transitions.

use crate::gitlab::{
    CreateVariableRequest, GitlabClient, GitlabError, UpdateVariableRequest,
};
use crate::state::{Diagnostic, VariableState};

const MASKED_REQUIREMENTS_URL: &str =
    "https://docs.gitlab.com/ee/ci/variables/#mask-a-cicd-variable";

pub struct InstanceVariableAdapter {
    client: GitlabClient,
}

impl InstanceVariableAdapter {
    pub fn new(client: GitlabClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GitlabClient {
        &self.client
    }

    /// Creates the remote variable from all five fields, records the key as
    /// the local identity, then reads back to normalize state.
    pub async fn create(&self, state: &mut VariableState) -> Result<(), Diagnostic> {
        let options = CreateVariableRequest {
            key: state.key.clone(),
            value: state.value.clone(),
            variable_type: state.variable_type,
            protected: state.protected,
            masked: state.masked,
        };

        self.client
            .create_variable(&options)
            .await
            .map_err(|e| augment_client_error(state, e))?;

        state.id = Some(state.key.clone());

        self.read(state).await
    }

    /// Fetches the remote object by the local identity and overwrites all
    /// five fields. A remote 404 is not an error: the identity is cleared
    /// to signal out-of-band deletion and the operation succeeds.
    pub async fn read(&self, state: &mut VariableState) -> Result<(), Diagnostic> {
        let Some(key) = state.id.clone() else {
            return Err(Diagnostic::new(
                "cannot read an instance variable without an id",
            ));
        };

        match self.client.get_variable(&key).await {
            Ok(variable) => {
                state.set_all(&variable);
                Ok(())
            }
            Err(GitlabError::NotFound { .. }) => {
                tracing::debug!(key = %key, "instance variable not found, removing from state");
                state.clear_id();
                Ok(())
            }
            Err(err) => Err(augment_client_error(state, err)),
        }
    }

    /// Sends everything except the key (which is immutable) and resyncs via
    /// [`InstanceVariableAdapter::read`].
    pub async fn update(&self, state: &mut VariableState) -> Result<(), Diagnostic> {
        let options = UpdateVariableRequest {
            value: state.value.clone(),
            variable_type: state.variable_type,
            protected: state.protected,
            masked: state.masked,
        };

        self.client
            .update_variable(&state.key, &options)
            .await
            .map_err(|e| augment_client_error(state, e))?;

        self.read(state).await
    }

    /// Removes the remote variable and clears the local identity.
    pub async fn delete(&self, state: &mut VariableState) -> Result<(), Diagnostic> {
        let Some(key) = state.id.clone() else {
            return Ok(());
        };

        self.client
            .remove_variable(&key)
            .await
            .map_err(|e| augment_client_error(state, e))?;

        state.clear_id();
        Ok(())
    }

    /// Passthrough import: the external identifier is used directly as the
    /// key, then a read fills in the remaining fields.
    pub async fn import(&self, id: &str) -> Result<VariableState, Diagnostic> {
        let mut state = VariableState::new(id, "");
        state.id = Some(id.to_string());

        self.read(&mut state).await?;

        if !state.is_present() {
            return Err(Diagnostic::new(format!(
                "cannot import non-existent instance variable '{}'",
                id
            )));
        }

        Ok(state)
    }
}

/// Wraps a client error into a diagnostic. A 400 complaining about the value
/// of a masked variable almost always means the value fails GitLab's masking
/// requirements, so that case carries a hint.
pub fn augment_client_error(state: &VariableState, err: GitlabError) -> Diagnostic {
    if state.masked && is_invalid_value_error(&err) {
        return Diagnostic::new(format!("invalid value for a masked variable: {}", err))
            .with_detail(format!(
                "check the masked variable requirements: {}",
                MASKED_REQUIREMENTS_URL
            ));
    }
    Diagnostic::new(err.to_string())
}

fn is_invalid_value_error(err: &GitlabError) -> bool {
    matches!(err, GitlabError::Api { status: 400, message } if message.contains("value"))
}
