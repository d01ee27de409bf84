use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};

use super::GitlabError;
use super::types::{
    CreateVariableRequest, DEFAULT_PAGE_SIZE, InstanceVariable, UpdateVariableRequest,
    is_valid_variable_key,
};

const GITLAB_API_BASE: &str = "https://gitlab.com/api/v4";
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

#[derive(Clone)]
pub struct GitlabClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitlabClient {
    pub fn new(token: String) -> Result<Self, GitlabError> {
        Self::with_base_url(token, GITLAB_API_BASE.to_string())
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(token: String, base_url: String) -> Result<Self, GitlabError> {
        let mut headers = HeaderMap::new();
        let mut header_value =
            HeaderValue::from_str(&token).map_err(|_| GitlabError::Auth {
                message: "Invalid token format".to_string(),
            })?;
        header_value.set_sensitive(true);
        headers.insert(PRIVATE_TOKEN_HEADER, header_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GitlabError::Network)?;

        Ok(Self { client, base_url })
    }

    #[allow(dead_code)] // NOTE: Used by unit tests
    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    pub async fn verify_auth(&self) -> Result<(), GitlabError> {
        let url = format!("{}/user", self.base_url);

        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            return Ok(());
        }

        let message = Self::error_message(response).await;
        Err(GitlabError::Auth { message })
    }

    /// `POST /admin/ci/variables`
    pub async fn create_variable(
        &self,
        options: &CreateVariableRequest,
    ) -> Result<InstanceVariable, GitlabError> {
        if !is_valid_variable_key(&options.key) {
            return Err(GitlabError::InvalidKey {
                key: options.key.clone(),
            });
        }

        tracing::debug!(key = %options.key, "create gitlab instance level CI variable");

        let url = format!("{}/admin/ci/variables", self.base_url);
        let response = self.client.post(&url).json(options).send().await?;
        Self::parse_variable(response, &options.key).await
    }

    /// `GET /admin/ci/variables/:key`. HTTP 404 maps to [`GitlabError::NotFound`].
    pub async fn get_variable(&self, key: &str) -> Result<InstanceVariable, GitlabError> {
        tracing::debug!(key, "read gitlab instance level CI variable");

        let url = self.variable_url(key);
        let response = self.client.get(&url).send().await?;
        Self::parse_variable(response, key).await
    }

    /// `PUT /admin/ci/variables/:key`. The key is addressed by path only and
    /// never appears in the body.
    pub async fn update_variable(
        &self,
        key: &str,
        options: &UpdateVariableRequest,
    ) -> Result<InstanceVariable, GitlabError> {
        tracing::debug!(key, "update gitlab instance level CI variable");

        let url = self.variable_url(key);
        let response = self.client.put(&url).json(options).send().await?;
        Self::parse_variable(response, key).await
    }

    /// `DELETE /admin/ci/variables/:key`
    pub async fn remove_variable(&self, key: &str) -> Result<(), GitlabError> {
        tracing::debug!(key, "delete gitlab instance level CI variable");

        let url = self.variable_url(key);
        let response = self.client.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GitlabError::NotFound {
                key: key.to_string(),
            });
        }

        Err(Self::api_error(response).await)
    }

    /// `GET /admin/ci/variables`, following GitLab's `x-next-page` header
    /// until the listing is exhausted.
    pub async fn list_variables(&self) -> Result<Vec<InstanceVariable>, GitlabError> {
        let mut all_variables = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}/admin/ci/variables?page={}&per_page={}",
                self.base_url, page, DEFAULT_PAGE_SIZE
            );
            let response = self.client.get(&url).send().await?;
            let status = response.status();

            if !status.is_success() {
                return Err(Self::api_error(response).await);
            }

            let next_page = response
                .headers()
                .get("x-next-page")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u32>().ok());

            let variables: Vec<InstanceVariable> =
                response.json().await.map_err(|e| GitlabError::Api {
                    status: status.as_u16(),
                    message: format!("Failed to parse response: {}", e),
                })?;
            all_variables.extend(variables);

            match next_page {
                Some(next) => page = next,
                None => break,
            }
        }

        tracing::debug!(count = all_variables.len(), "listed instance variables");

        Ok(all_variables)
    }

    fn variable_url(&self, key: &str) -> String {
        format!(
            "{}/admin/ci/variables/{}",
            self.base_url,
            urlencoding::encode(key)
        )
    }

    async fn parse_variable(
        response: reqwest::Response,
        key: &str,
    ) -> Result<InstanceVariable, GitlabError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GitlabError::NotFound {
                key: key.to_string(),
            });
        }
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        response.json().await.map_err(|e| GitlabError::Api {
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", e),
        })
    }

    async fn api_error(response: reqwest::Response) -> GitlabError {
        let status = response.status().as_u16();
        let message = Self::error_message(response).await;
        GitlabError::Api { status, message }
    }

    // NOTE: GitLab reports errors as {"message": ...} or {"error": ...};
    // validation failures nest an object under "message"
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        let body: Option<serde_json::Value> = response.json().await.ok();

        body.as_ref()
            .and_then(|b| b.get("message").or_else(|| b.get("error")))
            .map(|m| match m {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            })
    }
}

impl std::fmt::Debug for GitlabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitlabClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitlabClient::new("test_token".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_rejects_malformed_token() {
        let client = GitlabClient::new("token\nwith\nnewlines".to_string());
        assert!(matches!(client, Err(GitlabError::Auth { .. })));
    }

    #[test]
    fn test_debug_does_not_expose_token() {
        let client = GitlabClient::new("super_secret_token_12345".to_string()).unwrap();
        let debug_output = format!("{:?}", client);

        assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output should contain [REDACTED]"
        );
        assert!(
            !debug_output.contains("super_secret_token_12345"),
            "Debug output must NOT contain the actual token"
        );
    }

    #[test]
    fn test_client_is_clone() {
        let client = GitlabClient::new("test_token".to_string()).unwrap();
        let _cloned = client.clone();
    }

    #[test]
    fn test_api_base_url() {
        let client = GitlabClient::new("test_token".to_string()).unwrap();
        assert_eq!(client.api_base(), "https://gitlab.com/api/v4");
    }

    #[test]
    fn test_variable_url_encodes_key() {
        let client =
            GitlabClient::with_base_url("t".to_string(), "http://localhost".to_string()).unwrap();
        assert_eq!(
            client.variable_url("DB_PASS"),
            "http://localhost/admin/ci/variables/DB_PASS"
        );
        // Imported ids are not validated up front, so the path must stay safe
        assert_eq!(
            client.variable_url("odd key"),
            "http://localhost/admin/ci/variables/odd%20key"
        );
    }
}
