use thiserror::Error;

/// GitLab-specific errors that can occur during API operations.
///
/// SECURITY: Error messages must NEVER contain sensitive data like API
/// tokens or variable values.
#[derive(Debug, Error)]
pub enum GitlabError {
    /// Authentication failed (invalid or expired token)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No instance variable with the given key exists
    #[error("instance variable not found: '{key}'")]
    NotFound { key: String },

    /// Key rejected before any request is made
    #[error("invalid variable key: '{key}' (1-255 letters, digits and underscores)")]
    InvalidKey { key: String },

    /// Variable type string is neither `env_var` nor `file`
    #[error("invalid variable type: '{value}' (expected 'env_var' or 'file')")]
    InvalidType { value: String },

    /// Network-level error (connection failed, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = GitlabError::Auth {
            message: "invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "authentication failed: invalid token");
    }

    #[test]
    fn test_api_error_display() {
        let err = GitlabError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API error (403): Forbidden");
    }

    #[test]
    fn test_not_found_display() {
        let err = GitlabError::NotFound {
            key: "DB_PASS".to_string(),
        };
        assert_eq!(err.to_string(), "instance variable not found: 'DB_PASS'");
    }

    #[test]
    fn test_invalid_key_display() {
        let err = GitlabError::InvalidKey {
            key: "my-var".to_string(),
        };
        assert!(err.to_string().contains("my-var"));
    }

    #[test]
    fn test_invalid_type_display() {
        let err = GitlabError::InvalidType {
            value: "secret".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid variable type: 'secret' (expected 'env_var' or 'file')"
        );
    }

    #[test]
    fn test_error_does_not_contain_token() {
        let fake_token = "glpat_super_secret_token_12345";
        let err = GitlabError::Auth {
            message: "invalid token".to_string(),
        };

        let error_string = err.to_string();
        assert!(
            !error_string.contains(fake_token),
            "Error message should not contain token value"
        );
    }
}
