//! Client error types for the capataz transport

/// Error type for HTTP transport operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 404,
            body: "Resource host not found by id '42'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 404: Resource host not found by id '42'"
        );

        let err = ClientError::InvalidBaseUrl("not a url".to_string());
        assert_eq!(err.to_string(), "invalid base url 'not a url'");
    }
}
