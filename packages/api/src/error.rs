use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure the client layer can produce.
///
/// The UI renders all of them the same way: `err.to_string()` shown inline
/// near the action that failed. The variants exist so logs can tell a
/// transport failure from a backend rejection, never to branch UI behavior.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status. `message` is already the
    /// display string; the status only feeds logging.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_alone() {
        let err = ApiError::Api {
            status: 403,
            message: "Portal is blocked".to_string(),
        };
        assert_eq!(err.to_string(), "Portal is blocked");
    }

    #[test]
    fn test_decode_error_display() {
        let err = ApiError::Decode("expected a list".to_string());
        assert_eq!(err.to_string(), "unexpected response: expected a list");
    }
}
