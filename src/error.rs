use thiserror::Error;

/// Errors that can occur while interpreting a recipe-search API response
#[derive(Error, Debug)]
pub enum SearchError {
    /// The API answered 500
    #[error("Recipe API server error (status 500)")]
    ServerError,

    /// The API answered 409, which it uses for an exhausted rate limit
    #[error("Recipe API rate limit exceeded (status 409)")]
    RateLimited,

    /// The API answered 400
    #[error("Recipe API rejected the request (status 400)")]
    BadRequest,

    /// Any status the API is not documented to return
    #[error("Unexpected status from recipe API: {0}")]
    UnexpectedStatus(u16),

    /// A successful search returned zero matches
    #[error("No recipe matched the search")]
    NoMatch,

    /// The body is not valid JSON or does not fit the expected schema
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The body is valid JSON but has the wrong shape
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// Query kind other than "search" or "recipe"
    #[error("Unknown query kind: {0:?}")]
    UnknownQueryKind(String),

    /// Failed to read the response handed over by the HTTP client
    #[error("Failed to read response: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl SearchError {
    /// True for failures derived from the response status code.
    pub fn is_request_error(&self) -> bool {
        self.status().is_some()
    }

    /// Status code behind a status-derived failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::ServerError => Some(500),
            SearchError::RateLimited => Some(409),
            SearchError::BadRequest => Some(400),
            SearchError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derived_errors_are_request_errors() {
        assert!(SearchError::ServerError.is_request_error());
        assert!(SearchError::RateLimited.is_request_error());
        assert!(SearchError::BadRequest.is_request_error());
        assert!(SearchError::UnexpectedStatus(404).is_request_error());
        assert!(!SearchError::NoMatch.is_request_error());
        assert!(!SearchError::MalformedBody("x".into()).is_request_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SearchError::ServerError.status(), Some(500));
        assert_eq!(SearchError::RateLimited.status(), Some(409));
        assert_eq!(SearchError::BadRequest.status(), Some(400));
        assert_eq!(SearchError::UnexpectedStatus(302).status(), Some(302));
        assert_eq!(SearchError::NoMatch.status(), None);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SearchError::UnexpectedStatus(418).to_string(),
            "Unexpected status from recipe API: 418"
        );
        assert_eq!(
            SearchError::UnknownQueryKind("menu".into()).to_string(),
            "Unknown query kind: \"menu\""
        );
    }
}
