/// Error types for tempgami API access
use thiserror::Error;

/// Failure of a request against the tempgami API.
///
/// The `Display` string is shown verbatim to the user when a station fetch
/// fails, so variants carry the underlying description rather than a category.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The request never produced a response (network down, CORS, aborted)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed with status code {status}{}", format_status_text(.text))]
    Status { status: u16, text: String },

    /// The body was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The body parsed but violates a payload invariant
    #[error("Invalid response: {0}")]
    Invalid(String),
}

fn format_status_text(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" ({})", text)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode(err.to_string())
    }
}

impl From<tg_utils::error::DateError> for QueryError {
    fn from(err: tg_utils::error::DateError) -> Self {
        QueryError::Invalid(err.to_string())
    }
}

/// Type alias for Results using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::QueryError;

    #[test]
    fn test_status_message() {
        let err = QueryError::Status {
            status: 404,
            text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status code 404 (Not Found)");

        let bare = QueryError::Status {
            status: 500,
            text: String::new(),
        };
        assert_eq!(bare.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = QueryError::Transport("Network Error".to_string());
        assert_eq!(err.to_string(), "Network Error");
    }
}
