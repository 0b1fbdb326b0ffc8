use reqwest::StatusCode;
use thiserror::Error;

/// Message shown for every failed weather lookup, whatever the cause.
pub const NOT_FOUND_MESSAGE: &str = "City not found";

/// Message shown when a search is submitted without a city name.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a valid city name.";

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Transport,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Please enter a valid city name.")]
    EmptyQuery,

    #[error("a weather result is already showing; start a new search first")]
    ResultActive,

    #[error("weather provider answered with status {status}: {body}")]
    NotFound { status: StatusCode, body: String },

    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather provider response contained no weather conditions")]
    MissingConditions,
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::EmptyQuery | SearchError::ResultActive => ErrorKind::Validation,
            SearchError::NotFound { .. } => ErrorKind::NotFound,
            SearchError::Transport(_) | SearchError::Decode(_) | SearchError::MissingConditions => {
                ErrorKind::Transport
            }
        }
    }

    /// The text put in front of the user. Not-found and transport failures
    /// are deliberately indistinguishable here.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => EMPTY_QUERY_MESSAGE,
            ErrorKind::NotFound | ErrorKind::Transport => NOT_FOUND_MESSAGE,
        }
    }
}
