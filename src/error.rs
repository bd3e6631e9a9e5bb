//! Error type shared by every fallible operation in the crate.

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The default comparator was asked to stringify a value that has no string form.
    #[error("Cannot convert a {kind} value to a string")]
    NotStringable { kind: &'static str },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SortError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
