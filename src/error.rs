//! Unified error type for movie resolution.
//!
//! Every failure raised while resolving a query funnels into [`Error`]. The
//! tool-style entry point [`Resolver::respond`](crate::resolver::Resolver::respond)
//! converts it into a single user-visible message.

/// Unified error type covering all resolution failure modes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required setting (usually the OMDb API key) is absent or invalid.
    #[error("{0}")]
    Configuration(String),

    /// Every search strategy was exhausted, or a direct identifier lookup
    /// came back empty.
    #[error("{0}")]
    MovieNotFound(String),

    /// The query named neither a title nor an identifier.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Best-match selection ran without candidates.
    #[error(transparent)]
    EmptyInput(#[from] cinematch_match::EmptyInput),

    /// The HTTP request failed or the body could not be decoded.
    #[error("{context}: {source}")]
    Transport {
        /// What was being attempted.
        context: String,
        /// The underlying transport or decode error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Stable snake_case code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "configuration_error",
            Error::MovieNotFound(_) => "movie_not_found",
            Error::InvalidQuery(_) => "invalid_query",
            Error::EmptyInput(_) => "empty_input",
            Error::Transport { .. } => "transport_error",
        }
    }

    /// Convenience constructor for [`Error::MovieNotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::MovieNotFound(message.into())
    }

    /// Convenience constructor for [`Error::Transport`].
    pub fn transport(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Transport {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
