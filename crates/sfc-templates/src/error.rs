//! Errors raised while loading templates from a store.

/// Result type for template loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// A template could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("could not reach template store for '{identifier}': {source}")]
    Transport {
        identifier: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("template store returned {status} for '{identifier}'")]
    Status { identifier: String, status: u16 },

    /// The document was retrieved but is not a template definition.
    #[error("could not decode template '{identifier}': {message}")]
    Decode { identifier: String, message: String },

    /// A local document could not be read.
    #[error("could not read template '{identifier}': {source}")]
    Io {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    /// The store has no document under this identifier.
    #[error("template '{identifier}' not found")]
    NotFound { identifier: String },
}

impl LoadError {
    /// The identifier of the template that failed to load.
    pub fn identifier(&self) -> &str {
        match self {
            LoadError::Transport { identifier, .. }
            | LoadError::Status { identifier, .. }
            | LoadError::Decode { identifier, .. }
            | LoadError::Io { identifier, .. }
            | LoadError::NotFound { identifier } => identifier,
        }
    }
}
