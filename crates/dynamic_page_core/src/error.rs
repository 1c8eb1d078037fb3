use thiserror::Error;

/// Failures a handler can raise. None of them are retried locally; they
/// propagate to the Lambda runtime, which marks the invocation as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// A required environment key is absent.
    #[error("{key} must be configured")]
    MissingConfiguration { key: String },

    /// The named parameter could not be read from the parameter store.
    #[error("failed to fetch parameter '{name}': {message}")]
    ConfigFetch { name: String, message: String },

    /// The rendered page could not be written to the object store.
    #[error("failed to write s3://{bucket}/{key}: {message}")]
    StorageWrite {
        bucket: String,
        key: String,
        message: String,
    },
}

impl HandlerError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Stable label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingConfiguration { .. } => "missing_configuration",
            Self::ConfigFetch { .. } => "config_fetch_error",
            Self::StorageWrite { .. } => "storage_write_error",
        }
    }
}
