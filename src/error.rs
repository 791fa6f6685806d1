//! Error types for data generation.

/// Boxed error returned by text providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Counts that cannot produce a consistent dataset (e.g. zero customers)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The external text provider failed to produce a value
    #[error("{kind} provider failed")]
    Provider {
        kind: &'static str,
        #[source]
        source: BoxError,
    },

    /// The output sink rejected a write
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GenerateError::InvalidConfiguration(msg.into())
    }

    pub fn provider(kind: &'static str, source: BoxError) -> Self {
        GenerateError::Provider { kind, source }
    }
}
