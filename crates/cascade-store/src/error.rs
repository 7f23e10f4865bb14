/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A key failed validation before reaching any store hook.
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    /// A prefix failed validation.
    #[error("invalid prefix: {reason}")]
    InvalidPrefix { reason: String },

    /// A mutating operation reached an immutable store.
    #[error("store is immutable: {description}")]
    Immutable { description: String },

    /// Concat construction received no member stores.
    #[error("concat requires at least one member store")]
    EmptyConcat,

    /// A required key had no value.
    #[error("missing required key: {key}")]
    Missing { key: String },

    /// A value could not be converted to the requested type.
    #[error("key {key}: cannot parse {value:?} as {wanted}")]
    TypeMismatch {
        key: String,
        wanted: &'static str,
        value: String,
    },

    /// I/O error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
