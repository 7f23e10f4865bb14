//! Key and prefix validation.
//!
//! Every public store operation validates its key here before any trusted
//! hook runs, so the hooks themselves never see an empty key. Prefix
//! validation guards `PrefixStore` construction the same way.

use crate::error::{StoreError, StoreResult};

/// Validate a configuration key, returning `Ok(())` if valid.
///
/// A key must be non-empty. Absence of a value is expressed with `Option`,
/// never with an empty key.
///
/// # Examples
///
/// ```
/// use cascade_store::names::validate_key;
///
/// assert!(validate_key("server.port").is_ok());
/// assert!(validate_key("").is_err());
/// ```
pub fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey {
            reason: "key must not be empty".into(),
        });
    }
    Ok(())
}

/// Validate a scoping prefix. Must be non-empty.
///
/// An empty prefix would make the scoped store an exact alias of the
/// wrapped one; callers wanting that should use the wrapped store directly.
pub fn validate_prefix(prefix: &str) -> StoreResult<()> {
    if prefix.is_empty() {
        return Err(StoreError::InvalidPrefix {
            reason: "prefix must not be empty".into(),
        });
    }
    Ok(())
}
