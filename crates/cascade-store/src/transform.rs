//! Value-rewriting decorator.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::proxy::ProxyStore;
use crate::traits::{KeyIter, SharedStore, Store};

/// Pure read-direction value rewrite applied by a [`TransformStore`].
///
/// Returning `None` turns a present raw value into an absent one, which
/// also changes containment.
pub type TransformFn = Box<dyn Fn(String) -> Option<String> + Send + Sync>;

/// Rewrites values read from the wrapped store through a pure function.
///
/// Containment tracks the *transformed* result: a key whose raw value the
/// function maps to `None` reads as absent and `contains` as false, even
/// though the wrapped store holds a value for it. Writes pass through
/// untransformed; the function is read-direction only. The function is not
/// cached and runs on every read.
pub struct TransformStore {
    proxy: ProxyStore,
    label: String,
    apply: TransformFn,
}

impl TransformStore {
    /// Wrap `inner`, rewriting reads through `apply`. The label appears in
    /// the structural description.
    pub fn new<F>(inner: SharedStore, label: impl Into<String>, apply: F) -> Self
    where
        F: Fn(String) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            proxy: ProxyStore::new(inner),
            label: label.into(),
            apply: Box::new(apply),
        }
    }

    /// The standard instantiation: whitespace normalization via
    /// [`normalize`], treating blank values as missing.
    pub fn normalized(inner: SharedStore) -> Self {
        Self::new(inner, "normalize", normalize)
    }

    /// Convenience: a shared handle to a normalizing wrapper over `inner`.
    pub fn normalized_shared(inner: SharedStore) -> SharedStore {
        Arc::new(Self::normalized(inner))
    }
}

/// Trim leading and trailing whitespace; a value that is empty after
/// trimming becomes absent.
pub fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Store for TransformStore {
    fn exists(&self, key: &str) -> bool {
        // Containment is defined by the transformed read, not the wrapped
        // store's raw containment.
        self.read(key).is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        self.proxy.read(key).and_then(&self.apply)
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        self.proxy.write(key, value)
    }

    fn keys(&self) -> KeyIter<'_> {
        self.proxy.keys()
    }

    fn clear(&self) -> StoreResult<()> {
        self.proxy.clear()
    }

    fn is_immutable(&self) -> bool {
        self.proxy.is_immutable()
    }

    fn describe(&self, out: &mut String) {
        out.push_str(&self.label);
        out.push_str("->");
        self.proxy.describe(out);
    }
}
