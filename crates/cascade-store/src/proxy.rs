//! Pass-through decorator over a single wrapped store.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::traits::{KeyIter, SharedStore, Store};

/// Forwards every hook verbatim to one wrapped store.
///
/// The other decorators embed a `ProxyStore` and delegate the hooks they
/// leave unchanged, overriding only the handful they redefine. It is also
/// usable on its own as a neutral indirection layer, and is the natural
/// starting point for custom decorators.
///
/// The [`Store::as_prefix`] folding hook is the one thing not forwarded:
/// a proxy over a prefix store is not itself a prefix view, and folding
/// through a proxy would bypass whatever the proxy enforces.
pub struct ProxyStore {
    inner: SharedStore,
}

impl ProxyStore {
    /// Wrap an existing store.
    pub fn new(inner: SharedStore) -> Self {
        Self { inner }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &SharedStore {
        &self.inner
    }
}

impl Store for ProxyStore {
    fn exists(&self, key: &str) -> bool {
        self.inner.exists(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        self.inner.write(key, value)
    }

    fn keys(&self) -> KeyIter<'_> {
        self.inner.keys()
    }

    fn clear(&self) -> StoreResult<()> {
        self.inner.clear()
    }

    fn is_immutable(&self) -> bool {
        self.inner.is_immutable()
    }

    fn describe(&self, out: &mut String) {
        self.inner.describe(out);
    }
}
