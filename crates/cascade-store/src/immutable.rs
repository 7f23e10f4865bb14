//! Mutation-rejecting decorator.

use crate::error::StoreResult;
use crate::proxy::ProxyStore;
use crate::traits::{immutable_error, KeyIter, SharedStore, Store};

/// Rejects all mutation; reads forward unchanged.
///
/// The wrapper enforces immutability itself: `write` and `clear` fail with
/// [`StoreError::Immutable`](crate::StoreError::Immutable) whether or not
/// the wrapped store would have accepted the operation.
pub struct ImmutableStore {
    proxy: ProxyStore,
}

impl ImmutableStore {
    /// Wrap `inner`, freezing it against mutation through this handle.
    pub fn new(inner: SharedStore) -> Self {
        Self {
            proxy: ProxyStore::new(inner),
        }
    }
}

impl Store for ImmutableStore {
    fn exists(&self, key: &str) -> bool {
        self.proxy.exists(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.proxy.read(key)
    }

    fn write(&self, _key: &str, _value: Option<&str>) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn keys(&self) -> KeyIter<'_> {
        self.proxy.keys()
    }

    fn clear(&self) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn is_immutable(&self) -> bool {
        true
    }

    fn describe(&self, out: &mut String) {
        out.push_str("immutable->");
        self.proxy.describe(out);
    }
}
