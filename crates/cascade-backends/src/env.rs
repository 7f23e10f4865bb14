//! Process-environment store.

use cascade_store::{immutable_error, KeyIter, Store, StoreResult};

/// Read-only view of the process environment.
///
/// Reads hit the live environment on every call; nothing is cached, so a
/// variable set after construction is visible immediately. The store is
/// immutable: a library must not mutate the process environment, so writes
/// and `clear` are rejected. Variables with non-unicode values read as
/// absent.
///
/// Scope to an application's variables by stacking a prefix view:
/// `Arc::new(EnvStore::new()).prefixed("MYAPP_")`.
pub struct EnvStore;

impl EnvStore {
    /// Create a view of the current process environment.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for EnvStore {
    fn exists(&self, key: &str) -> bool {
        self.read(key).is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn write(&self, _key: &str, _value: Option<&str>) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn keys(&self) -> KeyIter<'_> {
        Box::new(std::env::vars().map(|(key, _)| key))
    }

    fn clear(&self) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn is_immutable(&self) -> bool {
        true
    }

    fn describe(&self, out: &mut String) {
        out.push_str("env");
    }
}
