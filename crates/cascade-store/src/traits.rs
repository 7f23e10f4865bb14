//! The [`Store`] trait defining the key/value store contract.
//!
//! The contract is split in two layers. The trait's required methods are
//! *trusted hooks*: they assume the key was already validated and implement
//! the store's actual semantics. [`StoreExt`] layers the validated public
//! API on top, implemented once for every store so no backend or decorator
//! repeats the validation logic.
//!
//! Stores are shared behind [`SharedStore`] handles. A composite holds
//! references to its members for its whole lifetime and never copies their
//! data, so mutating a backend through one composite is visible through
//! every other composite wrapping it.

use std::fmt;
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::immutable::ImmutableStore;
use crate::names::validate_key;
use crate::prefix::PrefixStore;
use crate::value::Value;

/// Shared handle to a store. Composites alias backends through this.
pub type SharedStore = Arc<dyn Store>;

/// Lazy sequence of keys yielded by [`Store::keys`]. Unsorted.
pub type KeyIter<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// A string-keyed, string-valued configuration store.
///
/// Implementations must be thread-safe (`Send + Sync`); any further
/// concurrency guarantee is the leaf backend's own. Absence of a value is
/// distinct from an empty string throughout.
///
/// The methods here are trusted hooks: keys arriving at them were already
/// validated non-empty by the [`StoreExt`] layer (or by a decorator that
/// validated its own local key before rewriting it).
pub trait Store: Send + Sync {
    /// Whether the store has a value for `key`.
    fn exists(&self, key: &str) -> bool;

    /// Read the raw value for `key`. `None` means the key is absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` for `key`. `None` removes the key.
    ///
    /// Must fail with [`StoreError::Immutable`] on an immutable store,
    /// never silently no-op.
    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()>;

    /// The full known key set. Not guaranteed sorted.
    fn keys(&self) -> KeyIter<'_>;

    /// Remove every key. Each store defines its own bulk-clear semantics:
    /// composites reject it, proxies forward it.
    fn clear(&self) -> StoreResult<()>;

    /// Whether the store rejects mutation. Stable for the store's lifetime.
    fn is_immutable(&self) -> bool;

    /// Append a short structural description, e.g. `"db."->map`.
    fn describe(&self, out: &mut String);

    /// Prefix-folding hook: a [`PrefixStore`] returns its wrapped store and
    /// prefix so that stacking prefixes collapses to a single level. Every
    /// other store returns `None`. Deliberately not forwarded by proxies:
    /// folding must not look through an immutability or transform boundary.
    fn as_prefix(&self) -> Option<(&SharedStore, &str)> {
        None
    }
}

/// Validated public API, implemented for every [`Store`].
///
/// These methods validate keys before delegating to the trusted hooks and
/// are the entry points callers should use.
pub trait StoreExt: Store {
    /// Read the raw value for a validated key.
    fn get_value(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        Ok(self.read(key))
    }

    /// Typed accessor for a validated key. See [`Value`].
    fn get(&self, key: &str) -> StoreResult<Value> {
        validate_key(key)?;
        Ok(Value::new(key, self.read(key)))
    }

    /// Whether a validated key has a value.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.exists(key))
    }

    /// Set a validated key to the string form of `value`.
    fn set_value<V: ToString>(&self, key: &str, value: V) -> StoreResult<()> {
        validate_key(key)?;
        let rendered = value.to_string();
        self.write(key, Some(&rendered))
    }

    /// Remove a validated key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.write(key, None)
    }

    /// Render the structural description as `Store[...]`.
    fn render(&self) -> String {
        let mut out = String::from("Store[");
        self.describe(&mut out);
        out.push(']');
        out
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

impl<'a> fmt::Display for (dyn Store + 'a) {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Combinators on shared store handles.
pub trait SharedStoreExt {
    /// Scope this store to keys under `prefix`. Stacked calls fold into a
    /// single [`PrefixStore`] level.
    fn prefixed(&self, prefix: &str) -> StoreResult<SharedStore>;

    /// Wrap this store so all mutation is rejected. Returns the handle
    /// unchanged when the store is already immutable.
    fn immutable(&self) -> SharedStore;
}

impl SharedStoreExt for SharedStore {
    fn prefixed(&self, prefix: &str) -> StoreResult<SharedStore> {
        Ok(Arc::new(PrefixStore::new(Arc::clone(self), prefix)?))
    }

    fn immutable(&self) -> SharedStore {
        if self.is_immutable() {
            Arc::clone(self)
        } else {
            Arc::new(ImmutableStore::new(Arc::clone(self)))
        }
    }
}

/// The error an immutable store signals from its write hooks, carrying the
/// store's structural description. Backends that enforce their own
/// immutability build their rejection with this.
pub fn immutable_error(store: &dyn Store) -> StoreError {
    let mut description = String::new();
    store.describe(&mut description);
    StoreError::Immutable { description }
}
