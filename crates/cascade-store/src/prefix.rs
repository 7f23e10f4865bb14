//! Prefix-scoping decorator.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::names::validate_prefix;
use crate::proxy::ProxyStore;
use crate::traits::{KeyIter, SharedStore, Store};

/// Scopes a wrapped store to keys sharing a literal prefix.
///
/// Every key is rewritten to `prefix + key` before reaching the wrapped
/// store's hooks; the local key was already validated, so the wrapped
/// store's public validation is bypassed. `keys()` yields the wrapped
/// store's keys that start with the prefix, stripped and de-duplicated.
///
/// Stacking prefixes folds flat: constructing a `PrefixStore` over another
/// `PrefixStore` wraps the inner store directly with the concatenated
/// prefix (new prefix first), so chains stay one level deep no matter how
/// often scoping is applied. Folding never looks through another decorator.
///
/// `clear()` is forwarded wholesale: it clears the entire wrapped store,
/// not just the prefixed subset.
pub struct PrefixStore {
    proxy: ProxyStore,
    prefix: String,
}

impl PrefixStore {
    /// Scope `inner` to keys under `prefix`. Fails on an empty prefix.
    ///
    /// When `inner` is itself a `PrefixStore`, its wrapped store is wrapped
    /// directly with effective prefix `prefix + existing`.
    pub fn new(inner: SharedStore, prefix: &str) -> StoreResult<Self> {
        validate_prefix(prefix)?;
        let folded = inner
            .as_prefix()
            .map(|(deeper, existing)| (Arc::clone(deeper), format!("{prefix}{existing}")));
        let (inner, prefix) = match folded {
            Some((deeper, merged)) => {
                tracing::debug!(prefix = %merged, "folded stacked prefix stores");
                (deeper, merged)
            }
            None => (inner, prefix.to_string()),
        };
        Ok(Self {
            proxy: ProxyStore::new(inner),
            prefix,
        })
    }

    /// The effective prefix, after any folding.
    pub fn key_prefix(&self) -> &str {
        &self.prefix
    }

    /// The wrapped store.
    pub fn inner(&self) -> &SharedStore {
        self.proxy.inner()
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Store for PrefixStore {
    fn exists(&self, key: &str) -> bool {
        self.proxy.exists(&self.full_key(key))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.proxy.read(&self.full_key(key))
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        self.proxy.write(&self.full_key(key), value)
    }

    fn keys(&self) -> KeyIter<'_> {
        let prefix = self.prefix.as_str();
        let mut seen = HashSet::new();
        Box::new(self.proxy.keys().filter_map(move |full| {
            let rest = full.strip_prefix(prefix)?;
            // A wrapped key equal to the prefix would strip to the empty
            // key, which no public operation can name.
            if rest.is_empty() {
                return None;
            }
            let rest = rest.to_string();
            seen.insert(rest.clone()).then_some(rest)
        }))
    }

    fn clear(&self) -> StoreResult<()> {
        self.proxy.clear()
    }

    fn is_immutable(&self) -> bool {
        self.proxy.is_immutable()
    }

    fn describe(&self, out: &mut String) {
        out.push('"');
        out.push_str(&self.prefix);
        out.push('"');
        out.push_str("->");
        self.proxy.describe(out);
    }

    fn as_prefix(&self) -> Option<(&SharedStore, &str)> {
        Some((self.proxy.inner(), &self.prefix))
    }
}
