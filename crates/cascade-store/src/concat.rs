//! First-match-wins composition over an ordered set of stores.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::traits::{immutable_error, KeyIter, SharedStore, Store};

/// Composite over an ordered, non-empty sequence of member stores.
///
/// Reads fan out in sequence order and the first member that *contains*
/// the key supplies the value, so earlier members shadow later ones. The
/// usual composition is a primary store followed by fallback defaults.
///
/// A concat store is always immutable: `write` and `clear` fail before
/// touching any member, regardless of the members' own mutability.
pub struct ConcatStore {
    members: Vec<SharedStore>,
}

impl ConcatStore {
    /// Build a composite over `members`, in precedence order.
    /// Fails if `members` is empty.
    pub fn new(members: Vec<SharedStore>) -> StoreResult<Self> {
        if members.is_empty() {
            return Err(StoreError::EmptyConcat);
        }
        Ok(Self { members })
    }

    /// The member stores, in precedence order.
    pub fn members(&self) -> &[SharedStore] {
        &self.members
    }
}

impl Store for ConcatStore {
    fn exists(&self, key: &str) -> bool {
        self.members.iter().any(|m| m.exists(key))
    }

    fn read(&self, key: &str) -> Option<String> {
        // First member that contains the key wins, even if its read then
        // comes back absent: a member's "present" answer is authoritative.
        for member in &self.members {
            if member.exists(key) {
                return member.read(key);
            }
        }
        None
    }

    fn write(&self, _key: &str, _value: Option<&str>) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn keys(&self) -> KeyIter<'_> {
        let mut seen = HashSet::new();
        Box::new(
            self.members
                .iter()
                .flat_map(|m| m.keys())
                .filter(move |key| seen.insert(key.clone())),
        )
    }

    fn clear(&self) -> StoreResult<()> {
        Err(immutable_error(self))
    }

    fn is_immutable(&self) -> bool {
        true
    }

    fn describe(&self, out: &mut String) {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            member.describe(out);
        }
    }
}

/// Combine optional stores into one, with first-match-wins precedence.
///
/// - No present store: `None`.
/// - Exactly one present store: that store, unchanged — the common case of
///   one real backend plus optional override layers pays no indirection.
/// - Otherwise: a left-fold of pairwise [`ConcatStore`]s, applying the same
///   absent-elision at every step.
pub fn concat(stores: impl IntoIterator<Item = Option<SharedStore>>) -> Option<SharedStore> {
    stores.into_iter().fold(None, |acc, next| match (acc, next) {
        (None, next) => next,
        (acc, None) => acc,
        (Some(first), Some(second)) => {
            tracing::debug!("concatenating store pair");
            Some(Arc::new(ConcatStore {
                members: vec![first, second],
            }))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MapStore;
    use crate::traits::StoreExt;
    use proptest::prelude::*;

    fn shared(pairs: &[(&str, &str)]) -> SharedStore {
        Arc::new(pairs.iter().copied().collect::<MapStore>())
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn empty_member_list_rejected() {
        assert!(matches!(
            ConcatStore::new(Vec::new()),
            Err(StoreError::EmptyConcat)
        ));
    }

    // -----------------------------------------------------------------------
    // Precedence
    // -----------------------------------------------------------------------

    #[test]
    fn earlier_members_shadow_later_ones() {
        let a = shared(&[("k", "from-a")]);
        let b = shared(&[("k", "from-b")]);
        let ab = ConcatStore::new(vec![Arc::clone(&a), Arc::clone(&b)]).unwrap();
        let ba = ConcatStore::new(vec![b, a]).unwrap();
        assert_eq!(ab.get_value("k").unwrap().as_deref(), Some("from-a"));
        assert_eq!(ba.get_value("k").unwrap().as_deref(), Some("from-b"));
    }

    #[test]
    fn falls_back_to_later_members() {
        let a = shared(&[]);
        let b = shared(&[("k", "fallback")]);
        let merged = ConcatStore::new(vec![a, b]).unwrap();
        assert_eq!(merged.get_value("k").unwrap().as_deref(), Some("fallback"));
    }

    #[test]
    fn primary_with_fallback_defaults() {
        let base = shared(&[("x", "1")]);
        let over = shared(&[("x", "2"), ("y", "3")]);
        let merged = concat([Some(over), Some(base)]).unwrap();
        assert_eq!(merged.get_value("x").unwrap().as_deref(), Some("2"));
        assert_eq!(merged.get_value("y").unwrap().as_deref(), Some("3"));
        let mut keys: Vec<String> = merged.keys().collect();
        keys.sort();
        assert_eq!(keys, ["x", "y"]);
        assert!(merged.is_immutable());
    }

    // -----------------------------------------------------------------------
    // Immutability
    // -----------------------------------------------------------------------

    #[test]
    fn writes_always_fail() {
        let merged = ConcatStore::new(vec![shared(&[("k", "v")])]).unwrap();
        let err = merged.set_value("k", "other").unwrap_err();
        assert!(matches!(err, StoreError::Immutable { .. }));
        assert!(merged.remove("k").is_err());
    }

    #[test]
    fn clear_fails_without_touching_members() {
        let a = shared(&[("k", "v")]);
        let merged = ConcatStore::new(vec![Arc::clone(&a)]).unwrap();
        assert!(merged.clear().is_err());
        assert_eq!(a.get_value("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn immutable_even_when_members_are_mutable() {
        let a = shared(&[]);
        assert!(!a.is_immutable());
        let merged = ConcatStore::new(vec![a]).unwrap();
        assert!(merged.is_immutable());
    }

    // -----------------------------------------------------------------------
    // Key enumeration
    // -----------------------------------------------------------------------

    #[test]
    fn keys_are_the_deduplicated_union_in_member_order() {
        let a = shared(&[("k1", "a")]);
        let b = shared(&[("k1", "b"), ("k2", "b")]);
        let merged = ConcatStore::new(vec![a, b]).unwrap();
        let keys: Vec<String> = merged.keys().collect();
        assert_eq!(keys.len(), 2);
        // First occurrence wins for ordering: k1 comes from the first
        // member, before anything the second member adds.
        assert_eq!(keys[0], "k1");
        assert!(keys.contains(&"k2".to_string()));
    }

    // -----------------------------------------------------------------------
    // The concat factory
    // -----------------------------------------------------------------------

    #[test]
    fn no_present_stores_yields_none() {
        assert!(concat([]).is_none());
        assert!(concat([None, None]).is_none());
    }

    #[test]
    fn single_store_passes_through_unwrapped() {
        let a = shared(&[("k", "v")]);
        let out = concat([Some(Arc::clone(&a))]).unwrap();
        assert!(Arc::ptr_eq(&a, &out));
    }

    #[test]
    fn absent_slots_are_elided() {
        let a = shared(&[("k", "v")]);
        let left = concat([None, Some(Arc::clone(&a))]).unwrap();
        let right = concat([Some(Arc::clone(&a)), None]).unwrap();
        assert!(Arc::ptr_eq(&a, &left));
        assert!(Arc::ptr_eq(&a, &right));
    }

    #[test]
    fn many_stores_fold_with_left_precedence() {
        let a = shared(&[("k", "a"), ("only-a", "1")]);
        let b = shared(&[("k", "b")]);
        let c = shared(&[("k", "c"), ("only-c", "3")]);
        let merged = concat([Some(a), None, Some(b), Some(c)]).unwrap();
        assert_eq!(merged.get_value("k").unwrap().as_deref(), Some("a"));
        assert_eq!(merged.get_value("only-a").unwrap().as_deref(), Some("1"));
        assert_eq!(merged.get_value("only-c").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn describe_joins_members() {
        let merged = concat([Some(shared(&[])), Some(shared(&[]))]).unwrap();
        assert_eq!(merged.render(), "Store[map | map]");
    }

    #[test]
    fn nested_fold_describes_flat() {
        let merged = concat([Some(shared(&[])), Some(shared(&[])), Some(shared(&[]))]).unwrap();
        assert_eq!(merged.render(), "Store[map | map | map]");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn first_present_member_wins(
            key in "[a-z]{1,6}",
            first in "[a-z0-9]{1,6}",
            second in "[a-z0-9]{1,6}",
        ) {
            let a = shared(&[(key.as_str(), first.as_str())]);
            let b = shared(&[(key.as_str(), second.as_str())]);
            let merged = concat([Some(a), Some(b)]).unwrap();
            prop_assert_eq!(merged.get_value(&key).unwrap(), Some(first));
        }
    }
}
