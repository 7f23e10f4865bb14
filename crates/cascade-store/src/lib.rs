//! Composable key/value configuration stores.
//!
//! This crate implements a small polymorphic hierarchy over one contract:
//! the [`Store`] trait, a string-keyed, string-valued mapping where absence
//! is distinct from the empty string. Structural decorators combine, scope,
//! transform, and lock stores without ever copying their data.
//!
//! # Store Variants
//!
//! - [`MapStore`] -- `HashMap`-based mutable leaf backend
//! - [`ProxyStore`] -- pass-through over one wrapped store
//! - [`TransformStore`] -- rewrites read values through a pure function
//! - [`PrefixStore`] -- scopes a store to keys under a prefix, with
//!   one-level folding when stacked
//! - [`ConcatStore`] -- first-match-wins composition; always read-only
//! - [`ImmutableStore`] -- rejects all mutation
//!
//! # Design Rules
//!
//! 1. Public operations validate keys before any trusted hook runs.
//! 2. Declared immutability is enforced by the store itself: mutating an
//!    immutable store fails, it never silently no-ops.
//! 3. Decorators hold shared references to their backends, add no caching
//!    or buffering, and forward every call on every use.
//! 4. `contains` agrees with `get` everywhere except [`TransformStore`],
//!    where both track the transformed result.
//! 5. Concurrency guarantees are the leaf backend's own; the decorators
//!    neither add nor assume isolation.

pub mod concat;
pub mod error;
pub mod immutable;
pub mod memory;
pub mod names;
pub mod prefix;
pub mod proxy;
pub mod traits;
pub mod transform;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use concat::{concat, ConcatStore};
pub use error::{StoreError, StoreResult};
pub use immutable::ImmutableStore;
pub use memory::MapStore;
pub use prefix::PrefixStore;
pub use proxy::ProxyStore;
pub use traits::{immutable_error, KeyIter, SharedStore, SharedStoreExt, Store, StoreExt};
pub use transform::{normalize, TransformFn, TransformStore};
pub use value::Value;
