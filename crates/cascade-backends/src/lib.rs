//! Leaf store backends for Cascade.
//!
//! Concrete [`Store`](cascade_store::Store) implementations that own real
//! data, for composition with the decorators in `cascade-store`:
//!
//! - [`EnvStore`] -- live, read-only view of the process environment
//! - [`PropertiesStore`] -- java-properties-style file with explicit save
//!
//! The typical layering puts overrides first and defaults last:
//!
//! ```no_run
//! use std::sync::Arc;
//! use cascade_store::{concat, SharedStore, SharedStoreExt, StoreExt};
//! use cascade_backends::{EnvStore, PropertiesStore};
//!
//! # fn main() -> cascade_store::StoreResult<()> {
//! let env: SharedStore = Arc::new(EnvStore::new());
//! let file: SharedStore = Arc::new(PropertiesStore::load("app.properties")?);
//! let config = concat([Some(env.prefixed("MYAPP_")?), Some(file)]).expect("two stores");
//! let port = config.get("port")?.as_u64()?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod props;

pub use env::EnvStore;
pub use props::PropertiesStore;
