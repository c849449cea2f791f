//! The metadata catalog: validated entries, the ordered index, and the
//! build-once cache.
//!
//! A [`CatalogIndex`] is the ordered list of (entry, key) pairs for one
//! (key type, kind): key declaration order first, then entry declaration
//! order within a key. It is built lazily on first query, validated against
//! the kind's multiplicity policy, and cached immutably for the lifetime of
//! the owning catalog by [`CatalogCache`].

mod cache;
mod entry;
mod error;
mod index;

pub use cache::CatalogCache;
pub use entry::MetaEntry;
pub use error::CatalogError;
pub use index::CatalogIndex;
