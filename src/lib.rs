//! # metacat
//!
//! Typed metadata catalog and query engine for enumerated constants.
//!
//! Keys of a closed, declaration-ordered constant set carry metadata entries
//! (scalar or ordered-collection payloads, tagged by kind). The engine builds
//! a lazily cached, immutable index per (key type, kind) and answers typed
//! forward lookups, reverse lookups, and cross-key-type resolution over it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! query     → Query engine: typed lookups, reverse matching, cross-resolution
//!   ↓
//! catalog   → MetaEntry, CatalogIndex, at-most-once CatalogCache
//!   ↓
//! source    → DeclarationSource contract, in-memory DeclarationSet
//!   ↓
//! value     → Scalar/RawValue payload shapes, FromScalar typed casting
//!   ↓
//! base      → Primitives (MetaKey, KindId, KindPolicy)
//! ```

// ============================================================================
// MODULES (dependency order: base → value → source → catalog → query)
// ============================================================================

/// Foundation types: MetaKey, KindId, KindPolicy
pub mod base;

/// Payload model: Scalar, RawValue, typed casting via FromScalar
pub mod value;

/// Declaration source: the collaborator contract and the in-memory set
pub mod source;

/// Catalog: metadata entries, the ordered index, the build-once cache
pub mod catalog;

/// Query engine: typed lookups, reverse matching, cross-resolution
pub mod query;

// Re-export the public surface
pub use base::{DISPLAY_NAME, KindId, KindPolicy, MetaKey};
pub use catalog::{CatalogCache, CatalogError, CatalogIndex, MetaEntry};
pub use query::{Catalog, MatchMode, QueryError};
pub use source::{DeclarationSet, DeclarationSetBuilder, DeclarationSource};
pub use value::{CastError, FromScalar, RawValue, Scalar};
