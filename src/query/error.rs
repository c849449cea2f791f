//! Error types for query operations.

use thiserror::Error;

use crate::base::KindId;
use crate::catalog::CatalogError;
use crate::value::CastError;

/// Errors surfaced by query operations.
///
/// Query-time failures are caller-local: they never poison the catalog
/// cache, and a later query over the same kind behaves as if the failing
/// call had not happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The kind's index failed to build.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An entry's value could not be represented as the requested type.
    #[error(transparent)]
    Cast(#[from] CastError),

    /// A strict single-value query found no entry.
    #[error("no `{kind}` metadata declared on `{key}`")]
    NotFound { key: &'static str, kind: KindId },

    /// A reverse match set held no values.
    #[error("match set must contain at least one value")]
    EmptyMatchSet,
}
