//! Error types for catalog construction.

use thiserror::Error;

use crate::base::KindId;

/// Errors raised while building a catalog index.
///
/// Build failures abort the failing kind's cache slot: the slot stays
/// unbuilt, the error propagates to the caller that triggered the build,
/// and a later query may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A key declares a payload with zero elements.
    #[error("`{key}` declares an empty `{kind}` payload")]
    EmptyDeclaration { key: &'static str, kind: KindId },

    /// A key declares several entries of a kind whose policy allows one.
    #[error("`{key}` declares {count} `{kind}` entries, but the kind allows at most one")]
    AmbiguousDeclaration {
        key: &'static str,
        kind: KindId,
        count: usize,
    },
}
