//! The query engine: typed lookups, reverse matching, cross-resolution.
//!
//! Every operation is a pure function of (index, arguments); the only state
//! is the lazily filled [`CatalogCache`] behind [`Catalog`]. All first-match
//! operations resolve ties by catalog order (key declaration order, then
//! entry declaration order), never by any "best match" ranking.

mod cross;
mod error;

pub use error::QueryError;

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::{DISPLAY_NAME, KindId, MetaKey};
use crate::catalog::{CatalogCache, CatalogIndex, MetaEntry};
use crate::source::DeclarationSource;
use crate::value::{FromScalar, Scalar};

/// Predicate for match-set reverse lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Any element of the entry's flattened payload is in the match set.
    Overlap,
    /// Every element of the match set is in the entry's flattened payload.
    ContainsAll,
}

fn entry_matches(entry: &MetaEntry, values: &[Scalar], mode: MatchMode) -> bool {
    let elements = entry.flatten();
    match mode {
        MatchMode::Overlap => elements.iter().any(|element| values.contains(element)),
        MatchMode::ContainsAll => values.iter().all(|value| elements.contains(value)),
    }
}

/// The metadata catalog for one key type, and the queries over it.
///
/// Owns the declaration source and the per-kind index cache. Indexes are
/// built lazily on first query and shared immutably afterwards, so a
/// `Catalog` can serve many concurrent readers.
#[derive(Debug)]
pub struct Catalog<K: MetaKey, S: DeclarationSource<K>> {
    source: S,
    cache: CatalogCache<K>,
}

impl<K: MetaKey, S: DeclarationSource<K>> Catalog<K, S> {
    /// Wrap a declaration source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: CatalogCache::new(),
        }
    }

    /// The underlying declaration source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The index for `kind`, building and caching it on first access.
    pub fn index(&self, kind: KindId) -> Result<Arc<CatalogIndex<K>>, QueryError> {
        let index = self
            .cache
            .get_or_build(kind, || CatalogIndex::build(&self.source, kind))?;
        Ok(index)
    }

    // ========================================================================
    // Forward lookups: key → value(s)
    // ========================================================================

    /// The key's first `kind` value, cast to `T`.
    ///
    /// `Ok(None)` when the key declares no `kind` entry; cast failures always
    /// surface. For a collection entry the effective value is its first
    /// element.
    pub fn value_of<T: FromScalar>(&self, key: K, kind: KindId) -> Result<Option<T>, QueryError> {
        let index = self.index(kind)?;
        match index.first_for(key) {
            Some(entry) => Ok(Some(entry.value_as::<T>()?)),
            None => Ok(None),
        }
    }

    /// Strict variant of [`value_of`](Catalog::value_of): absence is an error.
    pub fn require_value<T: FromScalar>(&self, key: K, kind: KindId) -> Result<T, QueryError> {
        self.value_of(key, kind)?.ok_or(QueryError::NotFound {
            key: key.name(),
            kind,
        })
    }

    /// Every `kind` value of the key, flattened and cast to `T`.
    ///
    /// Entries contribute in declaration order and each is flattened in
    /// element order, so the result is the concatenation e1..eN. Empty when
    /// the key declares nothing; never an error.
    pub fn values_of<T: FromScalar>(&self, key: K, kind: KindId) -> Result<Vec<T>, QueryError> {
        let index = self.index(kind)?;
        let mut out = Vec::new();
        for entry in index.entries_for(key) {
            out.extend(entry.values_as::<T>()?);
        }
        Ok(out)
    }

    /// The key's display name: strict single string of [`DISPLAY_NAME`].
    pub fn display_name(&self, key: K) -> Result<SmolStr, QueryError> {
        self.require_value::<SmolStr>(key, DISPLAY_NAME)
    }

    // ========================================================================
    // Reverse lookups: value(s) → key(s)
    // ========================================================================

    /// The first key whose effective `kind` value equals `value`.
    ///
    /// Scans in catalog order; first match wins, multiple matches are not an
    /// error. `Ok(None)` when nothing matches.
    pub fn key_of_value(&self, value: &Scalar, kind: KindId) -> Result<Option<K>, QueryError> {
        let index = self.index(kind)?;
        Ok(index
            .iter()
            .find(|(entry, _)| entry.first() == value)
            .map(|(_, key)| key))
    }

    /// Every distinct key whose effective `kind` value equals `value`,
    /// in first-seen catalog order.
    pub fn keys_of_value(&self, value: &Scalar, kind: KindId) -> Result<Vec<K>, QueryError> {
        let index = self.index(kind)?;
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for (entry, key) in index.iter() {
            if entry.first() == value && seen.insert(key) {
                out.push(key);
            }
        }
        Ok(out)
    }

    /// The first key with an entry matching `values` under `mode`.
    ///
    /// `values` must hold at least one element
    /// ([`QueryError::EmptyMatchSet`] otherwise, before any evaluation).
    pub fn key_from_values(
        &self,
        values: &[Scalar],
        kind: KindId,
        mode: MatchMode,
    ) -> Result<Option<K>, QueryError> {
        if values.is_empty() {
            return Err(QueryError::EmptyMatchSet);
        }
        let index = self.index(kind)?;
        Ok(index
            .iter()
            .find(|(entry, _)| entry_matches(entry, values, mode))
            .map(|(_, key)| key))
    }

    /// Every distinct key with an entry matching `values` under `mode`,
    /// in first-seen catalog order.
    pub fn keys_from_values(
        &self,
        values: &[Scalar],
        kind: KindId,
        mode: MatchMode,
    ) -> Result<Vec<K>, QueryError> {
        if values.is_empty() {
            return Err(QueryError::EmptyMatchSet);
        }
        let index = self.index(kind)?;
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for (entry, key) in index.iter() {
            if entry_matches(entry, values, mode) && seen.insert(key) {
                out.push(key);
            }
        }
        Ok(out)
    }

    /// First key whose entry shares any element with `values`.
    pub fn key_overlapping_values(
        &self,
        values: &[Scalar],
        kind: KindId,
    ) -> Result<Option<K>, QueryError> {
        self.key_from_values(values, kind, MatchMode::Overlap)
    }

    /// First key whose entry contains every element of `values`.
    pub fn key_containing_values(
        &self,
        values: &[Scalar],
        kind: KindId,
    ) -> Result<Option<K>, QueryError> {
        self.key_from_values(values, kind, MatchMode::ContainsAll)
    }
}
