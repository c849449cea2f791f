//! Cross-enumeration resolution.
//!
//! Matching one key type's constant to a different key type's constant is a
//! pipeline, not a new algorithm: extract the source key's metadata values,
//! then feed them as the match criterion into the target catalog (or, for
//! the name-based variants, into the target key type's declared names).

use smol_str::SmolStr;

use crate::base::{KindId, MetaKey};
use crate::source::DeclarationSource;
use crate::value::Scalar;

use super::{Catalog, MatchMode, QueryError};

impl<K: MetaKey, S: DeclarationSource<K>> Catalog<K, S> {
    /// Resolve `key` to the first key of another type whose `target_kind`
    /// metadata overlaps this key's `kind` values.
    ///
    /// `Ok(None)` when the source key declares no values, or when nothing in
    /// the target catalog overlaps them.
    pub fn resolve_key<K2, S2>(
        &self,
        key: K,
        kind: KindId,
        target: &Catalog<K2, S2>,
        target_kind: KindId,
    ) -> Result<Option<K2>, QueryError>
    where
        K2: MetaKey,
        S2: DeclarationSource<K2>,
    {
        let values = self.values_of::<Scalar>(key, kind)?;
        if values.is_empty() {
            return Ok(None);
        }
        target.key_from_values(&values, target_kind, MatchMode::Overlap)
    }

    /// Resolve `key` to every distinct overlapping key of another type,
    /// in the target's catalog order.
    pub fn resolve_keys<K2, S2>(
        &self,
        key: K,
        kind: KindId,
        target: &Catalog<K2, S2>,
        target_kind: KindId,
    ) -> Result<Vec<K2>, QueryError>
    where
        K2: MetaKey,
        S2: DeclarationSource<K2>,
    {
        let values = self.values_of::<Scalar>(key, kind)?;
        if values.is_empty() {
            return Ok(Vec::new());
        }
        target.keys_from_values(&values, target_kind, MatchMode::Overlap)
    }

    /// Resolve `key` by its declared *name*: the first key of another type
    /// whose `target_kind` metadata contains the name as a string value.
    pub fn resolve_key_by_name<K2, S2>(
        &self,
        key: K,
        target: &Catalog<K2, S2>,
        target_kind: KindId,
    ) -> Result<Option<K2>, QueryError>
    where
        K2: MetaKey,
        S2: DeclarationSource<K2>,
    {
        let name = [Scalar::from(key.name())];
        target.key_from_values(&name, target_kind, MatchMode::Overlap)
    }

    /// Interpret `key`'s string metadata as names of another key type and
    /// return the first named key, in the target's declaration order.
    ///
    /// Fails with a cast error if the `kind` metadata is not string-valued.
    pub fn resolve_named_key<K2>(&self, key: K, kind: KindId) -> Result<Option<K2>, QueryError>
    where
        K2: MetaKey,
    {
        let names = self.values_of::<SmolStr>(key, kind)?;
        Ok(K2::variants()
            .iter()
            .copied()
            .find(|candidate| names.iter().any(|name| name.as_str() == candidate.name())))
    }

    /// Every key of another type named by `key`'s string metadata, in the
    /// target's declaration order.
    pub fn resolve_named_keys<K2>(&self, key: K, kind: KindId) -> Result<Vec<K2>, QueryError>
    where
        K2: MetaKey,
    {
        let names = self.values_of::<SmolStr>(key, kind)?;
        Ok(K2::variants()
            .iter()
            .copied()
            .filter(|candidate| names.iter().any(|name| name.as_str() == candidate.name()))
            .collect())
    }
}
