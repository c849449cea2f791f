//! The ordered (entry, key) index for one (key type, kind).

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{KindId, KindPolicy, MetaKey};
use crate::source::DeclarationSource;

use super::entry::MetaEntry;
use super::error::CatalogError;

/// The cached index every query of one (key type, kind) runs against.
///
/// Entries sit in composite order (key declaration order, then entry
/// declaration order within a key), so "first match" is deterministic
/// everywhere. Built once, immutable thereafter, safe to share across
/// readers.
#[derive(Debug, Clone)]
pub struct CatalogIndex<K: MetaKey> {
    kind: KindId,
    entries: Vec<(MetaEntry, K)>,
    /// Positions into `entries`, per key, in entry declaration order.
    by_key: FxHashMap<K, Vec<u32>>,
}

impl<K: MetaKey> CatalogIndex<K> {
    /// Build the index for `kind` by enumerating the source.
    ///
    /// Validates the non-empty-payload invariant and the kind's multiplicity
    /// policy; a violation aborts the build with the offending key named.
    pub fn build<S>(source: &S, kind: KindId) -> Result<Self, CatalogError>
    where
        S: DeclarationSource<K>,
    {
        let keys = source.list_keys();
        let policy = source.kind_policy(kind);
        debug!("building `{}` catalog index over {} keys", kind, keys.len());

        let mut entries = Vec::new();
        let mut by_key: FxHashMap<K, Vec<u32>> = FxHashMap::default();

        for &key in keys {
            let payloads = source.list_metadata(key, kind);
            if payloads.is_empty() {
                continue;
            }
            if policy == KindPolicy::AtMostOne && payloads.len() > 1 {
                return Err(CatalogError::AmbiguousDeclaration {
                    key: key.name(),
                    kind,
                    count: payloads.len(),
                });
            }

            trace!("`{}`: {} `{}` entries", key.name(), payloads.len(), kind);
            for raw in payloads {
                let entry = MetaEntry::new(kind, raw).ok_or(CatalogError::EmptyDeclaration {
                    key: key.name(),
                    kind,
                })?;
                by_key.entry(key).or_default().push(entries.len() as u32);
                entries.push((entry, key));
            }
        }

        debug!("`{}` catalog index built: {} entries", kind, entries.len());
        Ok(Self {
            kind,
            entries,
            by_key,
        })
    }

    /// The kind this index covers.
    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// Total number of (entry, key) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key declares this kind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (entry, key) pairs in composite order.
    pub fn iter(&self) -> impl Iterator<Item = (&MetaEntry, K)> + '_ {
        self.entries.iter().map(|(entry, key)| (entry, *key))
    }

    /// The entries declared on `key`, in declaration order.
    pub fn entries_for(&self, key: K) -> impl Iterator<Item = &MetaEntry> + '_ {
        self.by_key
            .get(&key)
            .into_iter()
            .flatten()
            .map(|&position| &self.entries[position as usize].0)
    }

    /// The first entry declared on `key`, if any.
    pub fn first_for(&self, key: K) -> Option<&MetaEntry> {
        self.entries_for(key).next()
    }
}
