//! At-most-once build cache for catalog indexes.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::{KindId, MetaKey};

use super::error::CatalogError;
use super::index::CatalogIndex;

type Slot<K> = Arc<OnceCell<Arc<CatalogIndex<K>>>>;

/// Kind → built index, append-only for the cache's lifetime.
///
/// Concurrent first queries for the same kind race to one build-once slot:
/// exactly one caller builds, the rest block and receive the same `Arc`.
/// A failed build leaves the slot unbuilt, so a later query may retry;
/// the error reaches only the caller that triggered the build.
#[derive(Debug)]
pub struct CatalogCache<K: MetaKey> {
    slots: RwLock<FxHashMap<KindId, Slot<K>>>,
}

impl<K: MetaKey> CatalogCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(FxHashMap::default()),
        }
    }

    /// Return the cached index for `kind`, building it on first access.
    pub fn get_or_build<F>(&self, kind: KindId, build: F) -> Result<Arc<CatalogIndex<K>>, CatalogError>
    where
        F: FnOnce() -> Result<CatalogIndex<K>, CatalogError>,
    {
        let slot = {
            let slots = self.slots.read();
            slots.get(&kind).cloned()
        };
        let slot = match slot {
            Some(slot) => slot,
            None => {
                trace!("allocating cache slot for `{}`", kind);
                self.slots.write().entry(kind).or_default().clone()
            }
        };

        slot.get_or_try_init(|| build().map(Arc::new)).cloned()
    }

    /// The already-built index for `kind`, without triggering a build.
    pub fn built(&self, kind: KindId) -> Option<Arc<CatalogIndex<K>>> {
        let slots = self.slots.read();
        slots.get(&kind).and_then(|slot| slot.get().cloned())
    }

    /// Number of kinds with a built index.
    pub fn built_count(&self) -> usize {
        let slots = self.slots.read();
        slots.values().filter(|slot| slot.get().is_some()).count()
    }
}

impl<K: MetaKey> Default for CatalogCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
