//! The declaration source: where metadata comes from.
//!
//! The engine never discovers declarations itself; it consumes them through
//! the [`DeclarationSource`] contract: "list the payloads of kind X declared
//! on key K, in declaration order". Any registration mechanism can satisfy
//! the contract; [`DeclarationSet`] is the in-memory implementation used when
//! declarations are registered explicitly through a builder.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::{KindId, KindPolicy, MetaKey};
use crate::value::{RawValue, Scalar};

/// Supplier of raw metadata declarations for one key type.
///
/// Both listings must be deterministic and already materialized before the
/// first query: the catalog treats the source as a static definition set and
/// indexes it exactly once per kind.
pub trait DeclarationSource<K: MetaKey> {
    /// Payloads of `kind` declared on `key`, in declaration order.
    ///
    /// Zero payloads is a normal result, not an error.
    fn list_metadata(&self, key: K, kind: KindId) -> Vec<RawValue>;

    /// Keys of the type, in declaration order.
    fn list_keys(&self) -> &[K] {
        K::variants()
    }

    /// Multiplicity contract for a kind.
    fn kind_policy(&self, kind: KindId) -> KindPolicy {
        let _ = kind;
        KindPolicy::Multiple
    }
}

/// In-memory, insertion-ordered declaration set.
///
/// ```
/// use metacat::{DeclarationSet, DeclarationSource, KindId, RawValue};
///
/// metacat::meta_keys! {
///     enum Greeting { Hi, Hello }
/// }
///
/// const CODE: KindId = KindId::new("code");
///
/// let set = DeclarationSet::builder()
///     .attach(Greeting::Hi, CODE, 123)
///     .attach_all(Greeting::Hello, CODE, ["one", "two"])
///     .build();
///
/// assert_eq!(set.list_metadata(Greeting::Hi, CODE), vec![RawValue::scalar(123)]);
/// ```
#[derive(Debug, Clone)]
pub struct DeclarationSet<K: MetaKey> {
    declarations: IndexMap<(K, KindId), Vec<RawValue>>,
    policies: FxHashMap<KindId, KindPolicy>,
}

impl<K: MetaKey> DeclarationSet<K> {
    /// Start an empty builder.
    pub fn builder() -> DeclarationSetBuilder<K> {
        DeclarationSetBuilder {
            set: DeclarationSet {
                declarations: IndexMap::new(),
                policies: FxHashMap::default(),
            },
        }
    }

    /// Distinct kinds with at least one declaration, in first-declared order.
    pub fn kinds(&self) -> Vec<KindId> {
        let mut kinds = Vec::new();
        for (_, kind) in self.declarations.keys() {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Total number of declared payloads, across all keys and kinds.
    pub fn len(&self) -> usize {
        self.declarations.values().map(Vec::len).sum()
    }

    /// Whether the set holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<K: MetaKey> DeclarationSource<K> for DeclarationSet<K> {
    fn list_metadata(&self, key: K, kind: KindId) -> Vec<RawValue> {
        self.declarations
            .get(&(key, kind))
            .cloned()
            .unwrap_or_default()
    }

    fn kind_policy(&self, kind: KindId) -> KindPolicy {
        self.policies.get(&kind).copied().unwrap_or_default()
    }
}

/// Builder for [`DeclarationSet`].
///
/// Repeated `attach`/`attach_all` calls on the same (key, kind) append
/// further entries; their call order is the entry declaration order.
#[derive(Debug, Clone)]
pub struct DeclarationSetBuilder<K: MetaKey> {
    set: DeclarationSet<K>,
}

impl<K: MetaKey> DeclarationSetBuilder<K> {
    /// Attach a scalar payload to a (key, kind).
    pub fn attach(self, key: K, kind: KindId, value: impl Into<Scalar>) -> Self {
        self.attach_raw(key, kind, RawValue::scalar(value))
    }

    /// Attach an ordered-collection payload to a (key, kind).
    pub fn attach_all<I>(self, key: K, kind: KindId, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        self.attach_raw(key, kind, RawValue::list(values))
    }

    /// Attach an already-shaped payload to a (key, kind).
    pub fn attach_raw(mut self, key: K, kind: KindId, raw: RawValue) -> Self {
        self.set
            .declarations
            .entry((key, kind))
            .or_default()
            .push(raw);
        self
    }

    /// Register the multiplicity contract for a kind.
    pub fn policy(mut self, kind: KindId, policy: KindPolicy) -> Self {
        self.set.policies.insert(kind, policy);
        self
    }

    /// Finish the set.
    pub fn build(self) -> DeclarationSet<K> {
        self.set
    }
}
