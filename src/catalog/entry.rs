//! A single validated metadata entry.

use crate::base::KindId;
use crate::value::{CastError, FromScalar, RawValue, Scalar, scalar_as, scalars_as};

/// An immutable metadata record attached to exactly one key.
///
/// Construction is gated by the catalog build: a payload with zero elements
/// never becomes an entry, so every entry holds at least one scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry {
    kind: KindId,
    raw: RawValue,
}

impl MetaEntry {
    /// Build an entry, refusing payloads with no elements.
    pub(crate) fn new(kind: KindId, raw: RawValue) -> Option<Self> {
        if raw.count() == 0 {
            return None;
        }
        Some(Self { kind, raw })
    }

    /// The metadata axis this entry belongs to.
    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// The declared payload.
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// Whether the payload is a collection rather than a single scalar.
    pub fn is_collection(&self) -> bool {
        self.raw.is_collection()
    }

    /// Number of scalar elements (1 for a non-collection).
    pub fn count(&self) -> usize {
        self.raw.count()
    }

    /// The ordered scalar sequence of the payload.
    pub fn flatten(&self) -> &[Scalar] {
        self.raw.flatten()
    }

    /// The entry's effective single value: its first flattened scalar.
    pub fn first(&self) -> &Scalar {
        match &self.raw {
            RawValue::Scalar(value) => value,
            // non-empty by construction
            RawValue::List(items) => &items[0],
        }
    }

    /// Cast the effective single value to `T`.
    pub fn value_as<T: FromScalar>(&self) -> Result<T, CastError> {
        scalar_as(self.first())
    }

    /// Cast every element of the payload to `T`, preserving order.
    pub fn values_as<T: FromScalar>(&self) -> Result<Vec<T>, CastError> {
        scalars_as(self.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIND: KindId = KindId::new("test");

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(MetaEntry::new(KIND, RawValue::List(Vec::new())).is_none());
    }

    #[test]
    fn test_scalar_entry_shape() {
        let entry = MetaEntry::new(KIND, RawValue::scalar(123)).unwrap();
        assert!(!entry.is_collection());
        assert_eq!(entry.count(), 1);
        assert_eq!(entry.first(), &Scalar::Int(123));
        assert_eq!(entry.value_as::<i64>(), Ok(123));
    }

    #[test]
    fn test_collection_entry_effective_value_is_first_element() {
        let entry = MetaEntry::new(KIND, RawValue::list(["one", "two"])).unwrap();
        assert!(entry.is_collection());
        assert_eq!(entry.count(), 2);
        assert_eq!(entry.first(), &Scalar::from("one"));
    }

    #[test]
    fn test_values_as_casts_every_element() {
        let entry = MetaEntry::new(KIND, RawValue::list(["one", "two"])).unwrap();
        assert_eq!(
            entry.values_as::<String>(),
            Ok(vec!["one".to_string(), "two".to_string()])
        );
        assert!(entry.values_as::<i64>().is_err());
    }
}
