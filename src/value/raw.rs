//! Payload shapes: one scalar, or an ordered collection of scalars.

use std::slice;

use super::scalar::Scalar;

/// The opaque payload of one metadata declaration.
///
/// [`flatten`](RawValue::flatten) normalizes both shapes to the same ordered
/// scalar sequence: a scalar payload becomes a one-element slice, a
/// collection payload is returned unchanged. Normalization only reshapes;
/// duplicates are preserved and nothing is cast.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A single scalar value.
    Scalar(Scalar),
    /// An ordered collection of scalars, in declaration order.
    List(Vec<Scalar>),
}

impl RawValue {
    /// Build a scalar payload.
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        RawValue::Scalar(value.into())
    }

    /// Build a collection payload, preserving iteration order.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        RawValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Whether the payload is a collection rather than a single scalar.
    pub fn is_collection(&self) -> bool {
        matches!(self, RawValue::List(_))
    }

    /// Number of scalar elements (1 for a scalar payload).
    pub fn count(&self) -> usize {
        match self {
            RawValue::Scalar(_) => 1,
            RawValue::List(items) => items.len(),
        }
    }

    /// The uniform ordered view over both shapes.
    pub fn flatten(&self) -> &[Scalar] {
        match self {
            RawValue::Scalar(value) => slice::from_ref(value),
            RawValue::List(items) => items,
        }
    }
}

impl From<Scalar> for RawValue {
    fn from(value: Scalar) -> Self {
        RawValue::Scalar(value)
    }
}

impl From<Vec<Scalar>> for RawValue {
    fn from(values: Vec<Scalar>) -> Self {
        RawValue::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_flattens_to_one_element() {
        let raw = RawValue::scalar(123);
        assert!(!raw.is_collection());
        assert_eq!(raw.count(), 1);
        assert_eq!(raw.flatten(), &[Scalar::Int(123)]);
    }

    #[test]
    fn test_string_is_a_scalar_not_a_char_collection() {
        let raw = RawValue::scalar("hello");
        assert!(!raw.is_collection());
        assert_eq!(raw.count(), 1);
    }

    #[test]
    fn test_list_flattens_in_order() {
        let raw = RawValue::list(["one", "two", "three"]);
        assert!(raw.is_collection());
        assert_eq!(raw.count(), 3);
        assert_eq!(
            raw.flatten(),
            &[
                Scalar::from("one"),
                Scalar::from("two"),
                Scalar::from("three")
            ]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let raw = RawValue::list(["dup", "dup"]);
        assert_eq!(raw.flatten(), &[Scalar::from("dup"), Scalar::from("dup")]);
    }

    #[test]
    fn test_empty_list_is_representable_but_countless() {
        // Rejected later, at catalog build; the shape itself stays inert.
        let raw = RawValue::List(Vec::new());
        assert_eq!(raw.count(), 0);
        assert!(raw.flatten().is_empty());
    }
}
