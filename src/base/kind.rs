//! Metadata-kind tags and per-kind multiplicity contracts.

use std::fmt;

/// Tag naming one metadata axis attached to a key type.
///
/// Entries of different kinds are indexed and queried independently; the
/// engine never compares values across kinds. Kinds are cheap `Copy` tags
/// over static strings, so they can be declared as constants:
///
/// ```
/// use metacat::KindId;
///
/// const NUMERIC_CODE: KindId = KindId::new("numeric-code");
/// assert_eq!(NUMERIC_CODE.as_str(), "numeric-code");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(&'static str);

impl KindId {
    /// Create a kind tag from its static name.
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// The kind's name.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Well-known kind carrying a key's human-readable display name.
///
/// Queried through [`Catalog::display_name`](crate::Catalog::display_name);
/// conventionally declared with [`KindPolicy::AtMostOne`].
pub const DISPLAY_NAME: KindId = KindId::new("display-name");

/// How many entries of a kind a single key may declare.
///
/// The policy is checked once, when the kind's catalog index is built.
/// Violations fail the build with
/// [`CatalogError::AmbiguousDeclaration`](crate::CatalogError::AmbiguousDeclaration).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindPolicy {
    /// Any number of entries per key, including zero.
    #[default]
    Multiple,
    /// Zero or one entry per key.
    AtMostOne,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_equality_is_by_name() {
        assert_eq!(KindId::new("alias"), KindId::new("alias"));
        assert_ne!(KindId::new("alias"), KindId::new("name"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(KindId::new("numeric-code").to_string(), "numeric-code");
    }

    #[test]
    fn test_default_policy_is_multiple() {
        assert_eq!(KindPolicy::default(), KindPolicy::Multiple);
    }
}
