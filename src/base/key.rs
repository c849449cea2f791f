//! The key abstraction: closed, declaration-ordered constant sets.

use std::fmt;
use std::hash::Hash;

/// A symbolic constant belonging to a closed, enumerable set.
///
/// Key types are finite and fully known before the first query. The order of
/// [`variants`](MetaKey::variants) is the set's declaration order; the engine
/// uses it as the primary tie-break for every first-match query, so it must
/// be stable across calls.
///
/// Most implementations come from the [`meta_keys!`](crate::meta_keys) macro:
///
/// ```
/// use metacat::MetaKey;
///
/// metacat::meta_keys! {
///     pub enum Color { Red, Green, Blue }
/// }
///
/// assert_eq!(Color::variants(), &[Color::Red, Color::Green, Color::Blue]);
/// assert_eq!(Color::Green.name(), "Green");
/// assert_eq!(Color::Blue.ordinal(), 2);
/// ```
pub trait MetaKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every key of the type, in declaration order.
    fn variants() -> &'static [Self];

    /// The key's declared symbolic name.
    fn name(&self) -> &'static str;

    /// Position of this key in [`variants`](MetaKey::variants).
    fn ordinal(&self) -> usize {
        Self::variants()
            .iter()
            .position(|key| key == self)
            .unwrap_or(usize::MAX)
    }
}

/// Declare a field-less enum implementing [`MetaKey`].
///
/// The variant order is the declaration order the catalog indexes by.
#[macro_export]
macro_rules! meta_keys {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $($(#[$inner:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$inner])* $variant),+
        }

        impl $crate::base::MetaKey for $name {
            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::meta_keys! {
        enum Direction { North, East, South, West }
    }

    #[test]
    fn test_variants_in_declaration_order() {
        assert_eq!(
            Direction::variants(),
            &[
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West
            ]
        );
    }

    #[test]
    fn test_name_matches_declaration() {
        assert_eq!(Direction::North.name(), "North");
        assert_eq!(Direction::West.name(), "West");
    }

    #[test]
    fn test_ordinal_follows_declaration_order() {
        assert_eq!(Direction::North.ordinal(), 0);
        assert_eq!(Direction::South.ordinal(), 2);
    }
}
