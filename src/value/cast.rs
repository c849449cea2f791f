//! Typed extraction of scalar values.
//!
//! Casting is structural: a scalar answers a request for `T` only if it
//! already holds `T`-shaped data. Rust has no implicit primitive widening,
//! so none is applied here: an `Int` scalar does not answer an `f64`
//! request, and no string is ever parsed into a number.

use smol_str::SmolStr;
use thiserror::Error;

use super::scalar::Scalar;

/// A value could not be represented as the requested output type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// A single-value extraction hit a differently shaped scalar.
    #[error("cannot represent {found} value as {requested}")]
    Mismatch {
        requested: &'static str,
        found: &'static str,
    },

    /// A sequence extraction failed; `index` is the first failing element.
    #[error("cannot represent element {index} ({found} value) as {requested}")]
    ElementMismatch {
        requested: &'static str,
        found: &'static str,
        index: usize,
    },
}

/// Types extractable from a [`Scalar`].
///
/// Implemented for the primitive shapes the scalar can hold, and for
/// [`Scalar`] itself (the untyped identity extraction reverse lookups use).
pub trait FromScalar: Sized {
    /// Name of the requested type, used in cast diagnostics.
    const TYPE_NAME: &'static str;

    /// Extract `Self` if the scalar holds compatible data.
    fn from_scalar(scalar: &Scalar) -> Option<Self>;
}

impl FromScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromScalar for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromScalar for u64 {
    const TYPE_NAME: &'static str = "u64";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Uint(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromScalar for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromScalar for char {
    const TYPE_NAME: &'static str = "char";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Char(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromScalar for SmolStr {
    const TYPE_NAME: &'static str = "string";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Str(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl FromScalar for String {
    const TYPE_NAME: &'static str = "string";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Str(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl FromScalar for Scalar {
    const TYPE_NAME: &'static str = "scalar";

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        Some(scalar.clone())
    }
}

/// Cast one scalar to `T`.
pub fn scalar_as<T: FromScalar>(scalar: &Scalar) -> Result<T, CastError> {
    T::from_scalar(scalar).ok_or(CastError::Mismatch {
        requested: T::TYPE_NAME,
        found: scalar.type_name(),
    })
}

/// Cast every scalar of a sequence to `T`, preserving order.
///
/// Fails on the first element that cannot be represented, reporting its
/// index; no partial output is returned.
pub fn scalars_as<T: FromScalar>(scalars: &[Scalar]) -> Result<Vec<T>, CastError> {
    let mut out = Vec::with_capacity(scalars.len());
    for (index, scalar) in scalars.iter().enumerate() {
        let value = T::from_scalar(scalar).ok_or(CastError::ElementMismatch {
            requested: T::TYPE_NAME,
            found: scalar.type_name(),
            index,
        })?;
        out.push(value);
    }
    Ok(out)
}
