//! Payload model: scalar values, payload shapes, and typed casting.
//!
//! A metadata payload is either one [`Scalar`] or an ordered collection of
//! scalars ([`RawValue`]); [`RawValue::flatten`] exposes the uniform ordered
//! view both shapes share. [`FromScalar`] is the typed extraction layer:
//! a scalar answers a request for `T` only if it already holds `T`-shaped
//! data, otherwise the cast fails with a [`CastError`].

mod cast;
mod raw;
mod scalar;

pub use cast::{CastError, FromScalar, scalar_as, scalars_as};
pub use raw::RawValue;
pub use scalar::Scalar;
