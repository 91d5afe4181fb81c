use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

use crate::error::OptionalError;

/// Either a present value ([`Some`](Optional::Some)) or the absence of a value ([`None`](Optional::None)).
///
/// The payload of a present optional may itself represent absence: `Optional::Some(None::<u32>)` is a valid state that
/// is distinct from `Optional::None`. Optionals are immutable; there is no API to change a value in place.
///
/// Two optionals are equal when both are `None`, or when both are `Some` with equal payloads. `None` hashes to `0`,
/// `Some(value)` hashes exactly like `value`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Optional<T> {
  None,
  Some(T),
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Optional::None }
}

impl<T> Optional<T> {
  /// Creates a present optional. Any payload is accepted, including payloads that represent absence themselves.
  #[inline]
  pub const fn some(value: T) -> Self { Optional::Some(value) }

  #[inline]
  pub const fn none() -> Self { Optional::None }


  #[inline]
  pub const fn has_value(&self) -> bool { matches!(self, Optional::Some(_)) }

  #[inline]
  pub const fn is_none(&self) -> bool { !self.has_value() }


  /// Gets a reference to the payload, or [`OptionalError::NoValue`] if there is none.
  #[inline]
  pub fn value(&self) -> Result<&T, OptionalError> {
    match self {
      Optional::Some(value) => Ok(value),
      Optional::None => Err(OptionalError::NoValue),
    }
  }

  /// Gets the payload, or [`OptionalError::NoValue`] if there is none.
  #[inline]
  pub fn into_value(self) -> Result<T, OptionalError> {
    match self {
      Optional::Some(value) => Ok(value),
      Optional::None => Err(OptionalError::NoValue),
    }
  }

  #[inline]
  pub fn value_or_default(self) -> T where T: Default {
    match self {
      Optional::Some(value) => value,
      Optional::None => T::default(),
    }
  }

  #[inline]
  pub fn value_or(self, fallback: T) -> T {
    match self {
      Optional::Some(value) => value,
      Optional::None => fallback,
    }
  }

  /// Gets the payload, or the result of `fallback` if there is none. `fallback` is only called when absent.
  #[inline]
  pub fn value_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Optional::Some(value) => value,
      Optional::None => fallback(),
    }
  }

  /// Returns whether a value is present, together with a clone of the payload or the default value of `T`.
  #[inline]
  pub fn try_get_value(&self) -> (bool, T) where T: Clone + Default {
    match self {
      Optional::Some(value) => (true, value.clone()),
      Optional::None => (false, T::default()),
    }
  }

  #[inline]
  pub fn into_try_get_value(self) -> (bool, T) where T: Default {
    match self {
      Optional::Some(value) => (true, value),
      Optional::None => (false, T::default()),
    }
  }


  #[inline]
  pub fn as_ref(&self) -> Optional<&T> {
    match self {
      Optional::Some(value) => Optional::Some(value),
      Optional::None => Optional::None,
    }
  }

  #[inline]
  pub fn as_nullable(&self) -> Option<&T> {
    match self {
      Optional::Some(value) => Some(value),
      Optional::None => None,
    }
  }

  #[inline]
  pub fn into_nullable(self) -> Option<T> {
    match self {
      Optional::Some(value) => Some(value),
      Optional::None => None,
    }
  }
}

impl<T: Hash> Optional<T> {
  /// Hash code of this optional under `build_hasher`: `0` for `None`, the hash of the payload otherwise.
  #[inline]
  pub fn hash_code_with<S: BuildHasher>(&self, build_hasher: &S) -> u64 {
    match self {
      Optional::Some(value) => build_hasher.hash_one(value),
      Optional::None => 0,
    }
  }

  /// Hash code of this optional under a deterministic [`DefaultHasher`].
  #[inline]
  pub fn hash_code(&self) -> u64 {
    self.hash_code_with(&BuildHasherDefault::<DefaultHasher>::default())
  }
}

impl<T: PartialEq + 'static> Optional<T> {
  /// Compares against an arbitrary value. Only an `Optional<T>` of the same `T` can be equal; a bare payload or an
  /// optional of another payload type never is.
  pub fn equals_any(&self, other: &dyn Any) -> bool {
    other.downcast_ref::<Optional<T>>().is_some_and(|other| self == other)
  }
}

impl<T: Hash> Hash for Optional<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match self {
      Optional::Some(value) => value.hash(state),
      Optional::None => state.write_u64(0),
    }
  }
}

impl<T: Display> Display for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Optional::Some(value) => value.fmt(f),
      Optional::None => Ok(()),
    }
  }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Optional::Some(value),
      None => Optional::None,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_nullable() }
}
