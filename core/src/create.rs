//! Construction and coercion of [`Optional`] values.
//!
//! Plain values always become `Some`. Values in nullable form (`Option<T>`) are normalized: `None` becomes
//! [`Optional::None`] and `Some(value)` becomes [`Optional::Some`]. Coercion never fails; use [`create_required`] to
//! reject absent input instead.
//!
//! A present optional holding an absent payload, such as `Optional::Some(None::<u32>)`, is never produced by coercion;
//! build it explicitly with [`Optional::Some`].

use crate::error::OptionalError;
use crate::iter::Flatten;
use crate::optional::Optional;

/// Coerces `value` into an optional, see [`ToOptional`].
#[inline]
pub fn create<V: ToOptional>(value: V) -> Optional<V::Value> { value.to_optional() }

#[inline]
pub fn create_nullable<T>(value: Option<T>) -> Optional<T> { Optional::from(value) }

/// Creates a present optional from `value`, failing with [`OptionalError::NullArgument`] when it is absent.
#[inline]
pub fn create_required<T>(value: Option<T>) -> Result<Optional<T>, OptionalError> {
  value.map(Optional::Some).ok_or(OptionalError::NullArgument)
}

#[inline]
pub fn none<T>() -> Optional<T> { Optional::None }

/// Lazily yields the payloads of the present optionals in `optionals`, in order, skipping absent ones.
#[inline]
pub fn flatten<T, I: IntoIterator<Item=Optional<T>>>(optionals: I) -> Flatten<I::IntoIter> {
  Flatten::new(optionals.into_iter())
}


/// Conversion into an [`Optional`] in method-chaining position.
///
/// Plain values become `Some`. Nullable values (`Option<T>`) and optionals are normalized, so an absent source always
/// becomes [`Optional::None`].
pub trait ToOptional {
  type Value;

  fn to_optional(self) -> Optional<Self::Value>;
}

impl<T> ToOptional for Option<T> {
  type Value = T;

  #[inline]
  fn to_optional(self) -> Optional<T> { create_nullable(self) }
}

impl<T> ToOptional for Optional<T> {
  type Value = T;

  #[inline]
  fn to_optional(self) -> Optional<T> { self }
}

macro_rules! plain_to_optional_impl {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ToOptional for $ty {
        type Value = $ty;

        #[inline]
        fn to_optional(self) -> Optional<$ty> { Optional::Some(self) }
      }
    )*
  };
}
plain_to_optional_impl!(
  bool, char, (),
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  String,
);

impl<'a, T: ?Sized> ToOptional for &'a T {
  type Value = &'a T;

  #[inline]
  fn to_optional(self) -> Optional<&'a T> { Optional::Some(self) }
}

impl<T: ?Sized> ToOptional for Box<T> {
  type Value = Box<T>;

  #[inline]
  fn to_optional(self) -> Optional<Box<T>> { Optional::Some(self) }
}

impl<T> ToOptional for Vec<T> {
  type Value = Vec<T>;

  #[inline]
  fn to_optional(self) -> Optional<Vec<T>> { Optional::Some(self) }
}
