use std::iter::FusedIterator;

use crate::optional::Optional;

/// Iterator over a reference to the payload of an [`Optional`]; yields zero or one item.
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: Option<&'a T>,
}
impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self { Self { inner: self.inner } }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> { self.inner.take() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {
  #[inline]
  fn len(&self) -> usize { usize::from(self.inner.is_some()) }
}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the payload of an [`Optional`]; yields zero or one item.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<T> { self.inner.take() }
}
impl<T> ExactSizeIterator for IntoIter<T> {
  #[inline]
  fn len(&self) -> usize { usize::from(self.inner.is_some()) }
}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> IntoIter<T> { IntoIter { inner: self.into_nullable() } }
}
impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}


impl<T> Optional<T> {
  /// Iterates over the payload. Every call starts a fresh traversal.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter { inner: self.as_nullable() } }

  /// Projects the payload with `selector`, which is called at most once, and only when a value is present.
  #[inline]
  pub fn map<U>(self, selector: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Optional::Some(value) => Optional::Some(selector(value)),
      Optional::None => Optional::None,
    }
  }

  /// Like [`map`](Self::map), also passing the position of the payload in the sequence, which is always `0`.
  #[inline]
  pub fn map_indexed<U>(self, selector: impl FnOnce(T, usize) -> U) -> Optional<U> {
    self.map(|value| selector(value, 0))
  }

  /// Keeps the payload only if `predicate` holds. `predicate` is called at most once, and only when a value is present.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
    match self {
      Optional::Some(value) if predicate(&value) => Optional::Some(value),
      _ => Optional::None,
    }
  }

  #[inline]
  pub fn filter_indexed(self, predicate: impl FnOnce(&T, usize) -> bool) -> Optional<T> {
    self.filter(|value| predicate(value, 0))
  }

  #[inline]
  pub fn for_each(&self, action: impl FnOnce(&T)) {
    if let Optional::Some(value) = self {
      action(value);
    }
  }
}


/// Iterator adapter yielding the payloads of the present optionals of an underlying iterator, in order.
#[derive(Clone, Debug)]
pub struct Flatten<I> {
  inner: I,
}
impl<I> Flatten<I> {
  #[inline]
  pub fn new(inner: I) -> Self { Self { inner } }

  #[inline]
  pub fn into_inner(self) -> I { self.inner }
}

impl<I, T> Iterator for Flatten<I> where
  I: Iterator<Item=Optional<T>>
{
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> {
    self.inner.by_ref().find_map(Optional::into_nullable)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.inner.size_hint().1)
  }
}
impl<I, T> DoubleEndedIterator for Flatten<I> where
  I: DoubleEndedIterator<Item=Optional<T>>
{
  #[inline]
  fn next_back(&mut self) -> Option<T> {
    self.inner.by_ref().rev().find_map(Optional::into_nullable)
  }
}
impl<I, T> FusedIterator for Flatten<I> where
  I: FusedIterator<Item=Optional<T>> {}

pub trait OptionalIteratorExt<T>: Iterator<Item=Optional<T>> + Sized {
  /// Skips absent optionals and unwraps present ones, see [`Flatten`].
  #[inline]
  fn flatten_optionals(self) -> Flatten<Self> { Flatten::new(self) }
}
impl<I, T> OptionalIteratorExt<T> for I where
  I: Iterator<Item=Optional<T>> {}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn test_enumeration_cardinality() {
    assert_eq!(Optional::Some(7).into_iter().collect::<Vec<_>>(), vec![7]);
    assert_eq!(Optional::<i32>::None.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());
    assert_eq!(Optional::Some(7).iter().len(), 1);
    assert_eq!(Optional::<i32>::None.iter().len(), 0);
  }

  #[test]
  fn test_enumeration_restarts() {
    let optional = Optional::Some(String::from("x"));
    let first: Vec<&String> = optional.iter().collect();
    let second: Vec<&String> = (&optional).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
  }

  #[test]
  fn test_iter_clone_without_clone_payload() {
    struct Token(u8);

    let optional = Optional::Some(Token(4));
    let iter = optional.iter();
    let copy = iter.clone();
    assert_eq!(iter.map(|t| t.0).collect::<Vec<_>>(), vec![4]);
    assert_eq!(copy.map(|t| t.0).collect::<Vec<_>>(), vec![4]);
  }

  #[test]
  fn test_for_loop() {
    let mut seen = Vec::new();
    for value in &Optional::Some(3) {
      seen.push(*value);
    }
    for value in Optional::<i32>::None {
      seen.push(value);
    }
    assert_eq!(seen, vec![3]);
  }

  #[test]
  fn test_map_invokes_selector_only_when_present() {
    let calls = Cell::new(0);
    let mapped = Optional::Some(2).map(|value| {
      calls.set(calls.get() + 1);
      value * 10
    });
    assert_eq!(mapped, Optional::Some(20));
    let mapped = Optional::<i32>::None.map(|value| {
      calls.set(calls.get() + 1);
      value * 10
    });
    assert_eq!(mapped, Optional::None);
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn test_map_indexed_passes_zero() {
    assert_eq!(Optional::Some("a").map_indexed(|value, index| format!("{value}{index}")), Optional::Some("a0".to_string()));
  }

  #[test]
  fn test_filter() {
    assert_eq!(Optional::Some(4).filter(|v| v % 2 == 0), Optional::Some(4));
    assert_eq!(Optional::Some(3).filter(|v| v % 2 == 0), Optional::None);
    let calls = Cell::new(0);
    let filtered = Optional::<i32>::None.filter(|_| {
      calls.set(calls.get() + 1);
      true
    });
    assert_eq!(filtered, Optional::None);
    assert_eq!(calls.get(), 0);
    assert_eq!(Optional::Some(4).filter_indexed(|_, index| index == 0), Optional::Some(4));
  }

  #[test]
  fn test_for_each() {
    let calls = Cell::new(0);
    Optional::Some(1).for_each(|_| calls.set(calls.get() + 1));
    Optional::<i32>::None.for_each(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn test_flatten_preserves_order() {
    let optionals = vec![Optional::Some(1), Optional::None, Optional::Some(3)];
    assert_eq!(optionals.clone().into_iter().flatten_optionals().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(optionals.into_iter().flatten_optionals().rev().collect::<Vec<_>>(), vec![3, 1]);
  }

  #[test]
  fn test_flatten_is_lazy() {
    let pulled = Cell::new(0);
    let mut flatten = (0..10)
      .map(|i| {
        pulled.set(pulled.get() + 1);
        if i % 2 == 0 { Optional::None } else { Optional::Some(i) }
      })
      .flatten_optionals();
    assert_eq!(pulled.get(), 0);
    assert_eq!(flatten.next(), Some(1));
    assert_eq!(pulled.get(), 2);
  }
}
