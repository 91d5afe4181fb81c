use crate::optional::Optional;

/// Two-branch matching on presence. These do not support dispatching on specific values; see
/// [`Matcher`](crate::matcher::Matcher) for that.
impl<T> Optional<T> {
  /// Calls `none` if there is no value, or `some` with the payload otherwise.
  #[inline]
  pub fn match_do(&self, none: impl FnOnce(), some: impl FnOnce(&T)) {
    match self {
      Optional::Some(value) => some(value),
      Optional::None => none(),
    }
  }

  /// Calls `action` if there is no value. Returns `self` so that [`on_some`](Self::on_some) can be chained.
  #[inline]
  pub fn on_none(&self, action: impl FnOnce()) -> &Self {
    if self.is_none() {
      action();
    }
    self
  }

  /// Calls `action` with the payload if there is one. Returns `self` so that [`on_none`](Self::on_none) can be chained.
  #[inline]
  pub fn on_some(&self, action: impl FnOnce(&T)) -> &Self {
    if let Optional::Some(value) = self {
      action(value);
    }
    self
  }

  /// Produces a value from whichever branch applies. Both branches are required.
  #[inline]
  pub fn match_map<U>(&self, none: impl FnOnce() -> U, some: impl FnOnce(&T) -> U) -> U {
    match self {
      Optional::Some(value) => some(value),
      Optional::None => none(),
    }
  }

  #[inline]
  pub fn into_match_map<U>(self, none: impl FnOnce() -> U, some: impl FnOnce(T) -> U) -> U {
    match self {
      Optional::Some(value) => some(value),
      Optional::None => none(),
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;

  #[test]
  fn test_match_do() {
    let log = RefCell::new(Vec::new());
    Optional::Some(1).match_do(|| log.borrow_mut().push("none".to_string()), |v| log.borrow_mut().push(format!("some {v}")));
    Optional::<i32>::None.match_do(|| log.borrow_mut().push("none".to_string()), |v| log.borrow_mut().push(format!("some {v}")));
    assert_eq!(log.into_inner(), vec!["some 1", "none"]);
  }

  #[test]
  fn test_single_branch_is_noop_for_other_branch() {
    let log = RefCell::new(Vec::new());
    Optional::Some(1).on_none(|| log.borrow_mut().push(0));
    Optional::<i32>::None.on_some(|v| log.borrow_mut().push(*v));
    assert!(log.borrow().is_empty());

    Optional::Some(2)
      .on_none(|| log.borrow_mut().push(0))
      .on_some(|v| log.borrow_mut().push(*v));
    Optional::<i32>::None
      .on_none(|| log.borrow_mut().push(-1))
      .on_some(|v| log.borrow_mut().push(*v));
    assert_eq!(log.into_inner(), vec![2, -1]);
  }

  #[test]
  fn test_match_map() {
    assert_eq!(Optional::Some(2).match_map(|| "none".to_string(), |v| format!("some {v}")), "some 2");
    assert_eq!(Optional::<i32>::None.match_map(|| "none".to_string(), |v| format!("some {v}")), "none");
    assert_eq!(Optional::Some(String::from("owned")).into_match_map(String::new, |v| v), "owned");
  }
}
