use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use hashlink::LinkedHashMap;
use tracing::{debug, trace};

use crate::error::MatchError;
use crate::optional::Optional;

type NoneHandler<'a, R> = Box<dyn Fn() -> R + Send + Sync + 'a>;
type SomeHandler<'a, T, R> = Box<dyn Fn(&T) -> R + Send + Sync + 'a>;

/// Fluent matcher dispatching on presence and on specific payload values of an [`Optional`].
///
/// Handlers are registered first, each slot at most once:
/// - a handler for the none case ([`add_none`](Self::add_none)),
/// - a generic handler for any present value ([`add_some`](Self::add_some)),
/// - handlers for exact payload values ([`add_some_value`](Self::add_some_value)).
///
/// A matcher is then resolved any number of times, against its bound target (see [`from_optional`](Self::from_optional))
/// or against explicit targets. For a present value `v`, the handler registered for exactly `v` wins over the generic
/// handler. When no handler applies, resolution produces a default value.
///
/// Resolution never changes the matcher, so a matcher can be resolved from multiple threads at once. Registration
/// requires exclusive access.
///
/// `R` is the type produced by handlers; with the default of `()`, this is a matcher for side effects
/// ([`ActionMatcher`]) where "producing the default" means doing nothing.
pub struct Matcher<'a, T, R = ()> {
  none_handler: Option<NoneHandler<'a, R>>,
  some_handler: Option<SomeHandler<'a, T, R>>,
  value_handlers: LinkedHashMap<T, NoneHandler<'a, R>>,
  target: Optional<T>,
  closed: bool,
}

/// Matcher whose handlers only perform side effects.
pub type ActionMatcher<'a, T> = Matcher<'a, T, ()>;

impl<'a, T: Eq + Hash, R> Matcher<'a, T, R> {
  /// Creates a standalone matcher; [`result`](Self::result) resolves it as if against [`Optional::None`].
  #[inline]
  pub fn new() -> Self { Self::from_optional(Optional::None) }

  /// Creates a matcher bound to `target`, which [`result`](Self::result) resolves against.
  #[inline]
  pub fn from_optional(target: Optional<T>) -> Self {
    Self {
      none_handler: None,
      some_handler: None,
      value_handlers: LinkedHashMap::new(),
      target,
      closed: false,
    }
  }


  /// Registers `handler` for the none case.
  ///
  /// # Errors
  ///
  /// [`MatchError::DuplicateNone`] if a none handler is already registered, or [`MatchError::Closed`] if the matcher
  /// is [closed](Self::close). The matcher is unchanged on error.
  pub fn add_none(&mut self, handler: impl Fn() -> R + Send + Sync + 'a) -> Result<&mut Self, MatchError> {
    self.ensure_open()?;
    if self.none_handler.is_some() {
      debug!("rejecting none handler; one is already registered");
      return Err(MatchError::DuplicateNone);
    }
    self.none_handler = Some(Box::new(handler));
    trace!("registered none handler");
    Ok(self)
  }

  /// Registers `handler` for any present value that has no exact value handler.
  ///
  /// # Errors
  ///
  /// [`MatchError::DuplicateSome`] if a generic some handler is already registered, or [`MatchError::Closed`] if the
  /// matcher is [closed](Self::close). The matcher is unchanged on error.
  pub fn add_some(&mut self, handler: impl Fn(&T) -> R + Send + Sync + 'a) -> Result<&mut Self, MatchError> {
    self.ensure_open()?;
    if self.some_handler.is_some() {
      debug!("rejecting some handler; one is already registered");
      return Err(MatchError::DuplicateSome);
    }
    self.some_handler = Some(Box::new(handler));
    trace!("registered some handler");
    Ok(self)
  }

  /// Registers `handler` for the present value equal to `value`.
  ///
  /// # Errors
  ///
  /// [`MatchError::DuplicateValue`] if a handler for an equal value is already registered, or [`MatchError::Closed`]
  /// if the matcher is [closed](Self::close). The matcher is unchanged on error.
  pub fn add_some_value(&mut self, value: T, handler: impl Fn() -> R + Send + Sync + 'a) -> Result<&mut Self, MatchError> {
    self.ensure_open()?;
    if self.value_handlers.contains_key(&value) {
      debug!("rejecting value handler; one is already registered for an equal value");
      return Err(MatchError::DuplicateValue);
    }
    self.value_handlers.insert(value, Box::new(handler));
    trace!(value_handlers = self.value_handlers.len(), "registered value handler");
    Ok(self)
  }

  /// Owned variant of [`add_none`](Self::add_none) for chaining.
  ///
  /// # Errors
  ///
  /// Same as [`add_none`](Self::add_none), but the matcher is consumed and dropped on error. Use
  /// [`add_none`](Self::add_none) to keep the matcher and its handlers after a rejected registration.
  #[inline]
  pub fn with_none(mut self, handler: impl Fn() -> R + Send + Sync + 'a) -> Result<Self, MatchError> {
    self.add_none(handler)?;
    Ok(self)
  }

  /// Owned variant of [`add_some`](Self::add_some) for chaining.
  ///
  /// # Errors
  ///
  /// Same as [`add_some`](Self::add_some), but the matcher is consumed and dropped on error. Use
  /// [`add_some`](Self::add_some) to keep the matcher and its handlers after a rejected registration.
  #[inline]
  pub fn with_some(mut self, handler: impl Fn(&T) -> R + Send + Sync + 'a) -> Result<Self, MatchError> {
    self.add_some(handler)?;
    Ok(self)
  }

  /// Owned variant of [`add_some_value`](Self::add_some_value) for chaining.
  ///
  /// # Errors
  ///
  /// Same as [`add_some_value`](Self::add_some_value), but the matcher is consumed and dropped on error. Use
  /// [`add_some_value`](Self::add_some_value) to keep the matcher and its handlers after a rejected registration.
  #[inline]
  pub fn with_some_value(mut self, value: T, handler: impl Fn() -> R + Send + Sync + 'a) -> Result<Self, MatchError> {
    self.add_some_value(value, handler)?;
    Ok(self)
  }

  /// Closes the matcher for registration; registering afterwards fails with [`MatchError::Closed`]. Resolution is
  /// unaffected.
  #[inline]
  pub fn close(&mut self) -> &mut Self {
    if !self.closed {
      debug!("closing matcher for registration");
      self.closed = true;
    }
    self
  }

  #[inline]
  pub fn closed(mut self) -> Self {
    self.close();
    self
  }

  #[inline]
  fn ensure_open(&self) -> Result<(), MatchError> {
    if self.closed {
      debug!("rejecting registration; matcher is closed");
      Err(MatchError::Closed)
    } else {
      Ok(())
    }
  }


  #[inline]
  pub fn is_closed(&self) -> bool { self.closed }

  #[inline]
  pub fn has_none_handler(&self) -> bool { self.none_handler.is_some() }

  #[inline]
  pub fn has_some_handler(&self) -> bool { self.some_handler.is_some() }

  #[inline]
  pub fn has_value_handler(&self, value: &T) -> bool { self.value_handlers.contains_key(value) }

  #[inline]
  pub fn value_handlers_len(&self) -> usize { self.value_handlers.len() }

  /// Values that have an exact value handler, in registration order.
  #[inline]
  pub fn handled_values(&self) -> Vec<&T> { self.value_handlers.keys().collect() }

  #[inline]
  pub fn target(&self) -> &Optional<T> { &self.target }


  /// Resolves against `target`, returning the output of the handler that fired, or `None` if no handler applies.
  pub fn try_result_for(&self, target: &Optional<T>) -> Option<R> {
    match target {
      Optional::Some(value) => {
        if let Some(handler) = self.value_handlers.get(value) {
          trace!("resolved to value handler");
          Some(handler())
        } else if let Some(handler) = &self.some_handler {
          trace!("resolved to some handler");
          Some(handler(value))
        } else {
          trace!("no handler for present value");
          None
        }
      }
      Optional::None => {
        if let Some(handler) = &self.none_handler {
          trace!("resolved to none handler");
          Some(handler())
        } else {
          trace!("no handler for absent value");
          None
        }
      }
    }
  }

  /// Resolves against the bound target, producing `default` if no handler applies.
  #[inline]
  pub fn result_or(&self, default: R) -> R { self.result_for_or(&self.target, default) }

  /// Resolves against `target`, producing `default` if no handler applies.
  #[inline]
  pub fn result_for_or(&self, target: &Optional<T>, default: R) -> R {
    self.try_result_for(target).unwrap_or(default)
  }

  /// Resolves against `target` in nullable form; an absent target resolves exactly like [`Optional::None`].
  #[inline]
  pub fn result_for_nullable_or(&self, target: Option<&Optional<T>>, default: R) -> R {
    match target {
      Some(target) => self.result_for_or(target, default),
      None => self.result_for_or(&Optional::None, default),
    }
  }

  /// Resolves against the bound target, producing `R::default()` if no handler applies.
  #[inline]
  pub fn result(&self) -> R where R: Default { self.result_or(R::default()) }

  #[inline]
  pub fn result_for(&self, target: &Optional<T>) -> R where R: Default { self.result_for_or(target, R::default()) }

  #[inline]
  pub fn result_for_nullable(&self, target: Option<&Optional<T>>) -> R where R: Default {
    self.result_for_nullable_or(target, R::default())
  }
}

impl<T: Eq + Hash, R> Default for Matcher<'_, T, R> {
  #[inline]
  fn default() -> Self { Self::new() }
}

impl<T: Eq + Hash, R> From<Optional<T>> for Matcher<'_, T, R> {
  #[inline]
  fn from(target: Optional<T>) -> Self { Self::from_optional(target) }
}

impl<T: Debug, R> Debug for Matcher<'_, T, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Matcher")
      .field("none_handler", &self.none_handler.is_some())
      .field("some_handler", &self.some_handler.is_some())
      .field("value_handlers", &self.value_handlers.keys().collect::<Vec<_>>())
      .field("target", &self.target)
      .field("closed", &self.closed)
      .finish()
  }
}

impl<T: Eq + Hash> Optional<T> {
  /// Creates a [`Matcher`] bound to this optional.
  #[inline]
  pub fn into_matcher<'a, R>(self) -> Matcher<'a, T, R> { Matcher::from_optional(self) }
}
