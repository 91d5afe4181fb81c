use thiserror::Error;

/// Error reading or constructing an [`Optional`](crate::optional::Optional).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionalError {
  #[error("Optional has no value")]
  NoValue,
  #[error("Cannot create a required Optional from an absent value")]
  NullArgument,
}

/// Error registering a handler on a [`Matcher`](crate::matcher::Matcher).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum MatchError {
  #[error("A handler for the none case is already registered")]
  DuplicateNone,
  #[error("A handler for the generic some case is already registered")]
  DuplicateSome,
  #[error("A handler for this exact value is already registered")]
  DuplicateValue,
  #[error("Matcher is closed for registration")]
  Closed,
}
