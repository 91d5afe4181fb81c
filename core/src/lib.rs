//! An explicit optional value, [`Optional`](optional::Optional), with equality and hashing that distinguish absence
//! from any present payload, sequence-style projection, and a fluent [matcher](matcher::Matcher) that dispatches on
//! specific payload values.

pub mod error;
pub mod optional;
pub mod create;
pub mod iter;
pub mod simple_match;
pub mod matcher;

pub mod app;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::{MatchError, OptionalError};
pub use matcher::{ActionMatcher, Matcher};
pub use optional::Optional;
