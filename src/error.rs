use thiserror::Error;

/// Returned by the `try_pop_*` methods when there is no element to take.
///
/// The plain `pop_*` methods report the same condition as `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("deque is empty")]
pub struct EmptyAccess;
