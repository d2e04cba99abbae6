//! Errors raised by the searches and descents

use thiserror::Error;

/// Result type returned by every routine of this crate.
pub type Result<T> = std::result::Result<T, OptimizeError>;

/// Errors that abort a search.
///
/// Hitting the iteration cap is not one of them: such a search returns an
/// ordinary [`SearchResult`](crate::SearchResult) whose `accuracy` tells how
/// far it got.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    /// Two vectors that should live in the same space do not.
    #[error("dimensions of vectors are not equal: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A partial derivative was requested for a coordinate that does not exist.
    #[error("coordinate index {index} is out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    /// The estimated Hessian could not be inverted.
    #[error("hessian is singular at iteration {iteration}")]
    SingularHessian { iteration: usize },

    #[error("start point has no coordinates")]
    EmptyPoint,
}
