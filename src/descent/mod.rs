//! Descent Methods for Local Minimization
//!
//! Every method repeats the same cycle until two successive iterates are
//! less than $`2\varepsilon`$ apart or the iteration cap is reached:
//! ```math
//! x_{k+1} = x_k + \alpha_k d_k
//! ```
//! where the direction $`d_k`$ is a coordinate axis, the negative gradient,
//! a conjugate direction or the Newton step, and $`\alpha_k`$ comes from an
//! exact [Fibonacci](crate::line_search::fibonacci) line search (Newton
//! takes the full step). Gradients and Hessians are finite difference
//! estimates, see [`FiniteDifference`](crate::diff::FiniteDifference).
//!
//! The returned point is the midpoint of the last two iterates. Running out
//! of iterations is not an error; compare the reported `accuracy` with the
//! tolerance to tell.

mod coordinate;
pub use coordinate::*;
mod gradient;
pub use gradient::*;
mod conjugate;
pub use conjugate::*;
mod newton;
pub use newton::*;

use ndarray::ArrayView1;

use crate::{OptimizeError, Result};

/// Dimension of the start point, which must have at least one coordinate.
fn dimension(start: ArrayView1<f64>) -> Result<usize> {
    match start.len() {
        0 => Err(OptimizeError::EmptyPoint),
        n => Ok(n),
    }
}
