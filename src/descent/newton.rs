use log::debug;
use nalgebra::{DMatrix, DVector};
use ndarray::prelude::*;

use super::dimension;
use crate::progress::Progress;
use crate::vector::{distance, midpoint};
use crate::{Config, Method, OptimizeError, Result, SearchResult};

/// Newton-Raphson Method
///
/// Takes the full Newton step with a finite difference gradient and Hessian
/// and no line search:
/// ```math
/// x_{k+1} = x_k - \left(\nabla^2 f(x_k)\right)^{-1} \nabla f(x_k)
/// ```
/// The linear system is solved by LU decomposition with partial pivoting
/// rather than by forming the inverse.
///
/// Every iteration costs one gradient and one Hessian, i.e. exactly
/// $`2n(n+2)`$ probes, and `function_probes` is reported as
/// `iterations * 2n(n+2)`.
///
/// Parameters
/// ----------
/// - __func:__      objective, twice differentiable
/// - __start:__     initial guess
/// - __config:__    uses `tolerance`, `max_iterations` and `diff_step`
/// - __callback:__  called with the new iterate after every iteration
///
/// # Errors
///
/// - [`OptimizeError::EmptyPoint`] if `start` has no coordinates.
/// - [`OptimizeError::SingularHessian`] if the Hessian estimate cannot be
///   inverted at some iterate.
pub fn newton_raphson(
    func: impl Fn(ArrayView1<f64>) -> f64,
    start: ArrayView1<f64>,
    config: &Config,
    mut callback: impl FnMut(&Progress<'_>),
) -> Result<SearchResult> {
    let n = dimension(start)?;
    let eps = config.tolerance();
    let max_iterations = config.max_iterations();
    let diff = config.differentiator();
    debug!(
        "newton_raphson(start = {}, eps = {}, max_iterations = {})",
        start, eps, max_iterations
    );

    let mut prev = start.to_owned();
    let mut curr = prev.clone();
    let mut iterations = 0;
    let mut step = 0.0;

    while iterations < max_iterations {
        let grad = diff.gradient(&func, prev.view());
        let hess = diff.hessian(&func, prev.view());
        iterations += 1;

        let newton_step = solve(&hess, &grad).ok_or(OptimizeError::SingularHessian {
            iteration: iterations,
        })?;
        curr = &prev - &newton_step;

        step = distance(prev.view(), curr.view())?;
        debug!(
            "iteration = {}, gradient = {}, step = {}, point = {}",
            iterations, grad, step, curr
        );
        callback(&Progress::Iterate {
            method: Method::NewtonRaphson,
            iteration: iterations,
            point: curr.view(),
            step,
        });

        if step < 2.0 * eps {
            break;
        }
        prev.assign(&curr);
    }
    debug!(
        "newton_raphson stopped after {} iterations, step = {}",
        iterations, step
    );

    Ok(SearchResult {
        method: Method::NewtonRaphson,
        point: midpoint(&prev, &curr),
        accuracy: 0.5 * step,
        iterations,
        function_probes: iterations * 2 * n * (n + 2),
    })
}

/// Solves `hess * x = grad`, or `None` if `hess` is singular.
fn solve(hess: &Array2<f64>, grad: &Array1<f64>) -> Option<Array1<f64>> {
    let n = grad.len();
    let lhs = DMatrix::from_fn(n, n, |i, j| hess[[i, j]]);
    let rhs = DVector::from_iterator(n, grad.iter().copied());
    let x = lhs.lu().solve(&rhs)?;
    if x.iter().all(|v| v.is_finite()) {
        Some(x.iter().copied().collect())
    } else {
        None
    }
}
