use log::debug;
use ndarray::prelude::*;

use super::dimension;
use crate::diff::FiniteDifference;
use crate::line_search::fibonacci;
use crate::progress::{nop, Progress};
use crate::vector::{distance, midpoint};
use crate::{Config, Method, Result, SearchResult};

/// Gradient Descent with an Exact Line Search
///
/// Also known as steepest descent. The raw, unnormalized negative gradient
/// is the trial displacement and a [`fibonacci`] search over it picks the
/// step length.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// g_k &= \nabla f(x_k) \\
/// x_{k+1} &= \mathrm{arg}\!\min_{x \in [x_k,\, x_k - g_k]} f(x)
/// \end{aligned}
/// ```
///
/// Costs `2n` probes for each gradient plus those of the line searches.
///
/// Parameters
/// ----------
/// - __func:__      objective
/// - __start:__     initial guess
/// - __config:__    uses `tolerance`, `max_iterations` and `diff_step`
/// - __callback:__  called with the new iterate after every iteration
///
/// # Errors
///
/// [`OptimizeError::EmptyPoint`](crate::OptimizeError::EmptyPoint) if
/// `start` has no coordinates.
pub fn gradient_descent(
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
        "gradient_descent(start = {}, eps = {}, max_iterations = {})",
        start, eps, max_iterations
    );

    let mut prev = start.to_owned();
    let mut curr = prev.clone();
    let mut iterations = 0;
    let mut function_probes = 0;
    let mut step = 0.0;

    while iterations < max_iterations {
        let grad = diff.gradient(&func, prev.view());
        function_probes += FiniteDifference::gradient_cost(n);

        let trial = &prev - &grad;
        let sub = fibonacci(&func, prev.view(), trial.view(), config, nop)?;
        function_probes += sub.function_probes;
        curr = sub.point;
        iterations += 1;

        step = distance(prev.view(), curr.view())?;
        debug!(
            "iteration = {}, gradient = {}, step = {}, point = {}",
            iterations, grad, step, curr
        );
        callback(&Progress::Iterate {
            method: Method::GradientDescent,
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
        "gradient_descent stopped after {} iterations, step = {}",
        iterations, step
    );

    Ok(SearchResult {
        method: Method::GradientDescent,
        point: midpoint(&prev, &curr),
        accuracy: 0.5 * step,
        iterations,
        function_probes,
    })
}
