use log::debug;
use ndarray::prelude::*;

use super::dimension;
use crate::diff::FiniteDifference;
use crate::line_search::fibonacci;
use crate::progress::{nop, Progress};
use crate::vector::{distance, midpoint, norm};
use crate::{Config, Method, Result, SearchResult};

/// Non-linear Conjugate Gradient Descent
///
/// Starts along the negative gradient and bends every later direction
/// towards the previous one. The trial move $`x_k + s_k`$ is refined by a
/// [`fibonacci`] search over $`[x_k, x_k + s_k]`$.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// s_0 &= -\nabla f(x_0) \\
/// x_{k+1} &= \mathrm{arg}\!\min_{x \in [x_k,\, x_k + s_k]} f(x) \\
/// g_{k+1} &= \nabla f(x_{k+1}) \\
/// \omega_k &= \frac{\|g_{k+1}\|_2}{\|s_k\|_2} \\
/// s_{k+1} &= \omega_k s_k - g_{k+1}
/// \end{aligned}
/// ```
/// Note that $`\omega_k`$ is a ratio of norms, not the squared ratio
/// $`\|g_{k+1}\|^2 / \|g_k\|^2`$ of Fletcher-Reeves.
///
/// The search stops when the trial move itself is shorter than
/// $`2\varepsilon`$, in which case it is taken unrefined.
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
pub fn conjugate_gradient(
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
        "conjugate_gradient(start = {}, eps = {}, max_iterations = {})",
        start, eps, max_iterations
    );

    let mut prev = start.to_owned();
    let mut curr = prev.clone();
    let mut dir = -diff.gradient(&func, prev.view());
    let mut function_probes = FiniteDifference::gradient_cost(n);
    let mut iterations = 0;
    let mut step = 0.0;

    while iterations < max_iterations {
        curr = &prev + &dir;
        iterations += 1;
        step = distance(prev.view(), curr.view())?;

        let converged = step < 2.0 * eps;
        if !converged {
            let sub = fibonacci(&func, prev.view(), curr.view(), config, nop)?;
            function_probes += sub.function_probes;
            curr = sub.point;

            let grad = diff.gradient(&func, curr.view());
            function_probes += FiniteDifference::gradient_cost(n);

            let omega = norm(grad.view()) / norm(dir.view());
            dir = dir * omega - &grad;
            debug!("omega = {}, direction = {}", omega, dir);
        }

        debug!(
            "iteration = {}, step = {}, point = {}",
            iterations, step, curr
        );
        callback(&Progress::Iterate {
            method: Method::ConjugateGradientDescent,
            iteration: iterations,
            point: curr.view(),
            step,
        });

        if converged {
            break;
        }
        prev.assign(&curr);
    }
    debug!(
        "conjugate_gradient stopped after {} iterations, step = {}",
        iterations, step
    );

    Ok(SearchResult {
        method: Method::ConjugateGradientDescent,
        point: midpoint(&prev, &curr),
        accuracy: 0.5 * step,
        iterations,
        function_probes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bowl, ellipse, Counted};
    use approx::assert_abs_diff_eq;

    #[test]
    fn conjugate_bowl() {
        let counted = Counted::new(bowl);
        let res = conjugate_gradient(
            |x| counted.call(x),
            array![-14., -33.98].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_eq!(res.method, Method::ConjugateGradientDescent);
        assert_abs_diff_eq!(res.point, array![2.5, 1.5], epsilon = 1e-4);
        assert!(res.iterations <= 3);
        assert_eq!(res.function_probes, counted.calls());
    }

    #[test]
    fn conjugate_ellipse() {
        let counted = Counted::new(ellipse);
        let res = conjugate_gradient(
            |x| counted.call(x),
            array![0., 0.].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_abs_diff_eq!(res.point, array![1., -2.], epsilon = 1e-4);
        assert!(res.iterations < 50);
        assert_eq!(res.function_probes, counted.calls());
    }

    #[test]
    fn conjugate_three_dimensions() {
        let func = |x: ArrayView1<f64>| {
            x[0].powi(2) + x[0] * x[1] + 2. * x[1].powi(2) + x[2].powi(2) - x[2]
        };
        let counted = Counted::new(func);
        let res = conjugate_gradient(
            |x| counted.call(x),
            array![3., -2., 1.].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_abs_diff_eq!(res.point, array![0., 0., 0.5], epsilon = 1e-4);
        assert_eq!(res.function_probes, counted.calls());
    }

    #[test]
    fn conjugate_at_minimum_stops_at_once() {
        let counted = Counted::new(bowl);
        let res = conjugate_gradient(
            |x| counted.call(x),
            array![2.5, 1.5].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        // only the initial gradient is evaluated
        assert_eq!(res.iterations, 1);
        assert_eq!(res.function_probes, 4);
        assert_eq!(counted.calls(), 4);
        assert_abs_diff_eq!(res.point, array![2.5, 1.5], epsilon = 1e-6);
    }
}
