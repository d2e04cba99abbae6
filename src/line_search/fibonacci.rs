use log::debug;
use ndarray::prelude::*;

use crate::progress::Progress;
use crate::vector::{along, distance, midpoint};
use crate::{Config, Method, Result, SearchResult};

/// Fibonacci Search Along a Segment
///
/// Picks the smallest $`k`$ such that $`F_{k+2} \geq \|\mathrm{right} - \mathrm{left}\| / \varepsilon`$
/// (with $`F_1 = F_2 = 1`$) and then contracts the bracket exactly $`k`$
/// times, placing the interior points at ratios of consecutive Fibonacci
/// numbers so that one of them survives every contraction. The final bracket
/// is at most $`\varepsilon`$ wide, which no other bracketing search reaches
/// with fewer probes.
///
/// `max_iterations` of the config is ignored. Costs `iterations + 2` probes.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// x_r &= l + \frac{F_{j-1}}{F_j}(r - l), \qquad x_l = l + \frac{F_j - F_{j-1}}{F_j}(r - l) \\
/// (l, r) &\leftarrow \begin{cases} (x_l, r) & f(x_l) > f(x_r) \\ (l, x_r) & \text{otherwise} \end{cases}
/// \end{aligned}
/// ```
///
/// # Errors
///
/// [`OptimizeError::DimensionMismatch`](crate::OptimizeError::DimensionMismatch)
/// if `left` and `right` differ in length.
pub fn fibonacci(
    func: impl Fn(ArrayView1<f64>) -> f64,
    left: ArrayView1<f64>,
    right: ArrayView1<f64>,
    config: &Config,
    mut callback: impl FnMut(&Progress<'_>),
) -> Result<SearchResult> {
    let eps = config.tolerance();
    debug!(
        "fibonacci(left = {}, right = {}, eps = {})",
        left, right, eps
    );

    let threshold = distance(left, right)? / eps;
    let mut lhs = left.to_owned();
    let mut rhs = right.to_owned();

    // (fib_1, fib_2) walks up the sequence to the first fib_2 >= threshold
    let (mut fib_1, mut fib_2) = (1.0_f64, 1.0_f64);
    let mut iterations = 0;
    while fib_2 < threshold {
        let next = fib_1 + fib_2;
        fib_1 = fib_2;
        fib_2 = next;
        iterations += 1;
    }

    let mut x_r = along(&lhs, &rhs, fib_1 / fib_2);
    let mut x_l = along(&lhs, &rhs, (fib_2 - fib_1) / fib_2);
    let mut y_r = func(x_r.view());
    let mut y_l = func(x_l.view());

    for iteration in 1..=iterations {
        debug!(
            "iteration = {}, fib = ({}, {}), y_l = {}, y_r = {}",
            iteration, fib_1, fib_2, y_l, y_r
        );
        callback(&Progress::Bracket {
            method: Method::Fibonacci,
            iteration,
            left: lhs.view(),
            right: rhs.view(),
        });

        let prev = fib_2 - fib_1;
        fib_2 = fib_1;
        fib_1 = prev;

        if y_l > y_r {
            lhs = x_l;
            x_l = x_r;
            y_l = y_r;
            x_r = along(&lhs, &rhs, fib_1 / fib_2);
            y_r = func(x_r.view());
        } else {
            rhs = x_r;
            x_r = x_l;
            y_r = y_l;
            x_l = along(&lhs, &rhs, (fib_2 - fib_1) / fib_2);
            y_l = func(x_l.view());
        }
    }

    let width = distance(lhs.view(), rhs.view())?;
    debug!(
        "fibonacci stopped after {} iterations, width = {}",
        iterations, width
    );

    Ok(SearchResult {
        method: Method::Fibonacci,
        point: midpoint(&lhs, &rhs),
        accuracy: 0.5 * width,
        iterations,
        function_probes: iterations + 2,
    })
}
