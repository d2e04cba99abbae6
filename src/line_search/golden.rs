use log::debug;
use ndarray::prelude::*;

use super::PSI;
use crate::progress::Progress;
use crate::vector::{along, distance, midpoint};
use crate::{Config, Method, Result, SearchResult};

/// Golden Section Search Along a Segment
///
/// Keeps two interior points at the golden ratio positions of the bracket,
/// ```math
/// x_r = l + \psi (r - l), \qquad x_l = r - \psi (r - l), \qquad \psi = \frac{\sqrt 5 - 1}{2}
/// ```
/// and drops the end next to the higher of the two. The surviving interior
/// point lands on a golden ratio position of the new bracket, so each
/// iteration needs one new probe and shrinks the bracket by $`\psi`$. See
/// [Wikipedia](https://en.wikipedia.org/wiki/Golden-section_search)
/// for more info.
///
/// Costs `iterations + 2` probes.
///
/// # Errors
///
/// [`OptimizeError::DimensionMismatch`](crate::OptimizeError::DimensionMismatch)
/// if `left` and `right` differ in length.
pub fn golden_ratio(
    func: impl Fn(ArrayView1<f64>) -> f64,
    left: ArrayView1<f64>,
    right: ArrayView1<f64>,
    config: &Config,
    mut callback: impl FnMut(&Progress<'_>),
) -> Result<SearchResult> {
    let eps = config.tolerance();
    let max_iterations = config.max_iterations();
    debug!(
        "golden_ratio(left = {}, right = {}, eps = {}, max_iterations = {})",
        left, right, eps, max_iterations
    );

    let mut width = distance(left, right)?;
    let mut lhs = left.to_owned();
    let mut rhs = right.to_owned();

    let mut x_r = along(&lhs, &rhs, PSI);
    let mut x_l = along(&rhs, &lhs, PSI);
    let mut y_r = func(x_r.view());
    let mut y_l = func(x_l.view());
    let mut iterations = 0;

    while iterations < max_iterations && width > 2.0 * eps {
        iterations += 1;
        debug!(
            "iteration = {}, width = {}, y_l = {}, y_r = {}",
            iterations, width, y_l, y_r
        );
        callback(&Progress::Bracket {
            method: Method::GoldenRatio,
            iteration: iterations,
            left: lhs.view(),
            right: rhs.view(),
        });

        if y_l > y_r {
            lhs = x_l;
            x_l = x_r;
            y_l = y_r;
            x_r = along(&lhs, &rhs, PSI);
            y_r = func(x_r.view());
        } else {
            rhs = x_r;
            x_r = x_l;
            y_r = y_l;
            x_l = along(&rhs, &lhs, PSI);
            y_l = func(x_l.view());
        }

        width = distance(lhs.view(), rhs.view())?;
    }
    debug!(
        "golden_ratio stopped after {} iterations, width = {}",
        iterations, width
    );

    Ok(SearchResult {
        method: Method::GoldenRatio,
        point: midpoint(&lhs, &rhs),
        accuracy: 0.5 * width,
        iterations,
        function_probes: iterations + 2,
    })
}
