use log::debug;
use ndarray::prelude::*;

use super::dimension;
use crate::line_search::fibonacci;
use crate::progress::{nop, Progress};
use crate::vector::midpoint;
use crate::{Config, Method, Result, SearchResult};

/// Per-Coordinate Descent
///
/// Also known as cyclic coordinate descent. Iteration $`k`$ only moves
/// coordinate $`c = k \bmod n`$: the objective is probed at
/// $`x \pm \varepsilon e_c`$ to pick the downhill sign $`s`$, and a
/// [`fibonacci`] search over the segment $`[x, x + s \cdot \mathrm{step} \cdot e_c]`$
/// gives the next iterate. A move of less than $`2\varepsilon`$ settles the
/// coordinate; the search ends once $`n`$ coordinates in a row have settled.
///
/// The reported `iterations` add the iterations of every nested Fibonacci
/// search to the outer ones, and `accuracy` is that of the last nested
/// search.
///
/// Parameters
/// ----------
/// - __func:__      objective
/// - __start:__     initial guess
/// - __config:__    uses `tolerance`, `max_iterations` and `step`
/// - __callback:__  called with the new iterate after every outer iteration
///
/// # Errors
///
/// [`OptimizeError::EmptyPoint`](crate::OptimizeError::EmptyPoint) if
/// `start` has no coordinates.
pub fn coordinate_descent(
    func: impl Fn(ArrayView1<f64>) -> f64,
    start: ArrayView1<f64>,
    config: &Config,
    mut callback: impl FnMut(&Progress<'_>),
) -> Result<SearchResult> {
    let n = dimension(start)?;
    let eps = config.tolerance();
    let step = config.step();
    let max_iterations = config.max_iterations();
    debug!(
        "coordinate_descent(start = {}, step = {}, eps = {}, max_iterations = {})",
        start, step, eps, max_iterations
    );

    let mut curr = start.to_owned();
    let mut prev = curr.clone();
    let mut ort = Array1::<f64>::zeros(n);

    let mut outer = 0;
    let mut nested = 0;
    let mut function_probes = 0;
    let mut accuracy = 0.0;
    let mut settled = 0;

    while outer < max_iterations {
        let coord = outer % n;

        ort[coord] = eps;
        let below = func((&curr - &ort).view());
        let above = func((&curr + &ort).view());
        function_probes += 2;

        ort[coord] = if below > above { step } else { -step };
        let trial = &curr + &ort;
        ort[coord] = 0.0;

        let sub = fibonacci(&func, curr.view(), trial.view(), config, nop)?;
        nested += sub.iterations;
        function_probes += sub.function_probes;
        accuracy = sub.accuracy;

        let moved = (sub.point[coord] - curr[coord]).abs();
        prev = std::mem::replace(&mut curr, sub.point);
        outer += 1;

        debug!(
            "iteration = {}, coordinate = {}, moved = {}, point = {}",
            outer, coord, moved, curr
        );
        callback(&Progress::Iterate {
            method: Method::PerCoordinateDescent,
            iteration: outer,
            point: curr.view(),
            step: moved,
        });

        if moved < 2.0 * eps {
            settled += 1;
            if settled == n {
                break;
            }
        } else {
            settled = 0;
        }
    }
    debug!(
        "coordinate_descent stopped after {} outer iterations, {} settled",
        outer, settled
    );

    Ok(SearchResult {
        method: Method::PerCoordinateDescent,
        point: midpoint(&prev, &curr),
        accuracy,
        iterations: outer + nested,
        function_probes,
    })
}
