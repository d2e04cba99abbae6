use log::debug;
use ndarray::prelude::*;

use crate::progress::Progress;
use crate::vector::{direction, distance, midpoint};
use crate::{Config, Method, Result, SearchResult};

/// Bisection Along a Segment
///
/// Halves the bracket each iteration by comparing the objective just below
/// and just above its midpoint $`m`$, at $`m \mp \delta`$ where
/// $`\delta = 0.1\,\varepsilon\,(\mathrm{right} - \mathrm{left}) / \|\mathrm{right} - \mathrm{left}\|`$.
/// The half holding the lower of the two values is kept.
///
/// In more than one dimension only the derivative along the segment is
/// sampled, so the kept half is a heuristic choice rather than a guaranteed
/// one for non-separable objectives.
///
/// Costs two probes per iteration.
///
/// Parameters
/// ----------
/// - __func:__      objective, unimodal along the segment
/// - __left:__      one end of the bracket
/// - __right:__     the other end, same dimension as `left`
/// - __config:__    uses `tolerance` and `max_iterations`
/// - __callback:__  called with the bracket at the start of every iteration
///
/// # Errors
///
/// [`OptimizeError::DimensionMismatch`](crate::OptimizeError::DimensionMismatch)
/// if `left` and `right` differ in length.
pub fn bisect(
    func: impl Fn(ArrayView1<f64>) -> f64,
    left: ArrayView1<f64>,
    right: ArrayView1<f64>,
    config: &Config,
    mut callback: impl FnMut(&Progress<'_>),
) -> Result<SearchResult> {
    let eps = config.tolerance();
    let max_iterations = config.max_iterations();
    debug!(
        "bisect(left = {}, right = {}, eps = {}, max_iterations = {})",
        left, right, eps, max_iterations
    );

    let dir = direction(left, right)? * (0.1 * eps);
    let mut lhs = left.to_owned();
    let mut rhs = right.to_owned();
    let mut width = distance(left, right)?;
    let mut iterations = 0;

    while iterations < max_iterations && width > 2.0 * eps {
        iterations += 1;
        debug!("iteration = {}, width = {}", iterations, width);
        callback(&Progress::Bracket {
            method: Method::Bisect,
            iteration: iterations,
            left: lhs.view(),
            right: rhs.view(),
        });

        let mid = midpoint(&lhs, &rhs);
        let x_l = &mid - &dir;
        let x_r = &mid + &dir;

        if func(x_l.view()) > func(x_r.view()) {
            lhs = x_l;
        } else {
            rhs = x_r;
        }

        width = distance(lhs.view(), rhs.view())?;
    }
    debug!("bisect stopped after {} iterations, width = {}", iterations, width);

    Ok(SearchResult {
        method: Method::Bisect,
        point: midpoint(&lhs, &rhs),
        accuracy: 0.5 * width,
        iterations,
        function_probes: 2 * iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::nop;
    use crate::testing::{bowl, parabola, Counted};
    use crate::OptimizeError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bisect_parabola() {
        let counted = Counted::new(parabola);
        let res = bisect(
            |x| counted.call(x),
            array![0.].view(),
            array![10.].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_eq!(res.method, Method::Bisect);
        assert_abs_diff_eq!(res.point[0], 3.0, epsilon = 1e-4);
        assert!(res.accuracy <= 1e-5);
        assert!(res.iterations <= 50);
        assert_eq!(res.function_probes, 2 * res.iterations);
        assert_eq!(res.function_probes, counted.calls());
    }

    #[test]
    fn bisect_bowl() {
        let counted = Counted::new(bowl);
        let res = bisect(
            |x| counted.call(x),
            array![5., 3.].view(),
            array![0., 0.].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_abs_diff_eq!(res.point, array![2.5, 1.5], epsilon = 1e-3);
        assert_eq!(res.point.len(), 2);
        assert_eq!(res.function_probes, counted.calls());
    }

    #[test]
    fn bisect_stops_at_cap() {
        let config = Config::new(1e-5, 3).unwrap();
        let res = bisect(parabola, array![0.].view(), array![10.].view(), &config, nop).unwrap();
        assert_eq!(res.iterations, 3);
        assert_eq!(res.function_probes, 6);
        assert!(res.accuracy > config.tolerance());
    }

    #[test]
    fn bisect_degenerate_bracket() {
        let res = bisect(
            parabola,
            array![4.].view(),
            array![4.].view(),
            &Config::default(),
            nop,
        )
        .unwrap();
        assert_eq!(res.iterations, 0);
        assert_eq!(res.function_probes, 0);
        assert_eq!(res.point, array![4.]);
        assert_eq!(res.accuracy, 0.);
    }

    #[test]
    fn bisect_reports_each_iteration() {
        let mut seen = Vec::new();
        let res = bisect(
            parabola,
            array![0.].view(),
            array![10.].view(),
            &Config::default(),
            |p: &Progress<'_>| seen.push((p.method(), p.iteration())),
        )
        .unwrap();
        assert_eq!(seen.len(), res.iterations);
        assert_eq!(seen[0], (Method::Bisect, 1));
        assert_eq!(seen.last(), Some(&(Method::Bisect, res.iterations)));
    }

    #[test]
    fn bisect_dimension_mismatch() {
        let res = bisect(
            bowl,
            array![0., 0.].view(),
            array![1.].view(),
            &Config::default(),
            nop,
        );
        assert_eq!(
            res,
            Err(OptimizeError::DimensionMismatch { left: 2, right: 1 })
        );
    }
}
