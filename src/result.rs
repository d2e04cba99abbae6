use std::fmt;

use ndarray::Array1;

/// Algorithm that produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    Bisect,
    GoldenRatio,
    Fibonacci,
    PerCoordinateDescent,
    GradientDescent,
    ConjugateGradientDescent,
    NewtonRaphson,
    /// Tag of a default constructed result; no routine returns it.
    #[default]
    None,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Bisect => "bisection",
            Method::GoldenRatio => "golden ratio",
            Method::Fibonacci => "Fibonacci",
            Method::PerCoordinateDescent => "per coordinate descent",
            Method::GradientDescent => "gradient descent",
            Method::ConjugateGradientDescent => "conjugate gradient descent",
            Method::NewtonRaphson => "Newton-Raphson",
            Method::None => "none",
        };
        f.write_str(name)
    }
}

/// Outcome of a search or descent.
///
/// Built once when the routine returns. A result whose `accuracy` is above
/// the requested tolerance comes from a routine that ran out of iterations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub method: Method,

    /// Located minimum, or the best estimate when the cap was hit.
    pub point: Array1<f64>,

    /// Estimated remaining error: half the final bracket width for line
    /// searches, half the last step for descents. Never negative.
    pub accuracy: f64,

    pub iterations: usize,

    /// Objective evaluations made by the call, nested searches included.
    pub function_probes: usize,
}
