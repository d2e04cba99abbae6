//! Objectives and probe counting shared by the unit tests

use std::cell::Cell;

use ndarray::ArrayView1;

/// Wraps an objective and counts its evaluations.
pub(crate) struct Counted<F> {
    func: F,
    calls: Cell<usize>,
}

impl<F> Counted<F>
where
    F: Fn(ArrayView1<f64>) -> f64,
{
    pub(crate) fn new(func: F) -> Self {
        Self {
            func,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn call(&self, x: ArrayView1<f64>) -> f64 {
        self.calls.set(self.calls.get() + 1);
        (self.func)(x)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// `(x - 1)(x - 5)`, minimum at 3.
pub(crate) fn parabola(x: ArrayView1<f64>) -> f64 {
    (x[0] - 1.0) * (x[0] - 5.0)
}

/// `(x0 - 5) x0 + (x1 - 3) x1`, minimum at (2.5, 1.5).
pub(crate) fn bowl(x: ArrayView1<f64>) -> f64 {
    (x[0] - 5.0) * x[0] + (x[1] - 3.0) * x[1]
}

/// `(x0 - 1)^2 + 4 (x1 + 2)^2`, minimum at (1, -2).
pub(crate) fn ellipse(x: ArrayView1<f64>) -> f64 {
    (x[0] - 1.0).powi(2) + 4.0 * (x[1] + 2.0).powi(2)
}

/// Rosenbrock's valley, minimum at (1, 1).
pub(crate) fn rosenbrock(x: ArrayView1<f64>) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2)
}
