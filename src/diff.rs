//! Central finite difference derivatives
//!
//! For a step $`h`$ the first partial derivative is estimated as
//! ```math
//! \frac{\partial f}{\partial x_i}(x) \approx \frac{f(x + h e_i) - f(x - h e_i)}{2h}
//! ```
//! and second partials apply the same rule to the first partial. The step is
//! fixed; no refinement against cancellation is attempted.

use ndarray::prelude::*;

use crate::config::DEFAULT_DIFF_STEP;
use crate::{OptimizeError, Result};

/// Central difference estimator of gradients and Hessians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifference {
    step: f64,
}

impl Default for FiniteDifference {
    fn default() -> Self {
        Self::new(DEFAULT_DIFF_STEP)
    }
}

fn check_index(index: usize, dim: usize) -> Result<()> {
    if index >= dim {
        return Err(OptimizeError::IndexOutOfRange { index, dim });
    }
    Ok(())
}

impl FiniteDifference {
    /// Creates an estimator probing at `point ± step`.
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Objective evaluations made by [`gradient`](Self::gradient) in `n` dimensions.
    #[must_use]
    pub const fn gradient_cost(n: usize) -> usize {
        2 * n
    }

    /// Objective evaluations made by [`hessian`](Self::hessian) in `n` dimensions.
    #[must_use]
    pub const fn hessian_cost(n: usize) -> usize {
        2 * n * (n + 1)
    }

    /// Partial derivative of `func` along coordinate `index` at `point`.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::IndexOutOfRange`] if `index >= point.len()`.
    pub fn partial<F>(&self, mut func: F, point: ArrayView1<f64>, index: usize) -> Result<f64>
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        check_index(index, point.len())?;
        let mut scratch = point.to_owned();
        Ok(self.central(&mut func, &mut scratch, index))
    }

    /// Second partial derivative of `func` along coordinates `row` and `col`.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::IndexOutOfRange`] if either index is outside the point.
    pub fn second_partial<F>(
        &self,
        mut func: F,
        point: ArrayView1<f64>,
        row: usize,
        col: usize,
    ) -> Result<f64>
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        check_index(row, point.len())?;
        check_index(col, point.len())?;
        let mut scratch = point.to_owned();
        Ok(self.mixed(&mut func, &mut scratch, row, col))
    }

    /// Gradient of `func` at `point`, at a cost of `2n` evaluations.
    pub fn gradient<F>(&self, mut func: F, point: ArrayView1<f64>) -> Array1<f64>
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        let mut scratch = point.to_owned();
        Array1::from_shape_fn(point.len(), |i| self.central(&mut func, &mut scratch, i))
    }

    /// Hessian of `func` at `point`, at a cost of `2n(n+1)` evaluations.
    ///
    /// Only the upper triangle is estimated; the lower one is its mirror.
    pub fn hessian<F>(&self, mut func: F, point: ArrayView1<f64>) -> Array2<f64>
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        let n = point.len();
        let mut scratch = point.to_owned();
        let mut hess = Array2::zeros((n, n));
        for row in 0..n {
            for col in row..n {
                let value = self.mixed(&mut func, &mut scratch, row, col);
                hess[[row, col]] = value;
                hess[[col, row]] = value;
            }
        }
        hess
    }

    // scratch[index] is written back bit for bit before returning
    fn central<F>(&self, func: &mut F, scratch: &mut Array1<f64>, index: usize) -> f64
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        let origin = scratch[index];
        scratch[index] = origin + self.step;
        let forward = func(scratch.view());
        scratch[index] = origin - self.step;
        let backward = func(scratch.view());
        scratch[index] = origin;
        (forward - backward) / (2.0 * self.step)
    }

    fn mixed<F>(&self, func: &mut F, scratch: &mut Array1<f64>, row: usize, col: usize) -> f64
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        let origin = scratch[col];
        scratch[col] = origin + self.step;
        let forward = self.central(func, scratch, row);
        scratch[col] = origin - self.step;
        let backward = self.central(func, scratch, row);
        scratch[col] = origin;
        (forward - backward) / (2.0 * self.step)
    }
}
