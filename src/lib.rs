//! The `ndarray-descent` crate provides derivative-free line searches and
//! local descent methods that minimize a function of an `ndarray` vector.
//!
//! It includes:
//! - Line searches along a segment: bisection, golden ratio and Fibonacci
//! - Per-coordinate descent
//! - Gradient descent and non-linear conjugate gradient
//! - Newton-Raphson
//!
//! Objectives are plain closures `Fn(ArrayView1<f64>) -> f64`. Gradients and
//! Hessians are estimated by [central differences](diff::FiniteDifference),
//! so no derivative has to be supplied. Every routine returns a
//! [`SearchResult`] with the point found, its accuracy, and how many
//! iterations and objective evaluations it took. Progress can be followed
//! with a callback, or with the `debug!` records of the [`log`] crate.
//!
//! ```
//! use ndarray::prelude::*;
//! use ndarray_descent::descent::conjugate_gradient;
//! use ndarray_descent::{nop, Config};
//!
//! let func = |x: ArrayView1<f64>| (x[0] - 1.).powi(2) + 4. * (x[1] + 2.).powi(2);
//! let res = conjugate_gradient(func, array![0., 0.].view(), &Config::default(), nop).unwrap();
//! assert!((res.point[0] - 1.).abs() < 1e-3);
//! assert!((res.point[1] + 2.).abs() < 1e-3);
//! ```
//!
//! All routines are single threaded and deterministic: the same inputs give
//! the same [`SearchResult`] bit for bit.

pub mod descent;
pub mod diff;
pub mod line_search;
pub mod vector;

mod config;
pub use config::*;
mod error;
pub use error::*;
mod progress;
pub use progress::*;
mod result;
pub use result::*;

#[cfg(test)]
mod testing;
