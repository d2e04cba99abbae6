//! Tolerances and limits shared by the searches

use thiserror::Error;

use crate::diff::FiniteDifference;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default cap on outer iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default length of the trial segment of per-coordinate descent.
pub const DEFAULT_STEP: f64 = 2.0;

/// Default step of the central differences.
pub const DEFAULT_DIFF_STEP: f64 = 1e-6;

/// Configuration passed to every search and descent.
///
/// Build it with [`Config::new`] and the `with_*` methods, or take
/// [`Config::default`]:
///
/// | setting          | default |
/// |------------------|---------|
/// | `tolerance`      | `1e-5`  |
/// | `max_iterations` | `50`    |
/// | `step`           | `2.0`   |
/// | `diff_step`      | `1e-6`  |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iterations: usize,
    step: f64,
    diff_step: f64,
}

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("step must be finite and positive")]
    Step,

    #[error("finite difference step must be finite and positive")]
    DiffStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step: DEFAULT_STEP,
            diff_step: DEFAULT_DIFF_STEP,
        }
    }
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Config {
    /// Creates a config with the given tolerance and iteration cap, keeping
    /// the default step sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, ConfigError> {
        if !finite_positive(tolerance) {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iterations,
            ..Self::default()
        })
    }

    /// Replaces the trial segment length of per-coordinate descent.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        if !finite_positive(step) {
            return Err(ConfigError::Step);
        }
        Ok(Self { step, ..self })
    }

    /// Replaces the finite difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `diff_step` is not finite and positive.
    pub fn with_diff_step(self, diff_step: f64) -> Result<Self, ConfigError> {
        if !finite_positive(diff_step) {
            return Err(ConfigError::DiffStep);
        }
        Ok(Self { diff_step, ..self })
    }

    /// Returns the convergence tolerance, `eps`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the cap on outer iterations.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the trial segment length of per-coordinate descent.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the finite difference step.
    #[must_use]
    pub fn diff_step(&self) -> f64 {
        self.diff_step
    }

    /// Returns the differentiator used by the gradient based descents.
    #[must_use]
    pub fn differentiator(&self) -> FiniteDifference {
        FiniteDifference::new(self.diff_step)
    }
}
