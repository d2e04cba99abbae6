//! Per-iteration progress reports for user callbacks

use ndarray::ArrayView1;

use crate::Method;

/// State handed to the user callback once per iteration.
///
/// Line searches report their current bracket before contracting it;
/// descents report the iterate they just accepted.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Bracket of a line search at the start of an iteration.
    Bracket {
        method: Method,
        iteration: usize,
        left: ArrayView1<'a, f64>,
        right: ArrayView1<'a, f64>,
    },

    /// Iterate of a descent at the end of an iteration.
    Iterate {
        method: Method,
        iteration: usize,
        point: ArrayView1<'a, f64>,
        /// Distance covered by this iteration.
        step: f64,
    },
}

impl Progress<'_> {
    /// Returns the algorithm reporting.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Bracket { method, .. } | Self::Iterate { method, .. } => *method,
        }
    }

    /// Returns the 1-based iteration number.
    #[must_use]
    pub fn iteration(&self) -> usize {
        match self {
            Self::Bracket { iteration, .. } | Self::Iterate { iteration, .. } => *iteration,
        }
    }
}

/// Do nothing callback
pub fn nop(_progress: &Progress<'_>) {}
