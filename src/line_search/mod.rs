//! Line Searches Along a Segment of $`\mathbb{R}^n`$
//!
//! Each search takes two points `left` and `right` and minimizes the
//! objective over the segment joining them:
//! ```math
//! \min_{t \in [0, 1]} f(\mathrm{left} + t(\mathrm{right} - \mathrm{left}))
//! ```
//! The objective must be unimodal along the segment; this is not checked.
//!
//! All searches stop once the bracket is at most $`2\varepsilon`$ wide and
//! report its midpoint, with half its width as the accuracy.
//! [`bisect`] and [`golden_ratio`] also stop at the iteration cap of the
//! [`Config`](crate::Config); [`fibonacci`] instead fixes its number of steps
//! up front and is the search used by the [descent](crate::descent) methods.

mod bisect;
pub use bisect::*;
mod golden;
pub use golden::*;
mod fibonacci;
pub use fibonacci::*;

/// $`\psi = 1 / \varphi = (\sqrt 5 - 1)/2`$
pub const PSI: f64 = 0.618_033_988_749_894_9;
