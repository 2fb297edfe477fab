//! A simple, embeddable library of storeless univariate statistics.
//!
//! Each statistic keeps O(1) state over a stream of values fed in one at a
//! time, and independently offers a one-shot batch evaluation over a
//! contiguous range of a slice.
//!
//! NaN doubles as the "no result yet" sentinel: a freshly created (or
//! cleared) statistic reports NaN, and NaN inputs never displace a real
//! running result.
//!
//! ```
//! use unistat::{Min, Statistic};
//!
//! let mut min = Min::new();
//!
//! min.increment(5.2);
//! min.increment(1.3);
//! min.increment(8.9);
//!
//! assert_eq!(min.result(), 1.3);
//! assert_eq!(min.count(), 3);
//!
//! // The batch path is stateless and works on any slice range
//! assert_eq!(Min::new().evaluate(&[5.0, 3.0, 9.0, 1.0, 7.0], 1, 3), 1.0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

pub mod range;
mod rank;
mod statistic;

pub use rank::{Max, Min};
pub use statistic::Statistic;

/// Value type statistics are computed over.
pub type Value = f64;
