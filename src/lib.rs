//! Tiny aggregation of number sequences into sum, average and count.
//!
//! The input is an ordered, in-memory slice of numbers that is only read, never retained.
//! Empty input is not an error: every aggregate falls back to zero, unless a
//! [`DataProcessor`] is configured with [`EmptyInput::Reject`].
//!
//! Values are f64s by default, so whole numbers up to 2^53 sum exactly.
//! They can be switched to f32 using the `low_precision` feature flag.
//!
//! ```
//! use tally::{aggregate, average, sum, values, DataProcessor};
//!
//! let data = values![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! assert_eq!(55.0, sum(data));
//! assert_eq!(5.5, average(data));
//!
//! let result = aggregate(data);
//! assert_eq!(10, result.count);
//!
//! let result = DataProcessor::new(data).process()?;
//! println!("{result}"); // {sum: 55, average: 5.5, count: 10}
//!
//! # Ok::<(), tally::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

/// Aggregation kernels
pub mod agg;

mod aggregate;
mod error;
mod processor;
mod processor_builder;
mod result;

pub use aggregate::{aggregate, average, sum};
pub use error::{Error, Result};
pub use processor::DataProcessor;
pub use processor_builder::{Builder, EmptyInput};
pub use result::AggregationResult;

/// Value used in aggregations
#[cfg(feature = "low_precision")]
pub type Value = f32;

/// Value used in aggregations
#[cfg(not(feature = "low_precision"))]
pub type Value = f64;

/// Macro to create a list of values from integer or float literals.
///
/// # Examples
///
/// ```
/// use tally::{values, Value};
///
/// let data: &[Value] = values![1, 2.5, -3];
/// assert_eq!(3, data.len());
/// ```
#[macro_export]
macro_rules! values {
  ($($x:expr),* $(,)?) => {{
      &[$($x as $crate::Value,)*]
  }}
}
