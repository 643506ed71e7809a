pub(crate) mod avg;
pub(crate) mod stream;
pub(crate) mod sum;

pub use avg::Avg;
pub use stream::{fold, Aggregation};
pub use sum::Sum;

use crate::Value;

/// Running accumulator of a fold.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bucket {
    /// Accumulated value
    pub value: Value,

    /// Number of elements folded into `value`
    pub len: usize,
}
