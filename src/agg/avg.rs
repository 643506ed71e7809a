use super::Bucket;
use crate::Value;

/// Arithmetic mean: sums like [`Sum`](super::Sum), then divides by the element count.
#[derive(Clone)]
pub struct Avg;

impl super::stream::Aggregation for Avg {
    fn init(value: Value) -> Value {
        <super::Sum as super::stream::Aggregation>::init(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(bucket: &Bucket) -> Value {
        bucket.value / bucket.len as Value
    }
}
