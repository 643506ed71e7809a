use crate::{
    agg::{fold, Avg, Sum},
    AggregationResult, Value,
};

/// Sums all values in input order.
///
/// Returns 0 for an empty sequence.
#[must_use]
pub fn sum(values: &[Value]) -> Value {
    fold::<Sum>(values).unwrap_or_default()
}

/// Computes the arithmetic mean.
///
/// Returns 0 for an empty sequence.
#[must_use]
pub fn average(values: &[Value]) -> Value {
    fold::<Avg>(values).unwrap_or_default()
}

/// Computes sum, average and count in one go.
///
/// Never fails: an empty sequence yields an all-zero result.
#[must_use]
pub fn aggregate(values: &[Value]) -> AggregationResult {
    let result = AggregationResult {
        sum: sum(values),
        average: average(values),
        count: values.len(),
    };

    log::trace!("aggregated {} values: {result}", values.len());

    result
}
