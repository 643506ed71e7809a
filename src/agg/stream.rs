use super::Bucket;
use crate::Value;

/// Defines an aggregation.
///
/// - `init` seeds the accumulator with the first value (default: Identity)
///
/// - `transform` defines what to do with each further value (default: Add)
///
/// - `finish` can transform the result value (default: Identity)
pub trait Aggregation {
    /// Seeds the accumulator from the first element.
    fn init(value: Value) -> Value {
        value
    }

    /// Folds the next element into the accumulator.
    fn transform(accu: Value, x: Value) -> Value {
        accu + x
    }

    /// Produces the final value once every element was folded.
    fn finish(bucket: &Bucket) -> Value {
        bucket.value
    }
}

/// Folds `values` left to right using the aggregation `A`.
///
/// Returns `None` if `values` is empty.
///
/// ```
/// use tally::agg::{fold, Avg, Sum};
///
/// assert_eq!(Some(6.0), fold::<Sum>(&[1.0, 2.0, 3.0]));
/// assert_eq!(Some(2.0), fold::<Avg>(&[1.0, 2.0, 3.0]));
/// assert_eq!(None, fold::<Sum>(&[]));
/// ```
#[must_use]
pub fn fold<A: Aggregation>(values: &[Value]) -> Option<Value> {
    let (&first, rest) = values.split_first()?;

    let mut bucket = Bucket {
        value: A::init(first),
        len: 1,
    };

    for &x in rest {
        bucket.len += 1;
        bucket.value = A::transform(bucket.value, x);
    }

    Some(A::finish(&bucket))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[derive(Clone)]
    struct Product;

    impl Aggregation for Product {
        fn transform(accu: Value, x: Value) -> Value {
            accu * x
        }
    }

    #[test]
    fn fold_empty() {
        assert_eq!(None, fold::<Product>(&[]));
    }

    #[test]
    fn fold_single() {
        assert_eq!(Some(4.0), fold::<Product>(&[4.0]));
    }

    #[test]
    fn fold_custom_transform() {
        assert_eq!(Some(24.0), fold::<Product>(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn fold_is_left_to_right() {
        #[derive(Clone)]
        struct Last;

        impl Aggregation for Last {
            fn transform(_: Value, x: Value) -> Value {
                x
            }
        }

        assert_eq!(Some(3.0), fold::<Last>(&[1.0, 2.0, 3.0]));
    }
}
