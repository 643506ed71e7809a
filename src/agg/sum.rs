use crate::Value;

/// Arithmetic sum, accumulated in input order.
#[derive(Clone)]
pub struct Sum;

impl super::stream::Aggregation for Sum {
    // NOTE: Start from 0 so a lone -0.0 reports as 0
    fn init(value: Value) -> Value {
        0.0 + value
    }
}
