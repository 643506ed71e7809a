use crate::Value;

/// Outcome of aggregating a number sequence.
///
/// Behaves like a small labeled mapping with exactly the keys
/// `sum`, `average` and `count`.
///
/// ```
/// use tally::{aggregate, values};
///
/// let result = aggregate(values![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
///
/// assert_eq!(Some(55.0), result.get("sum"));
/// assert_eq!("{sum: 55, average: 5.5, count: 10}", result.to_string());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AggregationResult {
    /// Sum of all elements
    pub sum: Value,

    /// Arithmetic mean, 0 for empty input
    pub average: Value,

    /// Number of elements
    pub count: usize,
}

impl AggregationResult {
    /// Labels, in display order.
    pub const KEYS: [&'static str; 3] = ["sum", "average", "count"];

    /// Looks up a value by its label.
    ///
    /// Returns `None` for unknown labels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "sum" => Some(self.sum),
            "average" => Some(self.average),
            "count" => Some(self.count as Value),
            _ => None,
        }
    }

    /// Returns all labeled values in the order `sum`, `average`, `count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn entries(&self) -> [(&'static str, Value); 3] {
        [
            ("sum", self.sum),
            ("average", self.average),
            ("count", self.count as Value),
        ]
    }
}

impl std::fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{sum: {}, average: {}, count: {}}}",
            self.sum, self.average, self.count,
        )
    }
}
