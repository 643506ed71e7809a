use crate::{aggregate, processor_builder::Builder, AggregationResult, EmptyInput, Value};

/// Aggregates a borrowed number sequence.
///
/// ```
/// use tally::{values, DataProcessor, EmptyInput};
///
/// let processor = DataProcessor::new(values![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// let result = processor.process()?;
///
/// assert_eq!(55.0, result.sum);
/// assert_eq!(5.5, result.average);
/// assert_eq!(10, result.count);
///
/// let strict = DataProcessor::builder()
///     .empty_input(EmptyInput::Reject)
///     .build(&[]);
///
/// assert!(strict.process().is_err());
///
/// # Ok::<(), tally::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct DataProcessor<'a> {
    pub(crate) data: &'a [Value],
    pub(crate) empty_input: EmptyInput,
}

impl<'a> DataProcessor<'a> {
    /// Creates a processor using the default configuration.
    #[must_use]
    pub fn new(data: &'a [Value]) -> Self {
        Self::builder().build(data)
    }

    /// Creates a builder to configure a processor.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the sequence being processed.
    #[must_use]
    pub fn data(&self) -> &'a [Value] {
        self.data
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Computes sum, average and count of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`](crate::Error::EmptyInput) if the sequence is empty
    /// and the processor was built with [`EmptyInput::Reject`].
    pub fn process(&self) -> crate::Result<AggregationResult> {
        if self.is_empty() {
            log::debug!("Processing empty input with policy {:?}", self.empty_input);

            if self.empty_input == EmptyInput::Reject {
                return Err(crate::Error::EmptyInput);
            }
        }

        Ok(aggregate(self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{values, Error};
    use test_log::test;

    #[test]
    fn process_one_to_ten() -> crate::Result<()> {
        let result = DataProcessor::new(values![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).process()?;

        assert_eq!(55.0, result.sum);
        assert_eq!(5.5, result.average);
        assert_eq!(10, result.count);

        Ok(())
    }

    #[test]
    fn process_empty_default() -> crate::Result<()> {
        let processor = DataProcessor::new(&[]);
        assert!(processor.is_empty());
        assert_eq!(AggregationResult::default(), processor.process()?);

        Ok(())
    }

    #[test]
    fn process_empty_reject() {
        let processor = DataProcessor::builder()
            .empty_input(EmptyInput::Reject)
            .build(&[]);

        assert_eq!(Err(Error::EmptyInput), processor.process());
    }

    #[test]
    fn process_reject_matches_default() -> crate::Result<()> {
        let data = values![3, 1.5, -2, 8];

        let lenient = DataProcessor::new(data);
        let strict = DataProcessor::builder()
            .empty_input(EmptyInput::Reject)
            .build(data);

        assert_eq!(4, strict.len());
        assert_eq!(lenient.process()?, strict.process()?);

        Ok(())
    }

    #[test]
    fn process_does_not_mutate_input() -> crate::Result<()> {
        let expected: &[Value] = &[5.0, 1.0, 3.0];

        let data: Vec<Value> = expected.to_vec();
        let processor = DataProcessor::new(&data);

        processor.process()?;

        assert_eq!(expected, processor.data());
        assert_eq!(expected, data.as_slice());

        Ok(())
    }

    #[test]
    fn processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataProcessor<'static>>();
        assert_send_sync::<AggregationResult>();
    }
}
