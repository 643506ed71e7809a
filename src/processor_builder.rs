use crate::{DataProcessor, Value};

/// What to do when aggregating an empty sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmptyInput {
    #[default]
    /// Returns an all-zero result.
    Zero,

    /// Fails with [`Error::EmptyInput`](crate::Error::EmptyInput).
    Reject,
}

/// Builder for [`DataProcessor`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    pub(crate) empty_input: EmptyInput,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for empty input.
    ///
    /// Default = [`EmptyInput::Zero`]
    #[must_use]
    pub fn empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Creates a processor over `data`.
    #[must_use]
    pub fn build(self, data: &[Value]) -> DataProcessor<'_> {
        DataProcessor {
            data,
            empty_input: self.empty_input,
        }
    }
}
