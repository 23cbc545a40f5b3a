use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("cannot draw {size} unique values from [{min}, {max}], the range only holds {available}")]
    InvalidRange {
        size: usize,
        min: u32,
        max: u32,
        available: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("cannot sort an empty input")]
    EmptyInput,
    #[error("value 0 at index {index} has no presence slot, values must be positive")]
    ZeroValue { index: usize },
    #[error("duplicate value {value} in input")]
    DuplicateValue { value: u32 },
}
