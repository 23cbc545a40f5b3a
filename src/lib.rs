pub mod sort;
mod config;
mod error;
mod presence;
mod sampling;
mod sorter;

pub use config::{DuplicatePolicy, SortConfig, DEFAULT_SEED, MIN_VALUE};
pub use error::{SampleError, SortError};
pub use sampling::{generate_unique_sample, range_len};
pub use sort::{sort, sort_with};
pub use sorter::BigSorter;
