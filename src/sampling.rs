use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::error::SampleError;

/// Number of distinct values in `[min, max]`, zero when the range is inverted.
pub fn range_len(min: u32, max: u32) -> u64 {
    if min > max {
        0
    } else {
        max as u64 - min as u64 + 1
    }
}

/// Draws `size` distinct values uniformly from `[min, max]`.
///
/// The whole range is materialised and shuffled before the first `size`
/// values are taken, so time and memory are linear in the range width, not in
/// `size`.
pub fn generate_unique_sample<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    min: u32,
    max: u32,
) -> Result<Vec<u32>, SampleError> {
    let available = range_len(min, max);
    if size as u64 > available {
        return Err(SampleError::InvalidRange { size, min, max, available });
    }
    if size == 0 {
        return Ok(Vec::new());
    }

    let mut all: Vec<u32> = (min..=max).collect();
    all.shuffle(rng);
    all.truncate(size);
    debug!("Sampled {} of {} values from [{}, {}]", size, available, min, max);
    Ok(all)
}
