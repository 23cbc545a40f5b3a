use log::{debug, info, warn};
use crate::config::{DuplicatePolicy, SortConfig};
use crate::error::SortError;
use crate::presence::{HoleCounts, Holes, PresenceBits};
use crate::sorter::BigSorter;

/// Sorts distinct positive values, duplicates collapse.
pub fn sort(arr: &[u32]) -> Result<Vec<u32>, SortError> {
    sort_with(arr, SortConfig::default())
}

pub fn sort_with(arr: &[u32], config: SortConfig) -> Result<Vec<u32>, SortError> {
    let mut sorter = BigSorter::with_config(arr, config);
    sorter.sort()?;
    Ok(sorter.into_sorted())
}

/// Runs scan, mark and collect. Returns the output and the indicator length.
/// Runs inside the timed region, so only constant-size summaries are logged.
pub(crate) fn pigeonhole(arr: &[u32], policy: DuplicatePolicy) -> Result<(Vec<u32>, usize), SortError> {
    let max = scan(arr)?;
    info!("Max element: {}", max);

    match policy {
        DuplicatePolicy::Count => {
            let mut holes = HoleCounts::with_len(max as usize);
            mark(arr, &mut holes, policy)?;
            Ok((collect(&holes, arr.len()), holes.len()))
        }
        DuplicatePolicy::Collapse | DuplicatePolicy::Reject => {
            let mut holes = PresenceBits::with_len(max as usize);
            let collapsed = mark(arr, &mut holes, policy)?;
            if collapsed > 0 {
                warn!("{} duplicate element(s) collapsed, output is shorter than input", collapsed);
            }
            Ok((collect(&holes, arr.len() - collapsed), holes.len()))
        }
    }
}

/// Finds the largest value. Fails on empty input and on zero.
pub(crate) fn scan(arr: &[u32]) -> Result<u32, SortError> {
    if arr.is_empty() {
        return Err(SortError::EmptyInput);
    }
    let mut max = 0;
    for (index, &value) in arr.iter().enumerate() {
        if value == 0 {
            return Err(SortError::ZeroValue { index });
        }
        if value > max {
            max = value;
        }
    }
    Ok(max)
}

/// Marks every value. Returns how many values were already marked.
pub(crate) fn mark<H: Holes>(arr: &[u32], holes: &mut H, policy: DuplicatePolicy) -> Result<usize, SortError> {
    let mut repeated = 0;
    for &value in arr {
        if holes.mark(value) {
            if policy == DuplicatePolicy::Reject {
                return Err(SortError::DuplicateValue { value });
            }
            repeated += 1;
        }
    }
    debug!("Marked {} values in {} slots ({} repeated)", arr.len(), holes.len(), repeated);
    Ok(repeated)
}

/// Emits the marked values in ascending order.
pub(crate) fn collect<H: Holes>(holes: &H, expected: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(expected);
    holes.collect_into(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small() {
        assert_eq!(sort(&[5, 2, 9, 1, 7]).unwrap(), vec![1, 2, 5, 7, 9]);
    }

    #[test]
    fn scan_rejects_zero() {
        assert_eq!(scan(&[4, 0, 2]), Err(SortError::ZeroValue { index: 1 }));
        assert_eq!(scan(&[]), Err(SortError::EmptyInput));
        assert_eq!(scan(&[4, 9, 2]), Ok(9));
    }

    #[test]
    fn mark_counts_repeats() {
        let mut holes = PresenceBits::with_len(5);
        assert_eq!(mark(&[3, 1, 4, 1, 5], &mut holes, DuplicatePolicy::Collapse), Ok(1));

        let mut holes = PresenceBits::with_len(5);
        assert_eq!(
            mark(&[3, 1, 4, 1, 5], &mut holes, DuplicatePolicy::Reject),
            Err(SortError::DuplicateValue { value: 1 })
        );
    }

    #[test]
    fn indicator_len_is_max() {
        let (sorted, len) = pigeonhole(&[2, 1000, 3], DuplicatePolicy::Collapse).unwrap();
        assert_eq!(sorted, vec![2, 3, 1000]);
        assert_eq!(len, 1000);
    }

    #[test]
    fn counting_variant() {
        let (sorted, len) = pigeonhole(&[3, 1, 4, 1, 5], DuplicatePolicy::Count).unwrap();
        assert_eq!(sorted, vec![1, 1, 3, 4, 5]);
        assert_eq!(len, 5);
    }
}
