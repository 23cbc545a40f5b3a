use std::fmt;
use std::fmt::Display;
use std::time::{Duration, Instant};
use log::{debug, info};
use crate::config::SortConfig;
use crate::error::SortError;
use crate::sort::pigeonhole;

/// Pigeonhole sorter over a borrowed input.
///
/// After [`BigSorter::sort`] the sorted values, the elapsed time and the
/// length of the presence indicator that was allocated can be read back. The
/// indicator length is driven by the largest input value, not by the input
/// size, so a single large outlier makes the sort expensive.
#[derive(Debug)]
pub struct BigSorter<'a> {
    arr: &'a [u32],
    config: SortConfig,

    sorted: Vec<u32>,
    elapsed: Duration,
    presence_len: usize,
}

impl<'a> BigSorter<'a> {
    pub fn new(arr: &'a [u32]) -> BigSorter<'a> {
        Self::with_config(arr, SortConfig::default())
    }

    pub fn with_config(arr: &'a [u32], config: SortConfig) -> BigSorter<'a> {
        BigSorter {
            arr,
            config,
            sorted: Vec::new(),
            elapsed: Duration::ZERO,
            presence_len: 0,
        }
    }

    /// Scans for the maximum, marks every value and collects the marked
    /// slots in order. All three phases are timed.
    ///
    /// On error the accessors keep their previous values.
    pub fn sort(&mut self) -> Result<(), SortError> {
        debug!("Input: {:?}", self.arr);

        let start = Instant::now();
        let (sorted, presence_len) = pigeonhole(self.arr, self.config.duplicates)?;
        let elapsed = start.elapsed();

        debug!("Output: {:?}", sorted);
        info!("Sorted {} elements with {} presence slots in {:?}", self.arr.len(), presence_len, elapsed);
        self.sorted = sorted;
        self.presence_len = presence_len;
        self.elapsed = elapsed;
        Ok(())
    }

    pub fn config(&self) -> SortConfig {
        self.config
    }

    pub fn sorted(&self) -> &[u32] {
        &self.sorted
    }

    pub fn into_sorted(self) -> Vec<u32> {
        self.sorted
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn original_len(&self) -> usize {
        self.arr.len()
    }

    pub fn presence_len(&self) -> usize {
        self.presence_len
    }
}

impl Display for BigSorter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original array size: {}", self.original_len())?;
        writeln!(f, "Exists array size: {}", self.presence_len())?;
        writeln!(f, "Sorted array size: {}", self.sorted.len())?;
        write!(f, "Time taken to sort: {} milliseconds", self.elapsed_ms())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};
    use log::{LevelFilter, Log, Metadata, Record};
    use crate::config::DuplicatePolicy;
    use super::*;

    struct Recorder {
        lines: Mutex<Vec<(ThreadId, String)>>,
    }

    impl Recorder {
        fn take_own(&self) -> Vec<String> {
            let me = thread::current().id();
            let mut lines = self.lines.lock().unwrap();
            let (own, rest): (Vec<_>, Vec<_>) = lines.drain(..).partition(|(id, _)| *id == me);
            *lines = rest;
            own.into_iter().map(|(_, line)| line).collect()
        }
    }

    impl Log for Recorder {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let line = record.args().to_string();
            self.lines.lock().unwrap().push((thread::current().id(), line));
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder { lines: Mutex::new(Vec::new()) };

    fn record_logs() -> &'static Recorder {
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(LevelFilter::Trace);
        &RECORDER
    }

    #[test]
    fn array_dumps_stay_outside_timed_phases() {
        let recorder = record_logs();
        let input = [9, 4, 6];

        recorder.take_own();
        pigeonhole(&input, DuplicatePolicy::Collapse).unwrap();
        let timed = recorder.take_own();
        assert!(!timed.is_empty());
        assert!(timed.iter().all(|line| !line.contains("[9, 4, 6]") && !line.contains("[4, 6, 9]")), "{:?}", timed);

        let mut sorter = BigSorter::new(&input);
        sorter.sort().unwrap();
        let all = recorder.take_own();
        assert!(all.contains(&"Input: [9, 4, 6]".to_string()), "{:?}", all);
        assert!(all.contains(&"Output: [4, 6, 9]".to_string()), "{:?}", all);
    }

    #[test]
    fn single_element() {
        let input = [7];
        let mut sorter = BigSorter::new(&input);
        sorter.sort().unwrap();
        assert_eq!(sorter.sorted(), &[7]);
        assert_eq!(sorter.presence_len(), 7);
        assert_eq!(sorter.original_len(), 1);
    }

    #[test]
    fn accessors_before_sort() {
        let input = [3, 2];
        let sorter = BigSorter::new(&input);
        assert!(sorter.sorted().is_empty());
        assert_eq!(sorter.presence_len(), 0);
        assert_eq!(sorter.elapsed(), Duration::ZERO);
        assert_eq!(sorter.original_len(), 2);
        assert_eq!(sorter.config(), SortConfig::default());
    }

    #[test]
    fn failed_sort_keeps_state() {
        let input = [2, 2];
        let mut sorter = BigSorter::with_config(&input, SortConfig::new(DuplicatePolicy::Reject));
        assert_eq!(sorter.sort(), Err(SortError::DuplicateValue { value: 2 }));
        assert!(sorter.sorted().is_empty());
        assert_eq!(sorter.presence_len(), 0);
    }

    #[test]
    fn elapsed_ms_truncates() {
        let input = [1];
        let mut sorter = BigSorter::new(&input);
        sorter.sort().unwrap();
        assert_eq!(sorter.elapsed_ms(), sorter.elapsed().as_millis());
        assert!(sorter.elapsed_ms() as f64 <= sorter.elapsed().as_secs_f64() * 1000.0);
    }

    #[test]
    fn report_lines() {
        let input = [4, 1];
        let mut sorter = BigSorter::new(&input);
        sorter.sort().unwrap();
        let report = sorter.to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Original array size: 2");
        assert_eq!(lines[1], "Exists array size: 4");
        assert_eq!(lines[2], "Sorted array size: 2");
        assert!(lines[3].starts_with("Time taken to sort: "));
    }
}
