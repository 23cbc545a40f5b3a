use std::fmt;
use std::str::FromStr;

/// Seed used by tests and benches when none is given.
pub const DEFAULT_SEED: u64 = 12345;
/// Smallest value the generator hands to the sorter.
pub const MIN_VALUE: u32 = 1;

const _: () = {
    assert!(MIN_VALUE >= 1, "MIN_VALUE must be positive, value 0 has no presence slot");
};

/// What the mark phase does when it meets a value it has already marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Duplicates share one presence bit and the output shrinks.
    #[default]
    Collapse,
    /// Fail with `SortError::DuplicateValue`.
    Reject,
    /// Keep a count per value and emit every occurrence.
    Count,
}

impl DuplicatePolicy {
    pub fn name(self) -> &'static str {
        match self {
            DuplicatePolicy::Collapse => "collapse",
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Count => "count",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "collapse" => Ok(DuplicatePolicy::Collapse),
            "reject" => Ok(DuplicatePolicy::Reject),
            "count" => Ok(DuplicatePolicy::Count),
            other => Err(format!("unknown duplicate policy '{other}' (expected collapse, reject or count)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub duplicates: DuplicatePolicy,
}

impl SortConfig {
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        SortConfig { duplicates }
    }
}
