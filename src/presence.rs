//! Presence indicators indexed by `value - 1`.

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-universe set of the values `1..=len`.
pub(crate) trait Holes {
    fn with_len(len: usize) -> Self;

    /// Number of slots, equal to the largest value that can be marked.
    fn len(&self) -> usize;

    /// Marks `value`. Returns `true` if it was already marked.
    ///
    /// `value` must lie in `1..=len`.
    fn mark(&mut self, value: u32) -> bool;

    /// Appends the marked values to `out` in ascending order.
    fn collect_into(&self, out: &mut Vec<u32>);
}

/// One bit per value, packed into `u64` words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PresenceBits {
    words: Vec<u64>,
    len: usize,
}

#[cfg(test)]
impl PresenceBits {
    fn contains(&self, value: u32) -> bool {
        if value == 0 || value as usize > self.len {
            return false;
        }
        let idx = value as usize - 1;
        self.words[idx / WORD_BITS] & (1 << (idx % WORD_BITS)) != 0
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl Holes for PresenceBits {
    fn with_len(len: usize) -> Self {
        PresenceBits {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn mark(&mut self, value: u32) -> bool {
        debug_assert!(value >= 1 && value as usize <= self.len);
        let idx = value as usize - 1;
        let word = &mut self.words[idx / WORD_BITS];
        let mask = 1u64 << (idx % WORD_BITS);
        let seen = *word & mask != 0;
        *word |= mask;
        seen
    }

    fn collect_into(&self, out: &mut Vec<u32>) {
        for (w, &word) in self.words.iter().enumerate() {
            let mut bits = word;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                out.push((w * WORD_BITS + bit) as u32 + 1);
                bits &= bits - 1;
            }
        }
    }
}

/// One counter per value, for inputs that may repeat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HoleCounts {
    counts: Vec<u32>,
}

#[cfg(test)]
impl HoleCounts {
    fn count(&self, value: u32) -> u32 {
        match (value as usize).checked_sub(1) {
            Some(idx) => self.counts.get(idx).copied().unwrap_or(0),
            None => 0,
        }
    }
}

impl Holes for HoleCounts {
    fn with_len(len: usize) -> Self {
        HoleCounts { counts: vec![0; len] }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    fn mark(&mut self, value: u32) -> bool {
        let slot = &mut self.counts[value as usize - 1];
        let seen = *slot > 0;
        *slot += 1;
        seen
    }

    fn collect_into(&self, out: &mut Vec<u32>) {
        for (i, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                let value = i as u32 + 1;
                out.extend(std::iter::repeat(value).take(count as usize));
            }
        }
    }
}
