//! Strong types for configuration values
//!
//! These types ensure configuration values are not confused with
//! blockchain values (block numbers, request ids, etc.).

use serde::{Deserialize, Serialize};

/// Maximum block range for a single `eth_getLogs` call
///
/// Many hosted RPC providers reject log queries spanning the whole chain
/// history. Setting a range splits the history into chunks of at most this
/// many blocks.
///
/// # Examples
///
/// ```
/// use desmoscan::MaxBlockRange;
///
/// let conservative = MaxBlockRange::DEFAULT;
/// assert_eq!(conservative.as_u64(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Conservative default (works on most chains)
    pub const DEFAULT: Self = Self(2000);

    /// For chains with generous RPC limits
    pub const GENEROUS: Self = Self(10000);

    /// Create a new max block range
    pub const fn new(blocks: u64) -> Self {
        Self(blocks)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Calculate number of chunks needed to cover a range
    ///
    /// # Examples
    ///
    /// ```
    /// use desmoscan::MaxBlockRange;
    ///
    /// let range = MaxBlockRange::new(1000);
    /// assert_eq!(range.chunks_needed(0, 2500), 3); // 0-999, 1000-1999, 2000-2500
    /// ```
    pub fn chunks_needed(&self, start: u64, end: u64) -> usize {
        if end < start || self.0 == 0 {
            return 0;
        }
        let total_blocks = end - start + 1;
        total_blocks.div_ceil(self.0) as usize
    }

    /// Split an inclusive block range into chunks of at most `self` blocks
    ///
    /// # Examples
    ///
    /// ```
    /// use desmoscan::MaxBlockRange;
    ///
    /// let chunks: Vec<_> = MaxBlockRange::new(1000).chunk_range(0, 2500).collect();
    /// assert_eq!(chunks, vec![(0, 999), (1000, 1999), (2000, 2500)]);
    /// ```
    pub fn chunk_range(&self, start: u64, end: u64) -> ChunkIterator {
        ChunkIterator {
            current: start,
            end,
            chunk_size: self.0,
            done: self.0 == 0 || end < start,
        }
    }
}

impl From<u64> for MaxBlockRange {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MaxBlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

/// Iterator over block range chunks
///
/// Created by [`MaxBlockRange::chunk_range`]. Yields inclusive
/// `(start, end)` tuples.
#[derive(Debug, Clone)]
pub struct ChunkIterator {
    current: u64,
    end: u64,
    chunk_size: u64,
    done: bool,
}

impl Iterator for ChunkIterator {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk_start = self.current;
        let chunk_end = chunk_start
            .saturating_add(self.chunk_size - 1)
            .min(self.end);

        // chunk_end == u64::MAX would overflow the cursor
        match chunk_end.checked_add(1) {
            Some(next) if next <= self.end => self.current = next,
            _ => self.done = true,
        }

        Some((chunk_start, chunk_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk_when_range_fits() {
        let chunks: Vec<_> = MaxBlockRange::new(500).chunk_range(10, 20).collect();
        assert_eq!(chunks, vec![(10, 20)]);
    }

    #[test]
    fn test_zero_range_yields_nothing() {
        assert_eq!(MaxBlockRange::new(0).chunk_range(0, 10).count(), 0);
        assert_eq!(MaxBlockRange::new(0).chunks_needed(0, 10), 0);
    }

    #[test]
    fn test_inverted_range_yields_nothing() {
        assert_eq!(MaxBlockRange::new(10).chunk_range(20, 10).count(), 0);
    }

    #[test]
    fn test_chunking_up_to_u64_max_terminates() {
        let chunks: Vec<_> = MaxBlockRange::new(10)
            .chunk_range(u64::MAX - 14, u64::MAX)
            .collect();
        assert_eq!(
            chunks,
            vec![(u64::MAX - 14, u64::MAX - 5), (u64::MAX - 4, u64::MAX)]
        );
    }

    #[test]
    fn test_chunk_count_matches_iterator() {
        let range = MaxBlockRange::new(30);
        assert_eq!(range.chunks_needed(0, 99), range.chunk_range(0, 99).count());
    }
}
