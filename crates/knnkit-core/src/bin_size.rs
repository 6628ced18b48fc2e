//! Partition size heuristic for downstream index construction.

/// `(threshold, bin size)` pairs in ascending threshold order.
const BIN_SIZES: [(u64, u64); 6] = [
    (1 << 8, 1),
    (1 << 12, 2),
    (1 << 16, 4),
    (1 << 20, 8),
    (1 << 24, 16),
    (1 << 28, 32),
];

/// Bin size for data sets at or above the last threshold.
pub const MAX_BIN_SIZE: u64 = 64;

/// Recommended bucket size for a data set of `rows` rows.
///
/// Returns the value of the first threshold `rows` is strictly below, or
/// [`MAX_BIN_SIZE`] from 2^28 rows on.
///
/// ```
/// use knnkit_core::estimate_bin_size;
///
/// assert_eq!(estimate_bin_size(255), 1);
/// assert_eq!(estimate_bin_size(256), 2);
/// assert_eq!(estimate_bin_size(300_000_000), 64);
/// ```
#[must_use]
pub fn estimate_bin_size(rows: u64) -> u64 {
    BIN_SIZES
        .iter()
        .find(|(threshold, _)| rows < *threshold)
        .map_or(MAX_BIN_SIZE, |(_, value)| *value)
}
