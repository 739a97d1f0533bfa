//! The ShredReport type - counters for one processed file.

/// Counters describing what shredding one file did.
///
/// A rewrite is issued only for blocks containing at least one non-zero byte,
/// so `blocks_rewritten` is exactly the number of write operations performed.
///
/// # Example
///
/// ```
/// use gentleshred::ShredReport;
///
/// let report = ShredReport::default();
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShredReport {
    /// Number of blocks read, including a trailing partial block.
    pub blocks_scanned: u64,

    /// Number of blocks that contained a non-zero byte and were rewritten.
    pub blocks_rewritten: u64,

    /// Total bytes read.
    pub bytes_scanned: u64,

    /// Total bytes overwritten with zeros.
    pub bytes_rewritten: u64,
}

impl ShredReport {
    /// Returns `true` if the file was already entirely zero and no write was
    /// issued.
    pub fn is_clean(&self) -> bool {
        self.blocks_rewritten == 0
    }
}
