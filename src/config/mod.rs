//! Configuration for shredding behavior.
//!
//! This module provides [`ShredConfig`], which controls the block size used
//! when scanning and rewriting files.
//!
//! # Example
//!
//! ```
//! use gentleshred::ShredConfig;
//!
//! // Explicit 1 MiB blocks for every file
//! let config = ShredConfig::new(1024 * 1024)?;
//!
//! // Default: block size chosen per file from filesystem metadata
//! let config = ShredConfig::default();
//!
//! # Ok::<(), gentleshred::ShredError>(())
//! ```

use crate::error::ShredError;

/// Exclusive upper bound on the block size.
///
/// Keeping the block size strictly below half the address space guarantees
/// that a block length always fits in a signed seek offset.
pub const BLOCK_SIZE_LIMIT: usize = usize::MAX / 2;

/// Block size used when the filesystem reports no usable preferred I/O size
/// (and on platforms without a preferred-size query).
pub const FALLBACK_BLOCK_SIZE: usize = 4096;

/// Configuration for the shredding process.
///
/// The only tunable is the block size. When it is left unset, each file is
/// processed with the preferred I/O block size reported by the filesystem
/// holding that file, so different files in one run may use different block
/// sizes. An explicit block size applies uniformly to every file.
///
/// # Size constraint
///
/// An explicit block size must satisfy `0 < size < BLOCK_SIZE_LIMIT`.
///
/// # Example
///
/// ```
/// use gentleshred::ShredConfig;
///
/// let config = ShredConfig::new(64 * 1024)?;
/// assert_eq!(config.block_size(), Some(64 * 1024));
/// # Ok::<(), gentleshred::ShredError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShredConfig {
    /// Explicit block size in bytes, or `None` for the per-file default.
    block_size: Option<usize>,
}

impl ShredConfig {
    /// Creates a configuration with an explicit block size.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::InvalidConfig`] if `block_size` is zero or not
    /// strictly below [`BLOCK_SIZE_LIMIT`].
    ///
    /// # Example
    ///
    /// ```
    /// use gentleshred::ShredConfig;
    ///
    /// let config = ShredConfig::new(4096)?;
    /// assert_eq!(config.block_size(), Some(4096));
    ///
    /// assert!(ShredConfig::new(0).is_err());
    /// # Ok::<(), gentleshred::ShredError>(())
    /// ```
    pub fn new(block_size: usize) -> Result<Self, ShredError> {
        validate_block_size(block_size)?;
        Ok(Self {
            block_size: Some(block_size),
        })
    }

    /// Sets the block size without validating it.
    ///
    /// Use [`ShredConfig::validate`] to check the resulting configuration.
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = Some(size);
        self
    }

    /// Returns the explicit block size, or `None` when the per-file default
    /// applies.
    pub fn block_size(&self) -> Option<usize> {
        self.block_size
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gentleshred::ShredConfig;
    ///
    /// let config = ShredConfig::default().with_block_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ShredError> {
        match self.block_size {
            Some(size) => validate_block_size(size),
            None => Ok(()),
        }
    }
}

/// Checks that a block size lies in `1..BLOCK_SIZE_LIMIT`.
pub(crate) fn validate_block_size(size: usize) -> Result<(), ShredError> {
    if size == 0 {
        return Err(ShredError::InvalidConfig {
            message: "block size must be non-zero",
        });
    }
    if size >= BLOCK_SIZE_LIMIT {
        return Err(ShredError::InvalidConfig {
            message: "block size must be less than half the address space",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_explicit_size() {
        let config = ShredConfig::default();
        assert_eq!(config.block_size(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_block_size() {
        let config = ShredConfig::new(8192).unwrap();
        assert_eq!(config.block_size(), Some(8192));
    }

    #[test]
    fn test_zero_block_size_rejected() {
        assert!(ShredConfig::new(0).is_err());
    }

    #[test]
    fn test_block_size_at_limit_rejected() {
        assert!(ShredConfig::new(BLOCK_SIZE_LIMIT).is_err());
        assert!(ShredConfig::new(usize::MAX).is_err());
    }

    #[test]
    fn test_block_size_just_below_limit_accepted() {
        assert!(ShredConfig::new(BLOCK_SIZE_LIMIT - 1).is_ok());
    }

    #[test]
    fn test_builder_defers_validation() {
        let config = ShredConfig::default().with_block_size(0);
        assert_eq!(config.block_size(), Some(0));
        assert!(config.validate().is_err());
    }
}
