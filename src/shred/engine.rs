//! Core shredding engine - block scan and conditional rewrite.
//!
//! This module implements the file-processing loop:
//!
//! - read one block (full-transfer read, short only at end-of-file)
//! - test the block for all-zero content
//! - if any byte is non-zero, seek back over the bytes just read and
//!   overwrite exactly that many bytes with zeros
//! - stop after the first short read
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gentleshred::{Shredder, ShredConfig};
//!
//! let mut data = Cursor::new(vec![0, 0, 0, 0, b'A', b'B', b'C', b'D']);
//! let shredder = Shredder::new(ShredConfig::default());
//!
//! let report = shredder.shred(&mut data, 4)?;
//! assert_eq!(report.blocks_rewritten, 1);
//! assert_eq!(data.into_inner(), vec![0u8; 8]);
//! # Ok::<(), gentleshred::ShredError>(())
//! ```

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use bytes::Bytes;
use tracing::debug;

use crate::config::{FALLBACK_BLOCK_SIZE, ShredConfig, validate_block_size};
use crate::error::ShredError;
use crate::io::{read_full, write_full};

use super::report::ShredReport;

/// A shredder that rewrites the non-zero blocks of a stream with zeros.
///
/// `Shredder` holds a [`ShredConfig`] and processes one target at a time.
/// It allocates two buffers per target - a read buffer and an all-zero write
/// source, both of block-size length - and releases them when processing of
/// that target ends. No state is shared between targets.
///
/// # Cursor discipline
///
/// After a rewrite the cursor sits exactly where the triggering read left it,
/// so the loop never re-reads or skips bytes. The stream's length is never
/// changed.
///
/// # Failure semantics
///
/// Any read, seek, or write error aborts the current target immediately.
/// There is no retry and no skip-and-continue; partial completion is visible
/// only through which blocks were rewritten before the abort.
///
/// # Example
///
/// ```no_run
/// use std::fs::OpenOptions;
/// use gentleshred::{Shredder, ShredConfig};
///
/// let mut file = OpenOptions::new().read(true).write(true).open("data.bin")?;
/// let shredder = Shredder::new(ShredConfig::new(64 * 1024)?);
/// let report = shredder.shred_file(&mut file)?;
/// println!("{} bytes rewritten", report.bytes_rewritten);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Shredder {
    config: ShredConfig,
}

impl Shredder {
    /// Creates a new shredder with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gentleshred::{Shredder, ShredConfig};
    ///
    /// let shredder = Shredder::new(ShredConfig::default());
    /// ```
    pub fn new(config: ShredConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this shredder.
    pub fn config(&self) -> &ShredConfig {
        &self.config
    }

    /// Shreds an open file in place.
    ///
    /// The file must be open for both reading and writing, with the cursor at
    /// the start. The block size is taken from the configuration when set;
    /// otherwise it is the preferred I/O block size reported by the
    /// filesystem holding this file, so different files in one run may use
    /// different block sizes.
    ///
    /// # Errors
    ///
    /// Fails on the first metadata, read, seek, or write error, or if the
    /// configured block size is out of range.
    pub fn shred_file(&self, file: &mut File) -> Result<ShredReport, ShredError> {
        let block_size = match self.config.block_size() {
            Some(size) => size,
            None => preferred_block_size(file)?,
        };
        self.shred(file, block_size)
    }

    /// Shreds any seekable read-write stream with an explicit block size.
    ///
    /// This is the core loop; [`Shredder::shred_file`] delegates here after
    /// resolving the block size. It reads `block_size` bytes at a time and
    /// overwrites each block that contains a non-zero byte with the same
    /// number of zero bytes, in place. A trailing partial block is rewritten
    /// at its actual length, never padded to a full block.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::InvalidConfig`] for an out-of-range block size,
    /// and fails on the first I/O error otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use gentleshred::{Shredder, ShredConfig};
    ///
    /// let mut data = Cursor::new(vec![1u8, 2, 3]);
    /// let report = Shredder::new(ShredConfig::default()).shred(&mut data, 4)?;
    /// assert_eq!(report.bytes_rewritten, 3);
    /// # Ok::<(), gentleshred::ShredError>(())
    /// ```
    pub fn shred<T: Read + Write + Seek>(
        &self,
        io: &mut T,
        block_size: usize,
    ) -> Result<ShredReport, ShredError> {
        validate_block_size(block_size)?;

        let mut buf = vec![0u8; block_size];
        let zeros = Bytes::from(vec![0u8; block_size]);
        let mut report = ShredReport::default();

        loop {
            let n = read_full(io, &mut buf)?;
            if n == 0 {
                break;
            }
            report.blocks_scanned += 1;
            report.bytes_scanned += n as u64;

            if buf[..n].iter().any(|&b| b != 0) {
                // block_size < BLOCK_SIZE_LIMIT keeps this cast in range
                io.seek(SeekFrom::Current(-(n as i64)))?;
                write_full(io, &zeros[..n])?;
                report.blocks_rewritten += 1;
                report.bytes_rewritten += n as u64;
            }

            if n < block_size {
                break;
            }
        }

        debug!(
            block_size,
            blocks_scanned = report.blocks_scanned,
            blocks_rewritten = report.blocks_rewritten,
            bytes_rewritten = report.bytes_rewritten,
            "shred pass complete"
        );

        Ok(report)
    }
}

impl Default for Shredder {
    fn default() -> Self {
        Self::new(ShredConfig::default())
    }
}

/// Preferred I/O block size of the filesystem holding `file`.
///
/// Falls back to [`FALLBACK_BLOCK_SIZE`] when the filesystem reports zero or
/// a value outside the valid range.
#[cfg(unix)]
fn preferred_block_size(file: &File) -> Result<usize, ShredError> {
    use std::os::unix::fs::MetadataExt;

    use crate::config::BLOCK_SIZE_LIMIT;

    let reported = file.metadata()?.blksize();
    Ok(match usize::try_from(reported) {
        Ok(size) if size > 0 && size < BLOCK_SIZE_LIMIT => size,
        _ => FALLBACK_BLOCK_SIZE,
    })
}

#[cfg(not(unix))]
fn preferred_block_size(_file: &File) -> Result<usize, ShredError> {
    Ok(FALLBACK_BLOCK_SIZE)
}
