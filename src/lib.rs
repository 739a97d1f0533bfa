//! gentleshred
//!
//! Gentle shredding for sparse-aware filesystems.
//!
//! `gentleshred` reads a file in fixed-size blocks and overwrites each block
//! with zeros only if the block contains at least one non-zero byte. Blocks
//! that are already all-zero are left untouched, so the tool issues the
//! minimum number of writes needed to turn the whole file into zeros. On
//! filesystems with sparse-file support or transparent compression this lets
//! the filesystem reclaim the physical space behind logically cleared data.
//!
//! The crate intentionally:
//! - does NOT perform multi-pass secure erasure
//! - does NOT punch holes or truncate files
//! - does NOT flush or fsync beyond what the write call provides
//! - does NOT manage concurrency
//!
//! It only does one thing: **scan blocks → rewrite the non-zero ones with zeros**
//!
//! # Example
//!
//! ```no_run
//! use std::fs::OpenOptions;
//! use gentleshred::{Shredder, ShredConfig, ShredError};
//!
//! fn main() -> Result<(), ShredError> {
//!     let mut file = OpenOptions::new().read(true).write(true).open("data.bin")?;
//!     let shredder = Shredder::new(ShredConfig::default());
//!
//!     let report = shredder.shred_file(&mut file)?;
//!     println!(
//!         "rewrote {} of {} blocks",
//!         report.blocks_rewritten, report.blocks_scanned
//!     );
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod shred;

mod io; // internal full-transfer read/write primitives

//
// Public surface (intentionally tiny)
//

pub use config::{BLOCK_SIZE_LIMIT, FALLBACK_BLOCK_SIZE, ShredConfig};
pub use error::ShredError;
pub use shred::{ShredReport, Shredder};
