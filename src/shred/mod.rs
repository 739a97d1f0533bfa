//! Shredding engine for processing files block-by-block.
//!
//! - [`Shredder`] - Scans blocks and conditionally rewrites them with zeros
//! - [`ShredReport`] - Per-file counters describing what a run did

mod engine;
mod report;

pub use engine::Shredder;
pub use report::ShredReport;
