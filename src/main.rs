use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gentleshred::{ShredConfig, ShredError, Shredder};

const PROGRAM_NAME: &str = "gentleshred";

#[derive(Parser)]
#[command(
    name = PROGRAM_NAME,
    about = "Overwrite non-zero file blocks with zeros, skipping blocks that are already zero",
    version,
    long_about = "Reads each FILE in fixed-size blocks and overwrites every block containing a \
non-zero byte with zeros, in place. Already-zero blocks are left untouched, so filesystems with \
sparse-file support can reclaim the space without extra writes."
)]
struct Cli {
    /// Block size in bytes (default: each file's preferred filesystem I/O size)
    #[arg(short = 'b', long = "block-size", value_name = "SIZE")]
    block_size: Option<usize>,

    /// Files to shred in place (must be writable)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate the block size before any file is opened.
    let config = match cli.block_size {
        Some(size) => match ShredConfig::new(size) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: -b: {}", PROGRAM_NAME, e);
                return ExitCode::FAILURE;
            }
        },
        None => ShredConfig::default(),
    };

    let shredder = Shredder::new(config);
    for path in &cli.files {
        if let Err(e) = shred_path(&shredder, path) {
            eprintln!("{}: {}: {}", PROGRAM_NAME, path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn shred_path(shredder: &Shredder, path: &Path) -> Result<(), ShredError> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let report = shredder.shred_file(&mut file)?;
    info!(
        path = %path.display(),
        blocks_scanned = report.blocks_scanned,
        blocks_rewritten = report.blocks_rewritten,
        bytes_rewritten = report.bytes_rewritten,
        "file processed"
    );
    Ok(())
}
