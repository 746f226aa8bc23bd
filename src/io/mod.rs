//! Readers and writers around the assembly core
pub mod export;
pub mod fasta;
pub mod fastq;
pub mod gfa;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Truncated FASTQ record {record}: expected 4 lines")]
    TruncatedRecord { record: usize },
    #[error("FASTQ record {record} has a non-ASCII sequence")]
    NonAsciiSequence { record: usize },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Plotting error: {0}")]
    Plot(String),
}

/// True when `path` names a gzip file
pub(crate) fn is_gzip(path: &std::path::Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
