use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::io::fasta::LINE_WIDTH;

pub const DEFAULT_KMER_SIZE: usize = 22;
pub const DEFAULT_SEED: u64 = 9001;
pub const DEFAULT_OUTPUT: &str = "contigs.fasta";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("k-mer size must be at least 2, got {0}")]
    KmerTooSmall(usize),
    #[error("{} does not exist", .0.display())]
    MissingInput(PathBuf),
    #[error("{} is a directory", .0.display())]
    InputIsDirectory(PathBuf),
    #[error("line width must be positive")]
    ZeroLineWidth,
}

/// Parameters of one assembly run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// FASTQ(.gz) reads
    pub input: PathBuf,
    pub kmer_size: usize,
    /// FASTA(.gz) contigs
    pub output: PathBuf,
    /// PNG rendering of the simplified graph
    pub graph_image: Option<PathBuf>,
    pub gfa: Option<PathBuf>,
    pub graph_json: Option<PathBuf>,
    pub stats_json: Option<PathBuf>,
    /// Seed for tie-breaks and graph layout
    pub seed: u64,
    pub line_width: usize,
}

impl AssemblyConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            kmer_size: DEFAULT_KMER_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            graph_image: None,
            gfa: None,
            graph_json: None,
            stats_json: None,
            seed: DEFAULT_SEED,
            line_width: LINE_WIDTH,
        }
    }

    /// Check parameters before any work starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kmer_size < 2 {
            return Err(ConfigError::KmerTooSmall(self.kmer_size));
        }
        if self.line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        if self.input.is_dir() {
            return Err(ConfigError::InputIsDirectory(self.input.clone()));
        }
        if !self.input.is_file() {
            return Err(ConfigError::MissingInput(self.input.clone()));
        }
        Ok(())
    }
}
