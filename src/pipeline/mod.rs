//! Assembly pipeline
pub mod assemble;

pub use assemble::{assemble_counts, assemble_reads, run, Assembly, AssemblyReport};

use thiserror::Error;

use crate::config::ConfigError;
use crate::io::IoError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] IoError),
}
