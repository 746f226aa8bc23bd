use clap::Parser;
use std::path::PathBuf;

use bruijn::config::{AssemblyConfig, DEFAULT_KMER_SIZE, DEFAULT_OUTPUT, DEFAULT_SEED};
use bruijn::io::fasta::LINE_WIDTH;

#[derive(Parser, Debug)]
#[command(
    name = "bruijn",
    version,
    about = "Assemble reads into contigs with a de Bruijn graph",
    long_about = None
)]
pub struct Cli {
    /// Input FASTQ(.gz) file
    #[arg(short = 'i', long = "input")]
    pub fastq_file: PathBuf,

    /// k-mer size
    #[arg(short = 'k', long, default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,

    /// Output contigs in FASTA(.gz)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output_file: PathBuf,

    /// Save the simplified graph as a PNG image
    #[arg(short = 'f', long = "graph-image")]
    pub graphimg_file: Option<PathBuf>,

    /// Write the simplified graph as GFA
    #[arg(long)]
    pub gfa: Option<PathBuf>,

    /// Write the simplified graph as JSON
    #[arg(long)]
    pub graph_json: Option<PathBuf>,

    /// Write run parameters and statistics as JSON
    #[arg(long)]
    pub stats_json: Option<PathBuf>,

    /// Seed for tie-breaks between equally supported paths
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// FASTA line width
    #[arg(long, default_value_t = LINE_WIDTH)]
    pub line_width: usize,

    /// Log every simplification step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> AssemblyConfig {
        AssemblyConfig {
            input: self.fastq_file.clone(),
            kmer_size: self.kmer_size,
            output: self.output_file.clone(),
            graph_image: self.graphimg_file.clone(),
            gfa: self.gfa.clone(),
            graph_json: self.graph_json.clone(),
            stats_json: self.stats_json.clone(),
            seed: self.seed,
            line_width: self.line_width,
        }
    }
}
