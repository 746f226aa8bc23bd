//! K-mer extraction and counting
pub mod kmer;

pub use kmer::{build_kmer_counts, cut_kmers, KmerCounts, KmerWindows};
