//! De Bruijn graph contig assembly.
//!
//! Reads are cut into k-mers, the k-mers become the weighted edges of a de
//! Bruijn graph over (k-1)-mers, bubbles and tips are simplified away, and
//! every simple source-to-sink path of what remains is spelled as a contig.
pub mod config;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;
pub mod visualize;
