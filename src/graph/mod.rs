//! De Bruijn graph construction, simplification and contig extraction
pub mod bubble;
pub mod contig;
pub mod debruijn;
pub mod path;
pub mod stats;
pub mod tips;
pub mod traverse;

pub use bubble::{simplify_bubbles, solve_bubble, BubbleReport};
pub use contig::{extract_contigs, get_contigs, path_to_sequence, Contig};
pub use debruijn::{build_graph, DeBruijnGraph, NodeId};
pub use path::{path_average_weight, select_best_path, ScoredPath, Selection};
pub use stats::GraphSummary;
pub use tips::{resolve_tips, solve_entry_tips, solve_out_tips, TipReport};
