use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::graph::traverse::{all_simple_paths, has_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    pub id: usize,
    pub sequence: String,
    pub length: usize,
    /// Graph nodes the sequence was spelled from
    pub node_path: Vec<NodeId>,
}

/// Spell a path: the first node's label followed by the last character of
/// every later node. `None` if a node on the path is gone.
pub fn path_to_sequence(graph: &DeBruijnGraph, path: &[NodeId]) -> Option<String> {
    let (first, rest) = path.split_first()?;
    let mut sequence = graph.label(*first)?.to_string();
    for &node in rest {
        let last = graph.label(node)?.chars().last()?;
        sequence.push(last);
    }
    Some(sequence)
}

/// Spell every simple path from each start node to each end node.
///
/// Output follows (start, end, path) enumeration order; identical sequences
/// reached through different pairs or paths are all kept.
pub fn get_contigs(
    graph: &DeBruijnGraph,
    starting_nodes: &[NodeId],
    ending_nodes: &[NodeId],
) -> Vec<Contig> {
    let mut contigs = Vec::new();

    for &start in starting_nodes {
        for &end in ending_nodes {
            if !has_path(graph, start, end) {
                continue;
            }
            for path in all_simple_paths(graph, start, end) {
                if let Some(sequence) = path_to_sequence(graph, &path) {
                    contigs.push(Contig {
                        id: contigs.len(),
                        length: sequence.len(),
                        sequence,
                        node_path: path,
                    });
                }
            }
        }
    }
    contigs
}

/// Contigs of the graph in its current state, using its current sources and
/// sinks
pub fn extract_contigs(graph: &DeBruijnGraph) -> Vec<Contig> {
    get_contigs(graph, &graph.sources(), &graph.sinks())
}
