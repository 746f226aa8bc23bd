use serde::Serialize;
use std::fmt;

use crate::graph::debruijn::DeBruijnGraph;

/// Node, edge and endpoint counts of a graph at one point of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub sources: usize,
    pub sinks: usize,
}

impl GraphSummary {
    pub fn of(graph: &DeBruijnGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            sources: graph.sources().len(),
            sinks: graph.sinks().len(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, {} sources, {} sinks",
            self.nodes, self.edges, self.sources, self.sinks
        )
    }
}

/// Count nodes by in-degree and by out-degree
pub fn degree_distribution(graph: &DeBruijnGraph) -> (Vec<usize>, Vec<usize>) {
    let mut in_degrees = Vec::new();
    let mut out_degrees = Vec::new();

    for node in graph.nodes() {
        let din = graph.in_degree(node);
        let dout = graph.out_degree(node);
        if in_degrees.len() <= din {
            in_degrees.resize(din + 1, 0);
        }
        if out_degrees.len() <= dout {
            out_degrees.resize(dout + 1, 0);
        }
        in_degrees[din] += 1;
        out_degrees[dout] += 1;
    }
    (in_degrees, out_degrees)
}
