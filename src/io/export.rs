use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::graph::debruijn::DeBruijnGraph;
use crate::io::IoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Nodes and weighted edges of a graph, for external visualisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub k: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    pub fn from_graph(graph: &DeBruijnGraph, k: usize) -> Self {
        let nodes = graph.labels().map(str::to_string).collect();
        let edges = graph
            .edges()
            .filter_map(|(from, to, weight)| {
                Some(EdgeRecord {
                    source: graph.label(from)?.to_string(),
                    target: graph.label(to)?.to_string(),
                    weight,
                })
            })
            .collect();
        Self { k, nodes, edges }
    }
}

/// Write the graph snapshot as pretty-printed JSON
pub fn export_graph_json(
    graph: &DeBruijnGraph,
    k: usize,
    output_path: &Path,
) -> Result<(), IoError> {
    let file = File::create(output_path).map_err(|source| IoError::Create {
        path: output_path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &GraphSnapshot::from_graph(graph, k))?;
    Ok(())
}
