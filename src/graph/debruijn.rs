use ahash::AHashMap;
use std::fmt;

use crate::kmer::KmerCounts;

/// Stable handle of a node inside a [`DeBruijnGraph`].
///
/// Ids are assigned in insertion order and never reused, so an id taken
/// before a mutation stays valid (it may just point at a removed node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    label: String,
    successors: Vec<(NodeId, u32)>,
    predecessors: Vec<NodeId>,
}

/// Directed, weighted de Bruijn graph over (k-1)-mer labels.
///
/// Nodes live in an arena indexed by [`NodeId`]; removed slots are left empty.
/// Adjacency is kept in insertion order in both directions and degrees are
/// always read off the live lists.
#[derive(Debug, Clone, Default)]
pub struct DeBruijnGraph {
    nodes: Vec<Option<NodeData>>,
    index: AHashMap<String, NodeId>,
    live_nodes: usize,
    live_edges: usize,
}

impl DeBruijnGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the id for `label`, creating the node if needed
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(NodeData {
            label: label.to_string(),
            successors: Vec::new(),
            predecessors: Vec::new(),
        }));
        self.index.insert(label.to_string(), id);
        self.live_nodes += 1;
        id
    }

    /// Add `from -> to` with `weight`, creating endpoints on first sight.
    /// An existing edge keeps its position and takes the new weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) -> (NodeId, NodeId) {
        let source = self.add_node(from);
        let target = self.add_node(to);

        let existing = self.data(source).and_then(|data| {
            data.successors
                .iter()
                .position(|(succ, _)| *succ == target)
        });
        match existing {
            Some(slot) => {
                if let Some(data) = self.data_mut(source) {
                    data.successors[slot].1 = weight;
                }
            }
            None => {
                if let Some(data) = self.data_mut(source) {
                    data.successors.push((target, weight));
                }
                if let Some(data) = self.data_mut(target) {
                    data.predecessors.push(source);
                }
                self.live_edges += 1;
            }
        }
        (source, target)
    }

    /// Remove a node and every edge touching it. Returns false when the node
    /// was already gone.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let data = match self.nodes.get_mut(id.0).and_then(Option::take) {
            Some(data) => data,
            None => return false,
        };

        let mut removed_edges = data.successors.len();
        for &(succ, _) in &data.successors {
            if succ != id {
                if let Some(succ_data) = self.data_mut(succ) {
                    succ_data.predecessors.retain(|&pred| pred != id);
                }
            }
        }
        for &pred in &data.predecessors {
            if pred != id {
                removed_edges += 1;
                if let Some(pred_data) = self.data_mut(pred) {
                    pred_data.successors.retain(|&(succ, _)| succ != id);
                }
            }
        }

        self.index.remove(&data.label);
        self.live_nodes -= 1;
        self.live_edges -= removed_edges;
        true
    }

    fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.data(id).is_some()
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.data(id).map(|data| data.label.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Live node ids in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId(i))
    }

    /// Live labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().flatten().map(|data| data.label.as_str())
    }

    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.data(id)
            .into_iter()
            .flat_map(|data| data.successors.iter().map(|&(succ, _)| succ))
    }

    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.data(id)
            .into_iter()
            .flat_map(|data| data.predecessors.iter().copied())
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.data(id).map_or(0, |data| data.successors.len())
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.data(id).map_or(0, |data| data.predecessors.len())
    }

    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.data(from)?
            .successors
            .iter()
            .find(|(succ, _)| *succ == to)
            .map(|&(_, weight)| weight)
    }

    /// Every live edge as (source, target, weight), grouped by source
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, u32)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(i, slot)| {
            slot.iter().flat_map(move |data| {
                data.successors
                    .iter()
                    .map(move |&(succ, weight)| (NodeId(i), succ, weight))
            })
        })
    }

    /// Nodes without predecessors, in id order
    pub fn sources(&self) -> Vec<NodeId> {
        self.nodes().filter(|&id| self.in_degree(id) == 0).collect()
    }

    /// Nodes without successors, in id order
    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes().filter(|&id| self.out_degree(id) == 0).collect()
    }

    /// Labels of `path`, skipping ids that are no longer in the graph
    pub fn path_labels(&self, path: &[NodeId]) -> Vec<String> {
        path.iter()
            .filter_map(|&id| self.label(id).map(str::to_string))
            .collect()
    }
}

/// Build the de Bruijn graph: every k-mer becomes an edge from its prefix to
/// its suffix, weighted by its count.
pub fn build_graph(counts: &KmerCounts) -> DeBruijnGraph {
    let mut graph = DeBruijnGraph::new();
    for (kmer, count) in counts.iter() {
        if kmer.len() < 2 {
            continue;
        }
        graph.add_edge(&kmer[..kmer.len() - 1], &kmer[1..], count);
    }
    graph
}
