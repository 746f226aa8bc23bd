use ahash::AHashSet;
use rand::Rng;
use tracing::debug;

use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// A candidate path with the scores used to pick between competitors
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPath {
    pub nodes: Vec<NodeId>,
    /// Number of nodes on the path
    pub length: usize,
    /// Mean weight of the path's consecutive edges
    pub weight: f64,
}

impl ScoredPath {
    pub fn new(graph: &DeBruijnGraph, nodes: Vec<NodeId>) -> Self {
        let weight = path_average_weight(graph, &nodes);
        Self {
            length: nodes.len(),
            weight,
            nodes,
        }
    }
}

/// Outcome of [`select_best_path`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the kept path
    pub winner: usize,
    /// Number of nodes removed from the graph
    pub removed: usize,
}

/// Mean weight of the edges joining consecutive nodes of `path`.
///
/// Edges between non-adjacent path nodes are ignored. Returns 0.0 when the
/// path has no edge.
pub fn path_average_weight(graph: &DeBruijnGraph, path: &[NodeId]) -> f64 {
    let mut total = 0u64;
    let mut count = 0usize;
    for pair in path.windows(2) {
        if let Some(weight) = graph.edge_weight(pair[0], pair[1]) {
            total += weight as u64;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Score every path with its length and average weight
pub fn score_paths(graph: &DeBruijnGraph, paths: Vec<Vec<NodeId>>) -> Vec<ScoredPath> {
    paths
        .into_iter()
        .map(|nodes| ScoredPath::new(graph, nodes))
        .collect()
}

/// Remove `paths` from the graph: interior nodes always, first/last node
/// when the matching flag is set. Nodes in `keep` and nodes already gone are
/// left alone. Returns how many nodes were removed.
pub fn remove_paths<'p, I>(
    graph: &mut DeBruijnGraph,
    paths: I,
    delete_entry_node: bool,
    delete_sink_node: bool,
    keep: &AHashSet<NodeId>,
) -> usize
where
    I: IntoIterator<Item = &'p [NodeId]>,
{
    let mut removed = 0;
    for path in paths {
        let last = path.len().saturating_sub(1);
        for (i, &node) in path.iter().enumerate() {
            let doomed = if i == 0 {
                delete_entry_node
            } else if i == last {
                delete_sink_node
            } else {
                true
            };
            if doomed && !keep.contains(&node) && graph.remove_node(node) {
                removed += 1;
            }
        }
    }
    removed
}

/// Index of the best path: highest average weight, then most nodes, then a
/// uniform draw from `rng` among whatever is still tied. `rng` is only
/// consulted when a draw is needed.
pub fn choose_winner<R: Rng + ?Sized>(paths: &[ScoredPath], rng: &mut R) -> Option<usize> {
    let best_weight = paths
        .iter()
        .map(|p| p.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let heaviest: Vec<usize> = (0..paths.len())
        .filter(|&i| paths[i].weight == best_weight)
        .collect();

    let best_length = heaviest.iter().map(|&i| paths[i].length).max()?;
    let tied: Vec<usize> = heaviest
        .into_iter()
        .filter(|&i| paths[i].length == best_length)
        .collect();

    match tied.len() {
        0 => None,
        1 => Some(tied[0]),
        n => Some(tied[rng.gen_range(0..n)]),
    }
}

/// Keep the best of competing paths and delete the others.
///
/// Losers lose their interior nodes, plus their entry and/or sink node per
/// the flags. Nodes on the winning path are never removed. Returns `None`
/// only when `paths` is empty.
pub fn select_best_path<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    paths: &[ScoredPath],
    delete_entry_node: bool,
    delete_sink_node: bool,
    rng: &mut R,
) -> Option<Selection> {
    let winner = choose_winner(paths, rng)?;
    let keep: AHashSet<NodeId> = paths[winner].nodes.iter().copied().collect();

    let losers = paths
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != winner)
        .map(|(_, p)| p.nodes.as_slice());
    let removed = remove_paths(graph, losers, delete_entry_node, delete_sink_node, &keep);

    debug!(
        "Kept path {} of {} (weight {:.2}, {} nodes), removed {} nodes",
        winner,
        paths.len(),
        paths[winner].weight,
        paths[winner].length,
        removed
    );
    Some(Selection { winner, removed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(graph: &DeBruijnGraph, labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|l| graph.node_id(l).unwrap()).collect()
    }

    #[test]
    fn test_path_average_weight_consecutive_only() {
        let mut graph = DeBruijnGraph::new();
        graph.add_edge("A", "B", 2);
        graph.add_edge("B", "C", 4);
        // Shortcut between non-adjacent path nodes must not count
        graph.add_edge("A", "C", 100);

        let path = ids(&graph, &["A", "B", "C"]);
        assert_eq!(path_average_weight(&graph, &path), 3.0);
        assert_eq!(path_average_weight(&graph, &path[..1]), 0.0);
    }

    #[test]
    fn test_choose_winner_by_weight_then_length() {
        let mut rng = StdRng::seed_from_u64(9001);
        let path = |length, weight| ScoredPath {
            nodes: Vec::new(),
            length,
            weight,
        };

        assert_eq!(choose_winner(&[path(3, 1.0), path(2, 5.0)], &mut rng), Some(1));
        assert_eq!(choose_winner(&[path(4, 5.0), path(2, 5.0)], &mut rng), Some(0));
        assert_eq!(choose_winner(&[], &mut rng), None);
    }

    #[test]
    fn test_choose_winner_random_tie_is_reproducible() {
        let paths: Vec<ScoredPath> = (0..5)
            .map(|_| ScoredPath {
                nodes: Vec::new(),
                length: 3,
                weight: 2.0,
            })
            .collect();

        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| choose_winner(&paths, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
        assert!(draws(42).iter().all(|&i| i < 5));
    }

    #[test]
    fn test_select_best_path_removes_losers_interior() {
        let mut graph = DeBruijnGraph::new();
        graph.add_edge("S", "A", 5);
        graph.add_edge("A", "T", 5);
        graph.add_edge("S", "B", 1);
        graph.add_edge("B", "T", 1);

        let paths = score_paths(
            &graph,
            vec![ids(&graph, &["S", "B", "T"]), ids(&graph, &["S", "A", "T"])],
        );
        let mut rng = StdRng::seed_from_u64(1);
        let selection = select_best_path(&mut graph, &paths, false, false, &mut rng).unwrap();

        assert_eq!(
            selection,
            Selection {
                winner: 1,
                removed: 1
            }
        );
        assert!(graph.node_id("B").is_none());
        assert!(graph.node_id("S").is_some());
        assert!(graph.node_id("T").is_some());
    }

    #[test]
    fn test_select_best_path_never_removes_winner_nodes() {
        let mut graph = DeBruijnGraph::new();
        graph.add_edge("S", "A", 4);
        graph.add_edge("A", "B", 4);
        graph.add_edge("B", "T", 4);
        graph.add_edge("A", "T", 1);

        let paths = score_paths(
            &graph,
            vec![ids(&graph, &["S", "A", "B", "T"]), ids(&graph, &["S", "A", "T"])],
        );
        let mut rng = StdRng::seed_from_u64(1);
        let selection = select_best_path(&mut graph, &paths, true, true, &mut rng).unwrap();

        assert_eq!(selection.winner, 0);
        assert_eq!(selection.removed, 0);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_select_best_path_deletes_entry_node() {
        let mut graph = DeBruijnGraph::new();
        graph.add_edge("P", "S", 1);
        graph.add_edge("Q", "S", 6);

        let paths = score_paths(
            &graph,
            vec![ids(&graph, &["P", "S"]), ids(&graph, &["Q", "S"])],
        );
        let mut rng = StdRng::seed_from_u64(1);
        select_best_path(&mut graph, &paths, true, false, &mut rng).unwrap();

        assert!(graph.node_id("P").is_none());
        assert!(graph.node_id("Q").is_some());
        assert!(graph.node_id("S").is_some());
    }
}
