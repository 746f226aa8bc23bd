use rand::Rng;
use tracing::debug;

use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::graph::path::{score_paths, select_best_path};

/// Totals for one tip pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TipReport {
    /// Junctions where competing branches were resolved
    pub junctions: usize,
    pub nodes_removed: usize,
}

/// Clip entry tips hanging off `starting_nodes`.
///
/// For every successor of a start node that has several predecessors, each
/// predecessor forms a two-node path into it; the best one is kept and the
/// losing predecessors are removed. Every start node is handled, and ids
/// removed earlier in the pass are skipped.
pub fn solve_entry_tips<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    starting_nodes: &[NodeId],
    rng: &mut R,
) -> TipReport {
    let mut report = TipReport::default();

    for &start in starting_nodes {
        if !graph.contains(start) {
            continue;
        }
        let successors: Vec<NodeId> = graph.successors(start).collect();
        for succ in successors {
            let preds: Vec<NodeId> = graph.predecessors(succ).collect();
            if preds.len() < 2 {
                continue;
            }

            let paths = preds.into_iter().map(|pred| vec![pred, succ]).collect();
            let scored = score_paths(graph, paths);
            if let Some(selection) = select_best_path(graph, &scored, true, false, rng) {
                debug!(
                    "Entry junction {}: kept {}, removed {} nodes",
                    succ, scored[selection.winner].nodes[0], selection.removed
                );
                report.junctions += 1;
                report.nodes_removed += selection.removed;
            }
        }
    }
    report
}

/// Clip exit tips hanging off `ending_nodes`; mirror of [`solve_entry_tips`].
pub fn solve_out_tips<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    ending_nodes: &[NodeId],
    rng: &mut R,
) -> TipReport {
    let mut report = TipReport::default();

    for &end in ending_nodes {
        if !graph.contains(end) {
            continue;
        }
        let predecessors: Vec<NodeId> = graph.predecessors(end).collect();
        for pred in predecessors {
            let succs: Vec<NodeId> = graph.successors(pred).collect();
            if succs.len() < 2 {
                continue;
            }

            let paths = succs.into_iter().map(|succ| vec![pred, succ]).collect();
            let scored = score_paths(graph, paths);
            if let Some(selection) = select_best_path(graph, &scored, false, true, rng) {
                debug!(
                    "Exit junction {}: kept {}, removed {} nodes",
                    pred, scored[selection.winner].nodes[1], selection.removed
                );
                report.junctions += 1;
                report.nodes_removed += selection.removed;
            }
        }
    }
    report
}

/// Entry pass over the current sources, then exit pass over the sinks left
/// after it.
///
/// Source and sink counts do not grow when tips hang directly off their
/// junction. A clipped node with its own upstream chain leaves that chain
/// behind, and its first node can become an isolated source and sink.
pub fn resolve_tips<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    rng: &mut R,
) -> (TipReport, TipReport) {
    let starting_nodes = graph.sources();
    let entry = solve_entry_tips(graph, &starting_nodes, rng);
    let ending_nodes = graph.sinks();
    let exit = solve_out_tips(graph, &ending_nodes, rng);
    (entry, exit)
}
