use rand::Rng;
use tracing::debug;

use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::graph::path::{score_paths, select_best_path};
use crate::graph::traverse::{all_simple_paths, divergence_point};

/// Totals for one [`simplify_bubbles`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleReport {
    pub bubbles_collapsed: usize,
    pub nodes_removed: usize,
}

/// Keep the best of the simple paths between `ancestor` and `descendant`
/// and drop the interior of the others. Both endpoints survive.
///
/// Returns the number of removed nodes; fewer than two paths is a no-op.
/// Every simple path between the endpoints is materialised first.
pub fn solve_bubble<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    ancestor: NodeId,
    descendant: NodeId,
    rng: &mut R,
) -> usize {
    let candidates: Vec<Vec<NodeId>> = all_simple_paths(graph, ancestor, descendant).collect();
    if candidates.len() < 2 {
        return 0;
    }

    let scored = score_paths(graph, candidates);
    select_best_path(graph, &scored, false, false, rng).map_or(0, |selection| selection.removed)
}

/// Scan nodes in id order and collapse the first bubble that actually
/// shrinks the graph. `None` once no such bubble is left.
///
/// The divergence point of a predecessor pair is searched without walking
/// back through the node itself.
fn collapse_next_bubble<R: Rng + ?Sized>(
    graph: &mut DeBruijnGraph,
    rng: &mut R,
) -> Option<(NodeId, NodeId, usize)> {
    let snapshot: Vec<NodeId> = graph.nodes().collect();

    for node in snapshot {
        let preds: Vec<NodeId> = graph.predecessors(node).collect();
        if preds.len() < 2 {
            continue;
        }

        for i in 0..preds.len() {
            for j in i + 1..preds.len() {
                let Some(ancestor) = divergence_point(graph, preds[i], preds[j], node) else {
                    continue;
                };
                let removed = solve_bubble(graph, ancestor, node, rng);
                if removed > 0 {
                    return Some((ancestor, node, removed));
                }
            }
        }
    }
    None
}

/// Collapse bubbles until none is left.
///
/// After every collapse the scan starts over from the first node, since
/// removing nodes can create or dissolve bubbles anywhere. Each restart
/// follows a strict drop in node count, which bounds the number of passes.
pub fn simplify_bubbles<R: Rng + ?Sized>(graph: &mut DeBruijnGraph, rng: &mut R) -> BubbleReport {
    let mut report = BubbleReport::default();

    while let Some((ancestor, convergence, removed)) = collapse_next_bubble(graph, rng) {
        debug!(
            "Collapsed bubble {} -> {}: {} nodes removed",
            ancestor, convergence, removed
        );
        report.bubbles_collapsed += 1;
        report.nodes_removed += removed;
    }
    report
}
