//! Reachability, ancestor search and simple-path enumeration over a
//! [`DeBruijnGraph`]. All traversals keep a visited set, so cycles are fine.
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// True when `to` can be reached from `from` along directed edges.
/// A node always reaches itself.
pub fn has_path(graph: &DeBruijnGraph, from: NodeId, to: NodeId) -> bool {
    if !graph.contains(from) || !graph.contains(to) {
        return false;
    }
    if from == to {
        return true;
    }

    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        for succ in graph.successors(node) {
            if succ == to {
                return true;
            }
            if visited.insert(succ) {
                queue.push_back(succ);
            }
        }
    }
    false
}

/// Every node that reaches `node` (itself included), paired with the length
/// of the shortest directed path to `node`, in BFS discovery order.
pub fn ancestor_distances(graph: &DeBruijnGraph, node: NodeId) -> Vec<(NodeId, usize)> {
    ancestors_avoiding(graph, node, None)
}

/// Backward BFS from `node` that never enters `avoid`. Empty when `node` is
/// missing or is `avoid` itself.
fn ancestors_avoiding(
    graph: &DeBruijnGraph,
    node: NodeId,
    avoid: Option<NodeId>,
) -> Vec<(NodeId, usize)> {
    if !graph.contains(node) || avoid == Some(node) {
        return Vec::new();
    }

    let mut order = vec![(node, 0)];
    let mut visited = AHashSet::new();
    visited.insert(node);
    if let Some(avoid) = avoid {
        visited.insert(avoid);
    }
    let mut cursor = 0;

    while cursor < order.len() {
        let (current, dist) = order[cursor];
        cursor += 1;
        for pred in graph.predecessors(current) {
            if visited.insert(pred) {
                order.push((pred, dist + 1));
            }
        }
    }
    order
}

/// Nearest node from which both `a` and `b` are reachable.
///
/// Candidates are the intersection of both ancestor sets (each node counts as
/// its own ancestor). The winner minimises the summed distance to `a` and
/// `b`; ties go to the candidate discovered first by the backward BFS from `a`.
pub fn lowest_common_ancestor(graph: &DeBruijnGraph, a: NodeId, b: NodeId) -> Option<NodeId> {
    nearest_common_ancestor(graph, a, b, None)
}

/// [`lowest_common_ancestor`] restricted to ancestry that does not pass
/// through `convergence`, the node `a` and `b` both feed.
///
/// On cyclic graphs the convergence node can otherwise reach its own
/// predecessors and shadow the divergence point upstream of them.
pub fn divergence_point(
    graph: &DeBruijnGraph,
    a: NodeId,
    b: NodeId,
    convergence: NodeId,
) -> Option<NodeId> {
    nearest_common_ancestor(graph, a, b, Some(convergence))
}

fn nearest_common_ancestor(
    graph: &DeBruijnGraph,
    a: NodeId,
    b: NodeId,
    avoid: Option<NodeId>,
) -> Option<NodeId> {
    let from_b: AHashMap<NodeId, usize> = ancestors_avoiding(graph, b, avoid).into_iter().collect();
    if from_b.is_empty() {
        return None;
    }

    ancestors_avoiding(graph, a, avoid)
        .into_iter()
        .filter_map(|(node, da)| from_b.get(&node).map(|&db| (node, da + db)))
        .min_by_key(|&(_, dist)| dist)
        .map(|(node, _)| node)
}

/// Lazy depth-first enumeration of every simple path from a source to a
/// target, following successors in insertion order.
///
/// The number of simple paths can grow exponentially with the number of
/// reconvergent branches, and nothing here bounds it.
pub struct SimplePaths<'g> {
    graph: &'g DeBruijnGraph,
    target: NodeId,
    path: Vec<NodeId>,
    on_path: AHashSet<NodeId>,
    stack: Vec<std::vec::IntoIter<NodeId>>,
}

impl<'g> SimplePaths<'g> {
    fn new(graph: &'g DeBruijnGraph, source: NodeId, target: NodeId) -> Self {
        let mut paths = SimplePaths {
            graph,
            target,
            path: Vec::new(),
            on_path: AHashSet::new(),
            stack: Vec::new(),
        };
        if source != target && graph.contains(source) && graph.contains(target) {
            paths.path.push(source);
            paths.on_path.insert(source);
            paths.stack.push(paths.successors_of(source));
        }
        paths
    }

    fn successors_of(&self, node: NodeId) -> std::vec::IntoIter<NodeId> {
        self.graph.successors(node).collect::<Vec<_>>().into_iter()
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                None => {
                    self.stack.pop();
                    if let Some(node) = self.path.pop() {
                        self.on_path.remove(&node);
                    }
                }
                Some(child) if self.on_path.contains(&child) => {}
                Some(child) if child == self.target => {
                    let mut found = self.path.clone();
                    found.push(child);
                    return Some(found);
                }
                Some(child) => {
                    self.path.push(child);
                    self.on_path.insert(child);
                    let next = self.successors_of(child);
                    self.stack.push(next);
                }
            }
        }
        None
    }
}

/// Simple paths from `source` to `target`; empty when they are the same
/// node or either one is missing.
pub fn all_simple_paths(graph: &DeBruijnGraph, source: NodeId, target: NodeId) -> SimplePaths<'_> {
    SimplePaths::new(graph, source, target)
}
