//! All-pairs longest chains via Bellman-Ford.
//!
//! Every edge of the dense order relation weighs `-1`, so the shortest path
//! between two atoms is the longest chain of precedence steps between them.
//! A pair whose shortest path weighs exactly `-1` has no intermediate atom:
//! it is a covering pair.

use petgraph::algo::bellman_ford;
use petgraph::graph::DiGraph;

use crate::error::LatticeError;

/// Weight of a single precedence step.
pub const STEP_WEIGHT: f64 = -1.0;

/// Longest chain length between every ordered pair of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestChains {
    /// `lengths[p][w]` is `None` when `w` is unreachable from `p`.
    lengths: Vec<Vec<Option<usize>>>,
}

impl LongestChains {
    /// Run Bellman-Ford from every node of `graph`.
    ///
    /// Edges must carry [`STEP_WEIGHT`]. A negative cycle means the relation
    /// was not antisymmetric and is reported as an invariant violation.
    pub fn compute<N>(graph: &DiGraph<N, f64>) -> Result<Self, LatticeError> {
        let mut lengths = Vec::with_capacity(graph.node_count());

        for source in graph.node_indices() {
            let paths = bellman_ford(graph, source).map_err(|_| {
                LatticeError::invariant(format!(
                    "negative cycle reachable from node {}: order relation is not antisymmetric",
                    source.index()
                ))
            })?;
            lengths.push(paths.distances.iter().map(|d| chain_length(*d)).collect());
        }

        Ok(Self { lengths })
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the graph had no nodes.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Longest chain from `from` to `to`, if reachable.
    pub fn length(&self, from: usize, to: usize) -> Option<usize> {
        self.lengths.get(from).and_then(|row| row.get(to).copied().flatten())
    }

    /// Pairs joined by a single step with no longer alternative.
    pub fn covering_pairs(&self) -> Vec<(usize, usize)> {
        self.lengths
            .iter()
            .enumerate()
            .flat_map(|(p, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, len)| **len == Some(1))
                    .map(move |(w, _)| (p, w))
            })
            .collect()
    }
}

fn chain_length(distance: f64) -> Option<usize> {
    if !distance.is_finite() {
        return None;
    }
    let steps = (-distance).round();
    (steps >= 0.0).then_some(steps as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn chain_with_shortcut() -> DiGraph<(), f64> {
        // 0 -> 1 -> 2, plus the shortcut 0 -> 2
        let mut graph = DiGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, STEP_WEIGHT);
        graph.add_edge(b, c, STEP_WEIGHT);
        graph.add_edge(a, c, STEP_WEIGHT);
        graph
    }

    #[test]
    fn test_longest_chain_lengths() {
        let chains = LongestChains::compute(&chain_with_shortcut()).unwrap();
        assert_eq!(chains.length(0, 0), Some(0));
        assert_eq!(chains.length(0, 1), Some(1));
        assert_eq!(chains.length(0, 2), Some(2));
        assert_eq!(chains.length(2, 0), None);
    }

    #[test]
    fn test_shortcut_is_not_covering() {
        let chains = LongestChains::compute(&chain_with_shortcut()).unwrap();
        assert_eq!(chains.covering_pairs(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_isolated_nodes() {
        let mut graph: DiGraph<(), f64> = DiGraph::new();
        graph.add_node(());
        graph.add_node(());
        let chains = LongestChains::compute(&graph).unwrap();
        assert_eq!(chains.len(), 2);
        assert!(chains.covering_pairs().is_empty());
    }

    #[test]
    fn test_negative_cycle_is_invariant_violation() {
        let mut graph = chain_with_shortcut();
        graph.add_edge(NodeIndex::new(2), NodeIndex::new(0), STEP_WEIGHT);
        let result = LongestChains::compute(&graph);
        assert!(matches!(result, Err(LatticeError::InvariantViolation { .. })));
    }
}
