//! The finished lattice: atoms plus covering edges.

use petgraph::algo::{dijkstra, has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::error::LatticeError;
use crate::types::{Atom, AtomCollection};

/// Hasse diagram of the redundancy lattice.
///
/// Node `i` is the atom at enumeration position `i`. An edge `p -> w` means
/// `p` precedes `w` with nothing in between. The top is the unique node
/// without incoming edges (the atom of pure redundancy, `{1}{2}...{k}`);
/// the bottom is the unique node without outgoing edges (`{12...k}`).
#[derive(Debug, Clone)]
pub struct Lattice {
    inputs: usize,
    atoms: Vec<Atom>,
    graph: DiGraph<usize, ()>,
}

impl Lattice {
    pub(crate) fn new(atoms: AtomCollection, edges: &[(usize, usize)]) -> Self {
        let inputs = atoms.inputs();
        let atoms = atoms.into_atoms();
        let mut graph = DiGraph::with_capacity(atoms.len(), edges.len());
        for i in 0..atoms.len() {
            graph.add_node(i);
        }
        for &(p, w) in edges {
            graph.add_edge(NodeIndex::new(p), NodeIndex::new(w), ());
        }
        Self {
            inputs,
            atoms,
            graph,
        }
    }

    /// Number of source variables.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Atoms in enumeration order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the lattice has no nodes.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Enumeration index of an atom.
    pub fn position(&self, atom: &Atom) -> Option<usize> {
        self.atoms.iter().position(|a| a == atom)
    }

    /// Covering edges, sorted by (source, target).
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(p, w)| (p.index(), w.index()))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Number of covering edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `upper -> lower` is a covering edge.
    pub fn covers(&self, upper: usize, lower: usize) -> bool {
        upper < self.len()
            && lower < self.len()
            && self.graph.contains_edge(NodeIndex::new(upper), NodeIndex::new(lower))
    }

    /// Whether `to` can be reached from `from` along covering edges.
    ///
    /// Every node reaches itself.
    pub fn reaches(&self, from: usize, to: usize) -> bool {
        from < self.len()
            && to < self.len()
            && has_path_connecting(&self.graph, NodeIndex::new(from), NodeIndex::new(to), None)
    }

    /// Direct successors of `node`, sorted.
    pub fn successors(&self, node: usize) -> Vec<usize> {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Direct predecessors of `node`, sorted.
    pub fn predecessors(&self, node: usize) -> Vec<usize> {
        self.neighbors(node, Direction::Incoming)
    }

    fn neighbors(&self, node: usize, direction: Direction) -> Vec<usize> {
        if node >= self.len() {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(node), direction)
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of incoming covering edges.
    pub fn in_degree(&self, node: usize) -> usize {
        self.predecessors(node).len()
    }

    /// Number of outgoing covering edges.
    pub fn out_degree(&self, node: usize) -> usize {
        self.successors(node).len()
    }

    /// Nodes without incoming edges, in enumeration order.
    pub fn sources(&self) -> Vec<usize> {
        (0..self.len()).filter(|&n| self.in_degree(n) == 0).collect()
    }

    /// Nodes without outgoing edges, in enumeration order.
    pub fn sinks(&self) -> Vec<usize> {
        (0..self.len()).filter(|&n| self.out_degree(n) == 0).collect()
    }

    /// Nodes in a topological order of the covering relation.
    pub fn topological_order(&self) -> Result<Vec<usize>, LatticeError> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|n| n.index()).collect())
            .map_err(|cycle| {
                LatticeError::invariant(format!(
                    "covering relation has a cycle through node {}",
                    cycle.node_id().index()
                ))
            })
    }

    /// The unique top: first in topological order and the only source.
    pub fn top(&self) -> Result<usize, LatticeError> {
        let top = self
            .topological_order()?
            .first()
            .copied()
            .ok_or_else(|| LatticeError::invariant("empty lattice has no top"))?;
        let sources = self.sources();
        if sources != [top] {
            return Err(LatticeError::invariant(format!(
                "expected a unique top, found {} sources",
                sources.len()
            )));
        }
        Ok(top)
    }

    /// The unique bottom: the only sink.
    pub fn bottom(&self) -> Result<usize, LatticeError> {
        match self.sinks().as_slice() {
            [bottom] => Ok(*bottom),
            sinks => Err(LatticeError::invariant(format!(
                "expected a unique bottom, found {} sinks",
                sinks.len()
            ))),
        }
    }

    /// Covering-edge distance from the top to every node, by node index.
    pub fn distances_from_top(&self) -> Result<Vec<usize>, LatticeError> {
        let top = self.top()?;
        let reached = dijkstra(&self.graph, NodeIndex::new(top), None, |_| 1usize);

        (0..self.len())
            .map(|n| {
                reached.get(&NodeIndex::new(n)).copied().ok_or_else(|| {
                    LatticeError::invariant(format!(
                        "atom {} is not reachable from the top",
                        self.atoms[n]
                    ))
                })
            })
            .collect()
    }

    /// Canonical traversal order: distance from the top, ties by enumeration
    /// order.
    pub fn canonical_order(&self) -> Result<Vec<usize>, LatticeError> {
        Ok(order_by_distance(&self.distances_from_top()?))
    }

    /// Nodes grouped by distance from the top, each group in canonical order.
    pub fn levels(&self) -> Result<Vec<Vec<usize>>, LatticeError> {
        let distances = self.distances_from_top()?;
        let depth = distances.iter().copied().max().map_or(0, |d| d + 1);
        let mut levels = vec![Vec::new(); depth];
        for (n, d) in distances.into_iter().enumerate() {
            levels[d].push(n);
        }
        Ok(levels)
    }
}

/// Node indices sorted by distance, ties by index.
pub(crate) fn order_by_distance(distances: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..distances.len()).collect();
    order.sort_by_key(|&n| (distances[n], n));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::pid_sets;
    use crate::lattice::redundancy_lattice;

    fn lattice(k: usize) -> Lattice {
        redundancy_lattice(pid_sets(k).unwrap()).unwrap()
    }

    fn labels(lattice: &Lattice, nodes: &[usize]) -> Vec<String> {
        nodes.iter().map(|&n| lattice.atoms()[n].label()).collect()
    }

    #[test]
    fn test_top_and_bottom() {
        let l = lattice(3);
        assert_eq!(l.atoms()[l.top().unwrap()].label(), "{1}{2}{3}");
        assert_eq!(l.atoms()[l.bottom().unwrap()].label(), "{123}");
    }

    #[test]
    fn test_top_reaches_everything() {
        let l = lattice(3);
        let top = l.top().unwrap();
        for n in 0..l.len() {
            assert!(l.reaches(top, n));
        }
        assert!(!l.reaches(l.bottom().unwrap(), top));
    }

    #[test]
    fn test_canonical_order_two_inputs() {
        let l = lattice(2);
        let order = l.canonical_order().unwrap();
        assert_eq!(labels(&l, &order), vec!["{1}{2}", "{1}", "{2}", "{12}"]);
    }

    #[test]
    fn test_level_sizes() {
        let l = lattice(3);
        let sizes: Vec<usize> = l.levels().unwrap().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 3, 3, 4, 3, 3, 1]);
    }

    #[test]
    fn test_degrees() {
        let l = lattice(2);
        let top = l.top().unwrap();
        assert_eq!(l.in_degree(top), 0);
        assert_eq!(l.out_degree(top), 2);
        assert_eq!(l.successors(top), vec![0, 1]);
        assert_eq!(l.predecessors(l.bottom().unwrap()), vec![0, 1]);
        assert!(l.covers(top, 0));
        assert!(!l.covers(top, 2));
        assert!(l.successors(99).is_empty());
    }

    #[test]
    fn test_single_input() {
        let l = lattice(1);
        assert_eq!(l.len(), 1);
        assert_eq!(l.edge_count(), 0);
        assert_eq!(l.top().unwrap(), 0);
        assert_eq!(l.bottom().unwrap(), 0);
        assert_eq!(l.canonical_order().unwrap(), vec![0]);
    }

    #[test]
    fn test_missing_unique_top() {
        let atoms = pid_sets(2).unwrap();
        // Only {1} and {2}: two isolated nodes, no unique top.
        let partial = AtomCollection::new(2, atoms.atoms()[..2].to_vec()).unwrap();
        let l = redundancy_lattice(partial).unwrap();
        assert!(matches!(l.top(), Err(LatticeError::InvariantViolation { .. })));
        assert!(l.canonical_order().is_err());
    }

    #[test]
    fn test_order_by_distance_breaks_ties_by_index() {
        assert_eq!(order_by_distance(&[2, 0, 1, 1, 0]), vec![1, 4, 2, 3, 0]);
        assert!(order_by_distance(&[]).is_empty());
    }
}
