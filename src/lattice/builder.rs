//! Lattice construction.
//!
//! ## Algorithm
//!
//! 1. Test the redundancy preorder on every pair of distinct atoms and add a
//!    `-1` weighted edge in the direction that holds
//! 2. Run all-pairs Bellman-Ford on that dense relation
//! 3. Keep exactly the pairs whose shortest path weighs `-1`: no atom sits
//!    between them, so they are the covering relation
//!
//! The dense relation has O(n²) edges; the result is the Hasse diagram.

use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use super::graph::Lattice;
use super::paths::{LongestChains, STEP_WEIGHT};
use crate::error::LatticeError;
use crate::order::{compare, Comparison};
use crate::types::{Atom, AtomCollection};

/// Largest `k` the builder accepts.
///
/// All-pairs Bellman-Ford over the dense relation is O(n³) in the atom
/// count: 166 atoms at `k = 4`, 7579 at `k = 5`.
pub const LATTICE_MAX_INPUTS: usize = 4;

/// How to orient a pair of distinct atoms that precede each other.
///
/// Distinct antichains never do, so this only matters for hand-built
/// collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Fail with an invariant violation.
    #[default]
    Reject,
    /// Orient from the earlier atom to the later one.
    EnumerationOrder,
}

impl TieBreak {
    /// Parse tie-break rule from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "enumeration_order" | "enumeration-order" => Some(Self::EnumerationOrder),
            _ => None,
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::EnumerationOrder => write!(f, "enumeration_order"),
        }
    }
}

/// Builds a [`Lattice`] from an atom collection.
#[derive(Debug, Clone, Default)]
pub struct LatticeBuilder {
    tie_break: TieBreak,
}

impl LatticeBuilder {
    /// Create a builder that rejects mutually preceding atoms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Build the dense order relation over `atoms`.
    ///
    /// Node `i` carries the enumeration index `i`.
    pub fn dense_relation(&self, atoms: &[Atom]) -> Result<DiGraph<usize, f64>, LatticeError> {
        let mut graph = DiGraph::with_capacity(atoms.len(), atoms.len());
        for i in 0..atoms.len() {
            graph.add_node(i);
        }

        for (i, j) in (0..atoms.len()).tuple_combinations() {
            let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
            match compare(atoms[i].subsets(), atoms[j].subsets()) {
                Comparison::Precedes => {
                    graph.add_edge(a, b, STEP_WEIGHT);
                }
                Comparison::Follows => {
                    graph.add_edge(b, a, STEP_WEIGHT);
                }
                Comparison::Equivalent => match self.tie_break {
                    TieBreak::Reject => {
                        return Err(LatticeError::invariant(format!(
                            "atoms {} and {} precede each other",
                            atoms[i], atoms[j]
                        )));
                    }
                    TieBreak::EnumerationOrder => {
                        tracing::warn!(
                            first = %atoms[i],
                            second = %atoms[j],
                            "mutually preceding atoms oriented by enumeration order"
                        );
                        graph.add_edge(a, b, STEP_WEIGHT);
                    }
                },
                Comparison::Incomparable => {}
            }
        }

        Ok(graph)
    }

    /// Build the lattice: dense relation, then covering-edge extraction.
    ///
    /// Collections over more than [`LATTICE_MAX_INPUTS`] inputs are rejected.
    pub fn build(&self, atoms: AtomCollection) -> Result<Lattice, LatticeError> {
        if atoms.inputs() > LATTICE_MAX_INPUTS {
            return Err(LatticeError::TooManyInputs {
                inputs: atoms.inputs(),
                max: LATTICE_MAX_INPUTS,
            });
        }

        let dense = self.dense_relation(atoms.atoms())?;
        let chains = LongestChains::compute(&dense)?;
        let edges = chains.covering_pairs();

        tracing::debug!(
            inputs = atoms.inputs(),
            atom_count = atoms.len(),
            dense_edges = dense.edge_count(),
            covering_edges = edges.len(),
            "covering relation extracted"
        );

        Ok(Lattice::new(atoms, &edges))
    }
}

/// Build the redundancy lattice with the default tie-break rule.
pub fn redundancy_lattice(atoms: AtomCollection) -> Result<Lattice, LatticeError> {
    LatticeBuilder::new().build(atoms)
}
