//! Labelled lattice: the full pipeline output.
//!
//! ```text
//! k → enumerate atoms → dense relation → covering edges → labels + order
//! ```
//!
//! A [`LabeledLattice`] is what rendering layers consume: every atom with its
//! label, the covering edges, and the canonical traversal order.

use std::collections::BTreeMap;

use super::builder::LatticeBuilder;
use super::graph::{order_by_distance, Lattice};
use crate::config::LatticeConfig;
use crate::enumerate::known_atom_count;
use crate::error::LatticeError;
use crate::label::pretty_labels_map;
use crate::types::Atom;

/// A lattice with labels, canonical order and levels resolved.
#[derive(Debug, Clone)]
pub struct LabeledLattice {
    lattice: Lattice,
    /// Label of each node, by node index.
    labels: Vec<String>,
    /// Node indices in canonical order.
    order: Vec<usize>,
    /// Distance from the top, by node index.
    distances: Vec<usize>,
}

impl LabeledLattice {
    /// Run the full pipeline for `config`.
    pub fn compute(config: &LatticeConfig) -> Result<Self, LatticeError> {
        config.validate()?;

        let enumerator = config.strategy.enumerator();
        let atoms = enumerator.enumerate(config.inputs)?;

        if let Some(expected) = known_atom_count(config.inputs) {
            if atoms.len() != expected {
                return Err(LatticeError::invariant(format!(
                    "{} enumerator produced {} atoms for {} inputs, expected {}",
                    enumerator.name(),
                    atoms.len(),
                    config.inputs,
                    expected
                )));
            }
        }

        let lattice = LatticeBuilder::new()
            .with_tie_break(config.tie_break)
            .build(atoms)?;
        let labeled = Self::from_lattice(lattice)?;

        tracing::info!(
            inputs = config.inputs,
            strategy = enumerator.name(),
            atom_count = labeled.len(),
            covering_edges = labeled.lattice.edge_count(),
            levels = labeled.depth(),
            "redundancy lattice computed"
        );

        Ok(labeled)
    }

    /// Resolve labels and canonical order for an existing lattice.
    ///
    /// Fails if the lattice has no unique top and bottom, or if two atoms
    /// share a label.
    pub fn from_lattice(lattice: Lattice) -> Result<Self, LatticeError> {
        lattice.bottom()?;
        let distances = lattice.distances_from_top()?;

        let label_map = pretty_labels_map(lattice.atoms().iter())?;
        let labels = lattice
            .atoms()
            .iter()
            .map(|atom| {
                label_map.get(atom).cloned().ok_or_else(|| {
                    LatticeError::invariant(format!("atom {} has no label", atom))
                })
            })
            .collect::<Result<Vec<String>, LatticeError>>()?;

        let order = order_by_distance(&distances);

        Ok(Self {
            lattice,
            labels,
            order,
            distances,
        })
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of source variables.
    pub fn inputs(&self) -> usize {
        self.lattice.inputs()
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    /// Whether the lattice has no atoms.
    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    /// Label of a node.
    pub fn label(&self, node: usize) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    /// Labels by node index (enumeration order).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Node index carrying `label`.
    pub fn node_for_label(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Atom carrying `label`.
    pub fn atom_for_label(&self, label: &str) -> Option<&Atom> {
        self.node_for_label(label).map(|n| &self.lattice.atoms()[n])
    }

    /// Atom-to-label mapping.
    pub fn label_map(&self) -> BTreeMap<&Atom, &str> {
        self.lattice
            .atoms()
            .iter()
            .zip(self.labels.iter())
            .map(|(atom, label)| (atom, label.as_str()))
            .collect()
    }

    /// Node indices in canonical order.
    pub fn canonical_order(&self) -> &[usize] {
        &self.order
    }

    /// Labels in canonical order.
    pub fn ordered_labels(&self) -> Vec<&str> {
        self.order.iter().map(|&n| self.labels[n].as_str()).collect()
    }

    /// Distance from the top of a node.
    pub fn level_of(&self, node: usize) -> Option<usize> {
        self.distances.get(node).copied()
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.distances.iter().copied().max().map_or(0, |d| d + 1)
    }

    /// Node indices grouped by level, each group in canonical order.
    pub fn levels(&self) -> Vec<Vec<usize>> {
        let mut levels = vec![Vec::new(); self.depth()];
        for &n in &self.order {
            levels[self.distances[n]].push(n);
        }
        levels
    }

    /// Covering edges as (source label, target label), sorted by node index.
    pub fn labeled_edges(&self) -> Vec<(&str, &str)> {
        self.lattice
            .edges()
            .into_iter()
            .map(|(p, w)| (self.labels[p].as_str(), self.labels[w].as_str()))
            .collect()
    }

    /// Label of the top atom.
    pub fn top_label(&self) -> Option<&str> {
        self.order.first().map(|&n| self.labels[n].as_str())
    }

    /// Label of the bottom atom.
    pub fn bottom_label(&self) -> Option<&str> {
        self.lattice
            .bottom()
            .ok()
            .map(|n| self.labels[n].as_str())
    }
}
