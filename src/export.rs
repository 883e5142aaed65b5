//! Stable serialized form of a labelled lattice.
//!
//! The schema is deliberately flat: atom labels as nodes, `(source, target)`
//! label pairs as edges, plus the canonical order and levels. `lattice_hash`
//! covers nodes and edges so a consumer can check it was handed the lattice
//! it expects.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::error::LatticeError;
use crate::lattice::LabeledLattice;
use crate::LATTICE_SCHEMA_VERSION;

/// Serialized lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeExport {
    /// Schema version.
    pub schema_version: String,
    /// Number of source variables.
    pub inputs: usize,
    /// Atom labels in enumeration order.
    pub nodes: Vec<String>,
    /// Covering edges as (source label, target label).
    pub edges: Vec<(String, String)>,
    /// Atom labels in canonical order.
    pub order: Vec<String>,
    /// Atom labels grouped by distance from the top.
    pub levels: Vec<Vec<String>>,
    /// xxh64 of (nodes, edges).
    pub lattice_hash: String,
}

impl LatticeExport {
    /// Export a labelled lattice.
    pub fn from_lattice(lattice: &LabeledLattice) -> Result<Self, LatticeError> {
        let nodes = lattice.labels().to_vec();
        let edges: Vec<(String, String)> = lattice
            .labeled_edges()
            .into_iter()
            .map(|(p, w)| (p.to_string(), w.to_string()))
            .collect();
        let order = lattice
            .ordered_labels()
            .into_iter()
            .map(str::to_string)
            .collect();
        let levels = lattice
            .levels()
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .filter_map(|n| lattice.label(n).map(str::to_string))
                    .collect()
            })
            .collect();
        let lattice_hash = compute_hash(&nodes, &edges)?;

        Ok(Self {
            schema_version: LATTICE_SCHEMA_VERSION.to_string(),
            inputs: lattice.inputs(),
            nodes,
            edges,
            order,
            levels,
            lattice_hash,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LatticeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, LatticeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that `lattice_hash` matches the nodes and edges.
    pub fn verify(&self) -> Result<bool, LatticeError> {
        Ok(compute_hash(&self.nodes, &self.edges)? == self.lattice_hash)
    }
}

impl LabeledLattice {
    /// Export this lattice.
    pub fn export(&self) -> Result<LatticeExport, LatticeError> {
        LatticeExport::from_lattice(self)
    }
}

fn compute_hash(nodes: &[String], edges: &[(String, String)]) -> Result<String, LatticeError> {
    Ok(canonical_hash_hex(&(nodes, edges))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;

    fn export(k: usize) -> LatticeExport {
        LabeledLattice::compute(&LatticeConfig::for_inputs(k))
            .unwrap()
            .export()
            .unwrap()
    }

    #[test]
    fn test_export_two_inputs() {
        let exported = export(2);
        assert_eq!(exported.schema_version, LATTICE_SCHEMA_VERSION);
        assert_eq!(exported.nodes, vec!["{1}", "{2}", "{12}", "{1}{2}"]);
        assert_eq!(
            exported.edges,
            vec![
                ("{1}".to_string(), "{12}".to_string()),
                ("{2}".to_string(), "{12}".to_string()),
                ("{1}{2}".to_string(), "{1}".to_string()),
                ("{1}{2}".to_string(), "{2}".to_string()),
            ]
        );
        assert_eq!(exported.levels, vec![vec!["{1}{2}"], vec!["{1}", "{2}"], vec!["{12}"]]);
        assert!(exported.verify().unwrap());
    }

    #[test]
    fn test_json_round_trip_preserves_hash() {
        let exported = export(3);
        let parsed = LatticeExport::from_json(&exported.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, exported);
        assert!(parsed.verify().unwrap());
    }

    #[test]
    fn test_tampering_detected() {
        let mut exported = export(2);
        exported.edges.pop();
        assert!(!exported.verify().unwrap());
    }

    #[test]
    fn test_hash_differs_between_inputs() {
        assert_ne!(export(2).lattice_hash, export(3).lattice_hash);
    }
}
