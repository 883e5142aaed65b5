//! Externally supplied decomposition values.
//!
//! The core never computes information quantities. Callers supply one value
//! (in bits) per atom label, already filtered on any grouping key of their
//! own, and get the values back in canonical lattice order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::LatticeError;
use crate::lattice::LabeledLattice;

/// Decomposition values keyed by atom label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PidValues(BTreeMap<String, f64>);

impl PidValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a label.
    pub fn insert(&mut self, label: impl Into<String>, bits: f64) -> Option<f64> {
        self.0.insert(label.into(), bits)
    }

    /// Value for a label.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no values are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Parse values from a JSON object of label to bits.
    pub fn from_json(json: &str) -> Result<Self, LatticeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PidValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(label, bits)| (label.into(), bits)).collect())
    }
}

/// One atom's value, positioned on the lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedValue {
    /// Atom label.
    pub label: String,
    /// Position in canonical order.
    pub position: usize,
    /// Distance from the top.
    pub level: usize,
    /// Value in bits.
    pub bits: f64,
}

/// Align `values` with the canonical order of `lattice`.
///
/// Every atom must have a value and every value must name an atom.
pub fn align_values(
    lattice: &LabeledLattice,
    values: &PidValues,
) -> Result<Vec<AlignedValue>, LatticeError> {
    if let Some(unknown) = values.labels().find(|l| lattice.node_for_label(l).is_none()) {
        return Err(LatticeError::UnknownAtom {
            label: unknown.to_string(),
        });
    }

    lattice
        .canonical_order()
        .iter()
        .enumerate()
        .map(|(position, &node)| -> Result<AlignedValue, LatticeError> {
            let label = lattice.label(node).ok_or_else(|| {
                LatticeError::invariant(format!("node {} has no label", node))
            })?;
            let bits = values.get(label).ok_or_else(|| LatticeError::MissingValue {
                label: label.to_string(),
            })?;
            Ok(AlignedValue {
                label: label.to_string(),
                position,
                level: lattice.level_of(node).ok_or_else(|| {
                    LatticeError::invariant(format!("atom {} has no level", label))
                })?,
                bits,
            })
        })
        .collect()
}

impl LabeledLattice {
    /// Align decomposition values with this lattice's canonical order.
    pub fn align_values(&self, values: &PidValues) -> Result<Vec<AlignedValue>, LatticeError> {
        align_values(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;

    fn two_input_lattice() -> LabeledLattice {
        LabeledLattice::compute(&LatticeConfig::for_inputs(2)).unwrap()
    }

    fn xor_values() -> PidValues {
        // XOR: all information is synergistic.
        vec![("{1}{2}", 0.0), ("{1}", 0.0), ("{2}", 0.0), ("{12}", 1.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_align_in_canonical_order() {
        let aligned = two_input_lattice().align_values(&xor_values()).unwrap();
        let labels: Vec<&str> = aligned.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["{1}{2}", "{1}", "{2}", "{12}"]);
        assert_eq!(aligned[3].bits, 1.0);
        assert_eq!(aligned[3].level, 2);
        assert_eq!(aligned[3].position, 3);
    }

    #[test]
    fn test_missing_value() {
        let mut values = xor_values();
        values.0.remove("{2}");
        let result = two_input_lattice().align_values(&values);
        assert!(matches!(result, Err(LatticeError::MissingValue { label }) if label == "{2}"));
    }

    #[test]
    fn test_unknown_label() {
        let mut values = xor_values();
        values.insert("{3}", 0.5);
        let result = two_input_lattice().align_values(&values);
        assert!(matches!(result, Err(LatticeError::UnknownAtom { label }) if label == "{3}"));
    }

    #[test]
    fn test_from_json() {
        let values = PidValues::from_json(r#"{"{1}{2}": 0.25, "{1}": 0.0, "{2}": 0.0, "{12}": 0.75}"#).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values.get("{12}"), Some(0.75));
        assert_eq!(values.total(), 1.0);
        assert!(PidValues::from_json("[1, 2]").is_err());
    }
}
