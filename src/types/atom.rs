//! PID atoms: antichains of subsets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::subset::{SetLike, Subset};
use crate::error::LatticeError;
use crate::label::pretty_label;

/// A node of the redundancy lattice.
///
/// An atom is a non-empty collection of subsets in which no member is a
/// subset of another. Members are held in canonical [`Subset`] order, so two
/// atoms built from the same members in any order compare equal and hash
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(Vec<Subset>);

impl Atom {
    /// Create an atom, validating the antichain invariant.
    pub fn new(subsets: impl IntoIterator<Item = Subset>) -> Result<Self, LatticeError> {
        let subsets: Vec<Subset> = subsets.into_iter().collect();
        if subsets.is_empty() {
            return Err(LatticeError::invalid("atom must contain at least one subset"));
        }
        if subsets.iter().any(Subset::is_empty) {
            return Err(LatticeError::invalid("atom members must be non-empty subsets"));
        }
        if crate::enumerate::contains_subsets(&subsets) {
            return Err(LatticeError::invalid(format!(
                "not an antichain: {}",
                render(&subsets)
            )));
        }
        Ok(Self::from_antichain(subsets))
    }

    /// Wrap members already known to form an antichain.
    pub(crate) fn from_antichain(mut subsets: Vec<Subset>) -> Self {
        subsets.sort();
        Self(subsets)
    }

    /// Members in canonical order.
    pub fn subsets(&self) -> &[Subset] {
        &self.0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated atom.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest source index mentioned by any member.
    pub fn max_index(&self) -> Option<usize> {
        self.0.iter().filter_map(Subset::max_index).max()
    }

    /// Whether `self` precedes `other` on the redundancy lattice.
    pub fn precedes(&self, other: &Self) -> bool {
        crate::order::partial_order(&self.0, &other.0)
    }

    /// Canonical display label, e.g. `{2}{13}`.
    pub fn label(&self) -> String {
        pretty_label(&self.to_string())
    }
}

impl SetLike for Atom {
    fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|s| other.0.contains(s))
    }
}

fn render(subsets: &[Subset]) -> String {
    let mut out = String::from("(");
    for (i, s) in subsets.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&s.to_string());
    }
    if subsets.len() == 1 {
        out.push(',');
    }
    out.push(')');
    out
}

/// Renders the nested tuple structure, e.g. `((2,), (1, 3))`.
impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(&self.0))
    }
}

/// The deduplicated set of atoms for a given number of inputs.
///
/// Atoms keep their enumeration order; that order breaks ties in the
/// lattice's canonical traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomCollection {
    inputs: usize,
    atoms: Vec<Atom>,
}

impl AtomCollection {
    /// Create a collection, rejecting duplicates and atoms outside `1..=inputs`.
    pub fn new(inputs: usize, atoms: Vec<Atom>) -> Result<Self, LatticeError> {
        let mut seen = BTreeSet::new();
        for atom in &atoms {
            if atom.subsets().iter().any(|s| s.indices().first() == Some(&0)) {
                return Err(LatticeError::invalid(format!(
                    "source indices start at 1: {}",
                    atom
                )));
            }
            if atom.max_index().is_some_and(|m| m > inputs) {
                return Err(LatticeError::invalid(format!(
                    "atom {} exceeds {} inputs",
                    atom, inputs
                )));
            }
            if !seen.insert(atom) {
                return Err(LatticeError::invalid(format!("duplicate atom: {}", atom)));
            }
        }
        Ok(Self { inputs, atoms })
    }

    /// Number of source variables.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Atoms in enumeration order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Position of an atom in enumeration order.
    pub fn position(&self, atom: &Atom) -> Option<usize> {
        self.atoms.iter().position(|a| a == atom)
    }

    /// Consume into the underlying vector.
    pub fn into_atoms(self) -> Vec<Atom> {
        self.atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(members: &[&[usize]]) -> Atom {
        Atom::new(members.iter().map(|m| Subset::new(m.iter().copied()))).unwrap()
    }

    #[test]
    fn test_identity_ignores_member_order() {
        let a = atom(&[&[1, 3], &[2]]);
        let b = atom(&[&[2], &[3, 1]]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "((2,), (1, 3))");
    }

    #[test]
    fn test_rejects_non_antichain() {
        let result = Atom::new(vec![Subset::from([1, 2]), Subset::from([2])]);
        assert!(matches!(result, Err(LatticeError::InvalidInput { .. })));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Atom::new(Vec::new()).is_err());
        assert!(Atom::new(vec![Subset::new(Vec::new())]).is_err());
    }

    #[test]
    fn test_display_singleton() {
        assert_eq!(atom(&[&[1]]).to_string(), "((1,),)");
        assert_eq!(atom(&[&[1, 2, 3]]).to_string(), "((1, 2, 3),)");
    }

    #[test]
    fn test_label() {
        assert_eq!(atom(&[&[2], &[1, 3]]).label(), "{2}{13}");
        assert_eq!(atom(&[&[1]]).label(), "{1}");
    }

    #[test]
    fn test_collection_rejects_duplicates() {
        let a = atom(&[&[1]]);
        let result = AtomCollection::new(2, vec![a.clone(), a]);
        assert!(result.is_err());
    }

    #[test]
    fn test_collection_rejects_out_of_range() {
        assert!(AtomCollection::new(2, vec![atom(&[&[3]])]).is_err());
        assert!(AtomCollection::new(2, vec![atom(&[&[0]])]).is_err());
        assert!(AtomCollection::new(2, vec![atom(&[&[2]])]).is_ok());
    }
}
