//! Atom enumeration.
//!
//! The atoms of the redundancy lattice for `k` inputs are the antichains of
//! non-empty subsets of `{1..k}`. Two enumerators produce them in the same
//! order:
//!
//! 1. [`BruteForceEnumerator`]: filter the double powerset, keeping the
//!    collections without a dominated member
//! 2. [`ConstructiveEnumerator`]: grow antichains depth-first, then sort
//!    into double-powerset order
//!
//! Both sit behind [`AtomEnumerator`], so the lattice builder never depends
//! on how atoms were found.

pub mod dominance;
pub mod brute_force;
pub mod constructive;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use brute_force::BruteForceEnumerator;
pub use constructive::ConstructiveEnumerator;
pub use dominance::{contains_subsets, exclude_subsets};

use crate::error::LatticeError;
use crate::types::{AtomCollection, Subset};

/// Known redundancy-lattice sizes, indexed by `k - 1`.
///
/// These are the Dedekind numbers minus the empty and full antichains.
pub const KNOWN_ATOM_COUNTS: [usize; 5] = [1, 4, 18, 166, 7579];

/// Expected atom count for `k` inputs, when known.
pub fn known_atom_count(inputs: usize) -> Option<usize> {
    inputs
        .checked_sub(1)
        .and_then(|i| KNOWN_ATOM_COUNTS.get(i).copied())
}

/// All non-empty subsets of `items`, by increasing size and then by input
/// order within each size.
///
/// `powerset(&[1, 2])` yields `[1]`, `[2]`, `[1, 2]`. An empty input yields
/// nothing. The iterator borrows `items` and can be recreated at will.
pub fn powerset<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..=items.len()).flat_map(move |size| items.iter().cloned().combinations(size))
}

/// Non-empty subsets of `{1..inputs}` in canonical order.
pub fn index_powerset(inputs: usize) -> Vec<Subset> {
    let indices: Vec<usize> = (1..=inputs).collect();
    powerset(&indices).map(Subset::new).collect()
}

/// Strategy for producing the atoms of a lattice.
pub trait AtomEnumerator {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Enumerate all atoms for `inputs` source variables.
    fn enumerate(&self, inputs: usize) -> Result<AtomCollection, LatticeError>;
}

/// Selects an [`AtomEnumerator`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// Filter the double powerset.
    #[default]
    BruteForce,
    /// Depth-first antichain growth.
    Constructive,
}

impl EnumerationStrategy {
    /// Parse strategy from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "brute_force" | "brute-force" | "bruteforce" => Some(Self::BruteForce),
            "constructive" => Some(Self::Constructive),
            _ => None,
        }
    }

    /// The enumerator for this strategy.
    pub fn enumerator(&self) -> Box<dyn AtomEnumerator> {
        match self {
            Self::BruteForce => Box::new(BruteForceEnumerator),
            Self::Constructive => Box::new(ConstructiveEnumerator),
        }
    }
}

impl std::fmt::Display for EnumerationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute_force"),
            Self::Constructive => write!(f, "constructive"),
        }
    }
}

/// All atoms for `k` inputs, by brute force.
pub fn pid_sets(inputs: usize) -> Result<AtomCollection, LatticeError> {
    BruteForceEnumerator.enumerate(inputs)
}

pub(crate) fn check_inputs(inputs: usize) -> Result<(), LatticeError> {
    if inputs < 1 {
        return Err(LatticeError::invalid("number of inputs must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powerset() {
        let subsets: Vec<Vec<i32>> = powerset(&[1, 2]).collect();
        assert_eq!(subsets, vec![vec![1], vec![2], vec![1, 2]]);
    }

    #[test]
    fn test_powerset_order_and_size() {
        let subsets: Vec<Vec<char>> = powerset(&['a', 'b', 'c']).collect();
        assert_eq!(subsets.len(), 7);
        assert_eq!(subsets[3], vec!['a', 'b']);
        assert_eq!(subsets[5], vec!['b', 'c']);
        assert_eq!(subsets[6], vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_powerset_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(powerset(&empty).count(), 0);
    }

    #[test]
    fn test_powerset_restartable() {
        let items = [3, 1, 2];
        let first: Vec<_> = powerset(&items).collect();
        let second: Vec<_> = powerset(&items).collect();
        assert_eq!(first, second);
        // Input order is kept, not sorted.
        assert_eq!(first[0], vec![3]);
    }

    #[test]
    fn test_known_atom_count() {
        assert_eq!(known_atom_count(0), None);
        assert_eq!(known_atom_count(3), Some(18));
        assert_eq!(known_atom_count(6), None);
    }

    #[test]
    fn test_pid_sets_sizes() {
        assert_eq!(pid_sets(1).unwrap().len(), 1);
        assert_eq!(pid_sets(2).unwrap().len(), 4);
        assert_eq!(pid_sets(3).unwrap().len(), 18);
    }

    #[test]
    fn test_pid_sets_rejects_zero() {
        assert!(matches!(pid_sets(0), Err(LatticeError::InvalidInput { .. })));
    }

    #[test]
    fn test_strategies_agree() {
        for k in 1..=3 {
            let brute = EnumerationStrategy::BruteForce.enumerator().enumerate(k).unwrap();
            let constructive = EnumerationStrategy::Constructive.enumerator().enumerate(k).unwrap();
            assert_eq!(brute, constructive, "k = {}", k);
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(EnumerationStrategy::from_str("Constructive"), Some(EnumerationStrategy::Constructive));
        assert_eq!(EnumerationStrategy::from_str("brute-force"), Some(EnumerationStrategy::BruteForce));
        assert_eq!(EnumerationStrategy::from_str("greedy"), None);
    }
}
