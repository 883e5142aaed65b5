//! Double-powerset filtering.

use super::{check_inputs, contains_subsets, index_powerset, powerset, AtomEnumerator};
use crate::error::LatticeError;
use crate::types::{Atom, AtomCollection, Subset};

/// Largest `k` the brute-force filter accepts.
///
/// The double powerset has `2^(2^k - 1) - 1` members: 32767 at `k = 4`,
/// over two billion at `k = 5`.
pub const BRUTE_FORCE_MAX_INPUTS: usize = 4;

/// Enumerates atoms by testing every collection of non-empty subsets.
///
/// Output follows double-powerset order: collections with fewer members
/// first, then by member positions in the canonical subset order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceEnumerator;

impl AtomEnumerator for BruteForceEnumerator {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn enumerate(&self, inputs: usize) -> Result<AtomCollection, LatticeError> {
        check_inputs(inputs)?;
        if inputs > BRUTE_FORCE_MAX_INPUTS {
            return Err(LatticeError::TooManyInputs {
                inputs,
                max: BRUTE_FORCE_MAX_INPUTS,
            });
        }

        let universe = index_powerset(inputs);
        let members: Vec<&Subset> = universe.iter().collect();

        let mut candidates = 0usize;
        let atoms: Vec<Atom> = powerset(&members)
            .inspect(|_| candidates += 1)
            .filter(|collection| !contains_subsets(collection))
            .map(|collection| Atom::from_antichain(collection.into_iter().cloned().collect()))
            .collect();

        tracing::debug!(
            inputs = inputs,
            candidates = candidates,
            atom_count = atoms.len(),
            "brute-force enumeration complete"
        );

        AtomCollection::new(inputs, atoms)
    }
}
