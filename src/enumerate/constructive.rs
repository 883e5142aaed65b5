//! Depth-first antichain growth.

use super::{check_inputs, index_powerset, AtomEnumerator};
use crate::error::LatticeError;
use crate::types::{Atom, AtomCollection, Subset};

/// Largest `k` the constructive enumerator accepts.
pub const CONSTRUCTIVE_MAX_INPUTS: usize = 5;

/// Enumerates atoms by extending antichains one incomparable subset at a
/// time, visiting only valid collections.
///
/// Results are sorted into the same order the brute-force filter produces,
/// so the two enumerators are interchangeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructiveEnumerator;

impl AtomEnumerator for ConstructiveEnumerator {
    fn name(&self) -> &'static str {
        "constructive"
    }

    fn enumerate(&self, inputs: usize) -> Result<AtomCollection, LatticeError> {
        check_inputs(inputs)?;
        if inputs > CONSTRUCTIVE_MAX_INPUTS {
            return Err(LatticeError::TooManyInputs {
                inputs,
                max: CONSTRUCTIVE_MAX_INPUTS,
            });
        }

        let universe = index_powerset(inputs);
        let mut found: Vec<Vec<usize>> = Vec::new();
        grow(&universe, 0, &mut Vec::new(), &mut found);

        // Double-powerset order: member count, then member positions.
        found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let atoms: Vec<Atom> = found
            .into_iter()
            .map(|positions| {
                Atom::from_antichain(positions.into_iter().map(|p| universe[p].clone()).collect())
            })
            .collect();

        tracing::debug!(
            inputs = inputs,
            atom_count = atoms.len(),
            "constructive enumeration complete"
        );

        AtomCollection::new(inputs, atoms)
    }
}

fn grow(universe: &[Subset], start: usize, chosen: &mut Vec<usize>, found: &mut Vec<Vec<usize>>) {
    for next in start..universe.len() {
        let candidate = &universe[next];
        if chosen.iter().all(|&c| universe[c].is_incomparable(candidate)) {
            chosen.push(next);
            found.push(chosen.clone());
            grow(universe, next + 1, chosen, found);
            chosen.pop();
        }
    }
}
