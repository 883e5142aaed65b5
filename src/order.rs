//! The redundancy preorder.
//!
//! `alpha` precedes `beta` when every member of `beta` contains some member
//! of `alpha`: whatever `beta` can express redundantly, `alpha` already
//! does with a smaller source set.

use crate::types::SetLike;

/// Whether `alpha` precedes `beta` on the redundancy lattice.
///
/// True when every `b` in `beta` has an `a` in `alpha` with `a ⊆ b`.
/// Vacuously true for an empty `beta`.
pub fn partial_order<S: SetLike>(alpha: &[S], beta: &[S]) -> bool {
    beta.iter().all(|b| alpha.iter().any(|a| a.is_subset_of(b)))
}

/// Outcome of testing two atoms in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// First precedes second only.
    Precedes,
    /// Second precedes first only.
    Follows,
    /// Each precedes the other.
    Equivalent,
    /// Neither precedes the other.
    Incomparable,
}

/// Compare two set systems under the redundancy preorder.
///
/// The forward direction is tested first.
pub fn compare<S: SetLike>(alpha: &[S], beta: &[S]) -> Comparison {
    match (partial_order(alpha, beta), partial_order(beta, alpha)) {
        (true, true) => Comparison::Equivalent,
        (true, false) => Comparison::Precedes,
        (false, true) => Comparison::Follows,
        (false, false) => Comparison::Incomparable,
    }
}
