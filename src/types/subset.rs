//! Subsets of source indices.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Set-semantics inclusion test.
///
/// Implementors compare by membership only: element order and repetition
/// inside a member never matter.
pub trait SetLike {
    /// Whether every element of `self` is also in `other`.
    fn is_subset_of(&self, other: &Self) -> bool;

    /// Whether `self` and `other` hold the same elements.
    fn set_eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl<T: Ord> SetLike for [T] {
    fn is_subset_of(&self, other: &Self) -> bool {
        let other: BTreeSet<&T> = other.iter().collect();
        self.iter().all(|x| other.contains(x))
    }
}

impl<T: Ord> SetLike for Vec<T> {
    fn is_subset_of(&self, other: &Self) -> bool {
        self.as_slice().is_subset_of(other.as_slice())
    }
}

impl<S: SetLike + ?Sized> SetLike for &S {
    fn is_subset_of(&self, other: &Self) -> bool {
        (**self).is_subset_of(*other)
    }
}

/// A duplicate-free set of source indices, stored sorted ascending.
///
/// Ordering is canonical: smaller subsets first, then lexicographic. This is
/// the order in which the powerset of `{1..k}` is enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subset(Vec<usize>);

impl Subset {
    /// Create a subset from any collection of indices (sorted and deduplicated).
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    /// Indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the subset has no indices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Whether neither subset contains the other.
    pub fn is_incomparable(&self, other: &Self) -> bool {
        !self.is_subset_of(other) && !other.is_subset_of(self)
    }
}

impl SetLike for Subset {
    // Both sides are sorted, so a single merge pass suffices.
    fn is_subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut rest = other.0.iter();
        self.0.iter().all(|x| rest.any(|y| y == x))
    }
}

impl From<Vec<usize>> for Subset {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl<const N: usize> From<[usize; N]> for Subset {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices)
    }
}

impl AsRef<[usize]> for Subset {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

// Canonical ordering: size, then indices
impl PartialOrd for Subset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subset {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => self.0.cmp(&other.0),
            ord => ord,
        }
    }
}

/// Renders like a tuple: `(2,)` for a singleton, `(1, 3)` otherwise.
impl std::fmt::Display for Subset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
