//! Subset-domination filtering over collections of sets.
//!
//! Members are compared by position with set semantics. A member that is
//! set-equal to an earlier member counts as dominated by it, so duplicates
//! are detected by [`contains_subsets`] and collapsed to their first
//! occurrence by [`exclude_subsets`].

use crate::types::SetLike;

/// Whether any member is a subset of another member at a different position.
pub fn contains_subsets<S: SetLike>(members: &[S]) -> bool {
    members.iter().enumerate().any(|(i, si)| {
        members
            .iter()
            .enumerate()
            .any(|(j, sj)| i != j && sj.is_subset_of(si))
    })
}

/// Members that are not dominated by any other member.
///
/// A member is dropped when it is a proper subset of another member, or when
/// it is set-equal to a member at an earlier position. Relative order of the
/// kept members is preserved.
pub fn exclude_subsets<S: SetLike + Clone>(members: &[S]) -> Vec<S> {
    members
        .iter()
        .enumerate()
        .filter(|(i, si)| !is_dominated(members, *i, si))
        .map(|(_, si)| si.clone())
        .collect()
}

fn is_dominated<S: SetLike>(members: &[S], i: usize, si: &S) -> bool {
    members.iter().enumerate().any(|(j, sj)| {
        if i == j || !si.is_subset_of(sj) {
            return false;
        }
        // Set-equal members: the earliest one survives.
        !sj.is_subset_of(si) || j < i
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Atom, Subset};

    fn pos_set() -> Vec<Vec<u32>> {
        vec![vec![1, 2], vec![2, 3], vec![2]]
    }

    fn neg_set() -> Vec<Vec<u32>> {
        vec![vec![1, 2], vec![2, 3]]
    }

    #[test]
    fn test_contains_subsets_pos() {
        assert!(contains_subsets(&pos_set()));
    }

    #[test]
    fn test_contains_subsets_neg() {
        assert!(!contains_subsets(&neg_set()));
    }

    #[test]
    fn test_exclude_subsets_pos() {
        assert_eq!(exclude_subsets(&pos_set()), neg_set());
    }

    #[test]
    fn test_exclude_subsets_neg() {
        assert_eq!(exclude_subsets(&neg_set()), neg_set());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let members = vec![vec![2, 1], vec![3], vec![1, 2]];
        assert!(contains_subsets(&members));
        assert_eq!(exclude_subsets(&members), vec![vec![2, 1], vec![3]]);
    }

    #[test]
    fn test_set_semantics_ignore_order() {
        let members = vec![vec![3, 2], vec![2]];
        assert_eq!(exclude_subsets(&members), vec![vec![3, 2]]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let empty: Vec<Vec<u32>> = Vec::new();
        assert!(!contains_subsets(&empty));
        assert!(exclude_subsets(&empty).is_empty());

        let single = vec![Subset::from([1, 2])];
        assert!(!contains_subsets(&single));
        assert_eq!(exclude_subsets(&single), single);
    }

    #[test]
    fn test_set_systems_as_members() {
        // An atom is dominated when its members all appear in another atom.
        let single = Atom::new(vec![Subset::from([1])]).unwrap();
        let pair = Atom::new(vec![Subset::from([1]), Subset::from([2])]).unwrap();
        let other = Atom::new(vec![Subset::from([1, 2])]).unwrap();

        let members = vec![single, pair.clone(), other.clone()];
        assert!(contains_subsets(&members));
        assert_eq!(exclude_subsets(&members), vec![pair, other]);
    }
}
