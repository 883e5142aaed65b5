//! # pid-lattice
//!
//! Deterministic redundancy lattice construction for Partial Information
//! Decomposition.
//!
//! The lattice answers one question:
//!
//! > Given `k` source variables, which PID atoms exist and how are they ordered?
//!
//! ## Core Contract
//!
//! 1. Enumerate the atoms: antichains of non-empty subsets of `{1..k}`
//! 2. Order them by the Williams–Beer redundancy preorder
//! 3. Reduce the order to its covering relation (the Hasse diagram)
//! 4. Label each atom (`{1}{23}`) and fix a canonical traversal order
//!
//! ## Architecture
//!
//! ```text
//! k → AtomEnumerator → AtomCollection → LatticeBuilder → Lattice → LabeledLattice
//!          ↓                                  ↓                          ↓
//!   dominance filter                  order predicate +          labels, levels,
//!                                   all-pairs Bellman-Ford     export, value alignment
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same `k` + same configuration → identical atoms, edges and labels
//! - Atom identity is canonical (members sorted by size, then indices)
//! - Canonical order is distance from the top, ties by enumeration order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod enumerate;
pub mod order;
pub mod lattice;
pub mod label;
pub mod values;
pub mod export;
pub mod config;
pub mod canonical;

// Re-exports
pub use error::LatticeError;
pub use types::{Atom, AtomCollection, SetLike, Subset};
pub use enumerate::{
    contains_subsets, exclude_subsets, known_atom_count, pid_sets, powerset,
    AtomEnumerator, BruteForceEnumerator, ConstructiveEnumerator, EnumerationStrategy,
};
pub use order::{compare, partial_order, Comparison};
pub use lattice::{
    redundancy_lattice, LabeledLattice, Lattice, LatticeBuilder, LongestChains, TieBreak,
    LATTICE_MAX_INPUTS,
};
pub use label::{pretty_label, pretty_labels_map};
pub use values::{align_values, AlignedValue, PidValues};
pub use export::LatticeExport;
pub use config::LatticeConfig;
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};

/// Schema version for exported lattices.
/// Increment on breaking changes to [`LatticeExport`].
pub const LATTICE_SCHEMA_VERSION: &str = "1.0.0";
