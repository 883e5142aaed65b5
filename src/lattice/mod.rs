//! Redundancy lattice construction.
//!
//! 1. **Builder**: dense order relation over all atom pairs
//! 2. **Paths**: all-pairs longest chains, keeping only single-step pairs
//! 3. **Graph**: the resulting Hasse diagram with top, bottom and levels
//! 4. **Labeled**: labels and canonical order for rendering layers

pub mod builder;
pub mod paths;
pub mod graph;
pub mod labeled;

// Re-exports
pub use builder::{redundancy_lattice, LatticeBuilder, TieBreak, LATTICE_MAX_INPUTS};
pub use paths::{LongestChains, STEP_WEIGHT};
pub use graph::Lattice;
pub use labeled::LabeledLattice;
