//! Core types for the redundancy lattice.

pub mod subset;
pub mod atom;

pub use subset::{SetLike, Subset};
pub use atom::{Atom, AtomCollection};
