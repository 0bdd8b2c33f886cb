//! Provides input functionality for molecular structure files.
//!
//! The [`traits::StructureFile`] trait gives every reader the same string, buffered-reader and
//! path entry points. [`lammps`] implements it for LAMMPS-style data files.

pub mod lammps;
pub mod traits;
