//! # Core Models Module
//!
//! Data structures describing a parsed molecular structure.
//!
//! ## Key Components
//!
//! - [`atom`] - A single particle: identity, type, charge and position
//! - [`topology`] - Bonds between atoms, referenced by atom id
//! - [`atom_type`] - Metadata derived for each atom type (element, label, mass, population)
//! - [`molecule`] - The assembled, immutable molecule model together with its bounding box
//!
//! Integer columns that could not be read from the source document are stored as `None`, and
//! unreadable floating-point columns as `NaN`. The models never reject such values: the reader is
//! best-effort and keeps what it can.

pub mod atom;
pub mod atom_type;
pub mod molecule;
pub mod topology;
