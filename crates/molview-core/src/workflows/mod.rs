//! # Workflows Module
//!
//! The user-facing entry points of the library.
//!
//! - [`load`] - Parses a structure document (string, reader or file) into a `MoleculeModel`
//! - [`scene`] - Converts a model into a centered, colored, render-ready `Scene`

pub mod load;
pub mod scene;
