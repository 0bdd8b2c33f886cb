//! # Engine Module
//!
//! The logic layer that turns raw records into a chemically meaningful model.
//!
//! ## Overview
//!
//! - [`classify`] - Resolves each atom type id to an element, label and mass through an ordered
//!   set of rules (declared mass and comment, mass-based inference, id-as-atomic-number fallback)
//! - [`assembler`] - Counts type populations, finalizes the bounding box and builds the
//!   immutable [`MoleculeModel`](crate::core::models::molecule::MoleculeModel)
//! - [`config`] - Parse and view configuration with validated builders
//! - [`error`] - The errors this layer reports
//!
//! The engine holds no state between calls; every function is a pure transformation of its input.

pub mod assembler;
pub mod classify;
pub mod config;
pub mod error;
