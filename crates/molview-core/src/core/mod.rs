//! # Core Module
//!
//! The fundamental building blocks of molview: the molecule data models, the chemistry reference
//! data consulted during classification and rendering, and the structure-file reader.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, atom-type metadata and the assembled model
//! - **Chemistry Reference Data** ([`chem`]) - Element table, RGB colors and the default palette
//! - **File I/O** ([`io`]) - The section-aware LAMMPS data file tokenizer and record parser
//!
//! Everything in this layer is free of hidden state: the reader folds a document into an owned
//! record set, and the models are plain values.

pub mod chem;
pub mod io;
pub mod models;
