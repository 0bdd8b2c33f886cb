//! # molview Core Library
//!
//! A parser and atom-type classification engine for LAMMPS-style molecular structure data files,
//! producing an immutable, queryable molecule model ready for visualization.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `Bond`, `MoleculeModel`), the
//!   chemistry reference data (element table, default color palette) and the section-aware
//!   structure-file tokenizer.
//!
//! - **[`engine`]: The Logic Core.** Resolves opaque numeric type identifiers to chemical elements
//!   through an ordered set of fallback rules, assembles the final model, and defines the parse and
//!   view configuration.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together: [`workflows::load`] turns
//!   raw text or a file into a `MoleculeModel`, and [`workflows::scene`] turns a model into a
//!   render-ready, centered scene.
//!
//! ```
//! use molview::workflows::load;
//!
//! let text = "Masses\n\n1 12.011 # C\n\nAtoms\n\n1 1 1 0.0 0.0 0.0 0.0\n2 1 1 0.0 10.0 0.0 0.0\n";
//! let model = load::parse_structure(text).unwrap();
//! assert_eq!(model.atoms().len(), 2);
//! assert_eq!(model.atom_type(1).unwrap().element, "C");
//! assert_eq!(model.center().x, 5.0);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
