//! Chemistry reference data consulted while classifying atom types and preparing a scene.
//!
//! - [`elements`] - The ordered element reference table and its mass/number/symbol lookups
//! - [`palette`] - Default CPK-style colors keyed by atomic number
//! - [`color`] - The `#RRGGBB` color type shared by the palette and the view configuration

pub mod color;
pub mod elements;
pub mod palette;
