use crate::core::chem::color::Color;
use crate::core::io::lammps::BondPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0x151515);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {value} (must be a finite number greater than zero)")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("Unknown material style: '{0}'. Expected 'realistic', 'plastic' or 'toon'.")]
    UnknownMaterial(String),
}

/// Options that change how a structure file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Drop `Bonds` lines with unreadable numeric columns instead of keeping them with sentinels.
    pub strict_bonds: bool,
}

impl ParseConfig {
    pub fn strict() -> Self {
        Self { strict_bonds: true }
    }

    pub fn bond_policy(&self) -> BondPolicy {
        if self.strict_bonds {
            BondPolicy::Strict
        } else {
            BondPolicy::Lenient
        }
    }
}

/// The surface shading style requested for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStyle {
    #[default]
    Realistic,
    Plastic,
    Toon,
}

impl FromStr for MaterialStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "realistic" => Ok(Self::Realistic),
            "plastic" => Ok(Self::Plastic),
            "toon" => Ok(Self::Toon),
            _ => Err(ConfigError::UnknownMaterial(s.to_string())),
        }
    }
}

impl fmt::Display for MaterialStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Realistic => "realistic",
                Self::Plastic => "plastic",
                Self::Toon => "toon",
            }
        )
    }
}

/// Display parameters for turning a model into a scene.
///
/// None of these settings influence parsing or classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Multiplier applied to the base atom radius.
    pub atom_scale: f64,
    /// Multiplier applied to the base bond radius.
    pub bond_scale: f64,
    pub material: MaterialStyle,
    pub background: Color,
    pub show_bonds: bool,
    /// Per-type color overrides, keyed by atom type id.
    pub custom_colors: BTreeMap<i64, Color>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            atom_scale: 1.0,
            bond_scale: 1.0,
            material: MaterialStyle::default(),
            background: DEFAULT_BACKGROUND,
            show_bonds: true,
            custom_colors: BTreeMap::new(),
        }
    }
}

#[derive(Default)]
pub struct ViewConfigBuilder {
    atom_scale: Option<f64>,
    bond_scale: Option<f64>,
    material: Option<MaterialStyle>,
    background: Option<Color>,
    show_bonds: Option<bool>,
    custom_colors: BTreeMap<i64, Color>,
}

impl ViewConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_scale(mut self, scale: f64) -> Self {
        self.atom_scale = Some(scale);
        self
    }
    pub fn bond_scale(mut self, scale: f64) -> Self {
        self.bond_scale = Some(scale);
        self
    }
    pub fn material(mut self, material: MaterialStyle) -> Self {
        self.material = Some(material);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn show_bonds(mut self, show: bool) -> Self {
        self.show_bonds = Some(show);
        self
    }
    pub fn custom_color(mut self, type_id: i64, color: Color) -> Self {
        self.custom_colors.insert(type_id, color);
        self
    }
    pub fn custom_colors(mut self, colors: impl IntoIterator<Item = (i64, Color)>) -> Self {
        self.custom_colors.extend(colors);
        self
    }

    pub fn build(self) -> Result<ViewConfig, ConfigError> {
        let defaults = ViewConfig::default();
        Ok(ViewConfig {
            atom_scale: validate_scale("atom_scale", self.atom_scale.unwrap_or(defaults.atom_scale))?,
            bond_scale: validate_scale("bond_scale", self.bond_scale.unwrap_or(defaults.bond_scale))?,
            material: self.material.unwrap_or(defaults.material),
            background: self.background.unwrap_or(defaults.background),
            show_bonds: self.show_bonds.unwrap_or(defaults.show_bonds),
            custom_colors: self.custom_colors,
        })
    }
}

fn validate_scale(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale { name, value })
    }
}
