use crate::core::chem::color::Color;
use crate::core::chem::elements::ElementTable;
use crate::core::chem::palette::{DEFAULT_ATOM_COLOR, default_color};
use crate::core::models::molecule::MoleculeModel;
use crate::engine::config::{MaterialStyle, ViewConfig};
use nalgebra::Point3;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Atom sphere radius before scaling, in document units.
pub const BASE_ATOM_RADIUS: f64 = 0.45;
/// Bond cylinder radius before scaling, in document units.
pub const BASE_BOND_RADIUS: f64 = 0.12;
/// Bonds longer than this are not drawn.
pub const MAX_BOND_LENGTH: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneAtom {
    pub id: Option<i64>,
    pub type_id: Option<i64>,
    /// Position relative to the model center.
    pub position: Point3<f64>,
    pub radius: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneBond {
    pub id: Option<i64>,
    pub atom1_id: i64,
    pub atom2_id: i64,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub midpoint: Point3<f64>,
    pub length: f64,
    pub radius: f64,
}

/// One row of the per-type color legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub type_id: i64,
    pub element: String,
    pub label: String,
    pub mass: f64,
    pub count: usize,
    pub color: Color,
}

/// A render-ready view of a model: centered at the origin, colored and sized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub background: Color,
    pub material: MaterialStyle,
    pub legend: Vec<LegendEntry>,
    pub atoms: Vec<SceneAtom>,
    pub bonds: Vec<SceneBond>,
}

/// Resolves the display color of every atom type in the model.
///
/// A color override in `view` wins; otherwise the default palette color is used.
pub fn resolve_type_colors(model: &MoleculeModel, view: &ViewConfig) -> BTreeMap<i64, Color> {
    let table = ElementTable::standard();
    model
        .atom_types()
        .values()
        .map(|info| {
            let color = view
                .custom_colors
                .get(&info.id)
                .copied()
                .unwrap_or_else(|| default_color(info, &table));
            (info.id, color)
        })
        .collect()
}

/// Builds the scene for a model.
///
/// Every atom is translated by the model center. Bonds are only emitted when `show_bonds` is set,
/// and a bond is skipped if either endpoint id is unreadable or names no atom, or if it is longer
/// than [`MAX_BOND_LENGTH`].
#[instrument(skip_all, name = "scene_build")]
pub fn build(model: &MoleculeModel, view: &ViewConfig) -> Scene {
    let colors = resolve_type_colors(model, view);
    let center = model.center().coords;

    let legend = model
        .atom_types()
        .values()
        .map(|info| LegendEntry {
            type_id: info.id,
            element: info.element.clone(),
            label: info.label.clone(),
            mass: info.mass,
            count: info.count,
            color: colors.get(&info.id).copied().unwrap_or(DEFAULT_ATOM_COLOR),
        })
        .collect();

    let atom_radius = BASE_ATOM_RADIUS * view.atom_scale;
    let atoms = model
        .atoms()
        .iter()
        .map(|atom| SceneAtom {
            id: atom.id,
            type_id: atom.type_id,
            position: atom.position - center,
            radius: atom_radius,
            color: atom
                .type_id
                .and_then(|type_id| colors.get(&type_id).copied())
                .unwrap_or(DEFAULT_ATOM_COLOR),
        })
        .collect();

    let bonds = if view.show_bonds {
        build_bonds(model, BASE_BOND_RADIUS * view.bond_scale)
    } else {
        Vec::new()
    };

    let scene = Scene {
        background: view.background,
        material: view.material,
        legend,
        atoms,
        bonds,
    };
    debug!(
        atoms = scene.atoms.len(),
        bonds = scene.bonds.len(),
        "Built scene."
    );
    scene
}

fn build_bonds(model: &MoleculeModel, radius: f64) -> Vec<SceneBond> {
    let center = model.center().coords;
    let index = model.index_atoms_by_id();

    model
        .bonds()
        .iter()
        .filter_map(|bond| {
            let (atom1_id, atom2_id) = bond.endpoints()?;
            let (Some(atom1), Some(atom2)) = (index.get(&atom1_id), index.get(&atom2_id)) else {
                trace!(?bond.id, atom1_id, atom2_id, "Skipping bond with unknown atom.");
                return None;
            };
            let start = atom1.position - center;
            let end = atom2.position - center;
            let length = nalgebra::distance(&start, &end);
            if length > MAX_BOND_LENGTH {
                trace!(?bond.id, length, "Skipping overlong bond.");
                return None;
            }
            Some(SceneBond {
                id: bond.id,
                atom1_id,
                atom2_id,
                start,
                end,
                midpoint: nalgebra::center(&start, &end),
                length,
                radius,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ViewConfigBuilder;
    use crate::workflows::load::parse_structure;

    const CHAIN: &str = "\
Masses
1 12.011
2 1.008 # H
Atoms
1 1 1 0.0 0.0 0.0 0.0
2 1 1 0.0 1.5 0.0 0.0
3 1 2 0.0 3.0 0.0 0.0
4 1 7 0.0 10.0 0.0 0.0
Bonds
1 1 1 2
2 1 2 3
3 1 3 4
4 1 1 42
5 1 x 2
";

    fn model() -> MoleculeModel {
        parse_structure(CHAIN).unwrap()
    }

    #[test]
    fn atoms_are_centered_and_scaled() {
        let view = ViewConfigBuilder::new().atom_scale(2.0).build().unwrap();
        let scene = build(&model(), &view);

        assert_eq!(scene.atoms.len(), 4);
        assert_eq!(scene.atoms[0].position, Point3::new(-5.0, 0.0, 0.0));
        assert_eq!(scene.atoms[3].position, Point3::new(5.0, 0.0, 0.0));
        assert!(scene.atoms.iter().all(|a| a.radius == 0.9));
    }

    #[test]
    fn bonds_skip_unknown_sentinel_and_overlong_links() {
        let scene = build(&model(), &ViewConfig::default());

        let ids: Vec<_> = scene.bonds.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);

        let first = &scene.bonds[0];
        assert_eq!(first.length, 1.5);
        assert_eq!(first.radius, BASE_BOND_RADIUS);
        assert_eq!(first.start, Point3::new(-5.0, 0.0, 0.0));
        assert_eq!(first.midpoint, Point3::new(-4.25, 0.0, 0.0));
    }

    #[test]
    fn hidden_bonds_produce_no_bond_geometry() {
        let view = ViewConfigBuilder::new().show_bonds(false).build().unwrap();
        assert!(build(&model(), &view).bonds.is_empty());
    }

    #[test]
    fn type_colors_follow_element_then_type_id_then_override() {
        let model = model();
        let colors = resolve_type_colors(&model, &ViewConfig::default());
        assert_eq!(colors[&1], Color::from_hex(0x909090));
        assert_eq!(colors[&2], Color::from_hex(0xFFFFFF));
        assert_eq!(colors[&7], Color::from_hex(0x3050F8));

        let view = ViewConfigBuilder::new()
            .custom_color(1, Color::from_hex(0x123456))
            .build()
            .unwrap();
        let colors = resolve_type_colors(&model, &view);
        assert_eq!(colors[&1], Color::from_hex(0x123456));
        assert_eq!(colors[&2], Color::from_hex(0xFFFFFF));
    }

    #[test]
    fn untyped_atoms_use_default_color() {
        let model = parse_structure("Atoms\n1 1 ? 0 0 0 0\n").unwrap();
        let scene = build(&model, &ViewConfig::default());
        assert_eq!(scene.atoms[0].color, DEFAULT_ATOM_COLOR);
        assert!(scene.legend.is_empty());
    }

    #[test]
    fn legend_lists_every_type_in_id_order() {
        let scene = build(&model(), &ViewConfig::default());
        let legend: Vec<_> = scene
            .legend
            .iter()
            .map(|e| (e.type_id, e.element.as_str(), e.count))
            .collect();
        assert_eq!(legend, vec![(1, "C", 2), (2, "H", 1), (7, "N", 1)]);
        assert_eq!(scene.background, ViewConfig::default().background);
        assert_eq!(scene.material, MaterialStyle::Realistic);
    }
}
