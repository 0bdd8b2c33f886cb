use super::atom::Atom;
use super::atom_type::AtomTypeInfo;
use super::topology::Bond;
use nalgebra::Point3;
use std::collections::{BTreeMap, HashMap};

/// An axis-aligned box enclosing a set of positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// The componentwise minimum corner.
    pub min: Point3<f64>,
    /// The componentwise maximum corner.
    pub max: Point3<f64>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }
}

impl BoundingBox {
    /// Returns the componentwise midpoint of the box.
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Running componentwise min/max over positions.
///
/// Starts from the unbounded `+inf`/`-inf` corners; those sentinels are only visible inside the
/// accumulator. [`BoundsAccumulator::finish`] yields `None` when nothing was included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAccumulator {
    min: Point3<f64>,
    max: Point3<f64>,
    included: usize,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            included: 0,
        }
    }

    pub fn include(&mut self, position: &Point3<f64>) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(position[axis]);
            self.max[axis] = self.max[axis].max(position[axis]);
        }
        self.included += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.included == 0
    }

    pub fn finish(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        Some(BoundingBox {
            min: self.min,
            max: self.max,
        })
    }
}

/// The assembled, immutable model of a parsed molecular structure.
///
/// Atoms and bonds keep document order. Atom-type metadata is keyed by type id and iterates in
/// ascending id order. The `center` is the midpoint of the bounding box (not the center of mass)
/// and is used to translate the structure to the origin for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeModel {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    atom_types: BTreeMap<i64, AtomTypeInfo>,
    bounds: BoundingBox,
    center: Point3<f64>,
}

impl MoleculeModel {
    /// Creates a model from its parts, deriving the center from `bounds`.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atoms in document order.
    /// * `bonds` - The bonds in document order.
    /// * `atom_types` - The metadata of every atom type used by `atoms`.
    /// * `bounds` - The bounding box of all atom positions, or `None` if there are no atoms.
    pub fn new(
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        atom_types: BTreeMap<i64, AtomTypeInfo>,
        bounds: Option<BoundingBox>,
    ) -> Self {
        let bounds = bounds.unwrap_or_default();
        let center = bounds.center();
        Self {
            atoms,
            bonds,
            atom_types,
            bounds,
            center,
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom_types(&self) -> &BTreeMap<i64, AtomTypeInfo> {
        &self.atom_types
    }

    pub fn atom_type(&self, type_id: i64) -> Option<&AtomTypeInfo> {
        self.atom_types.get(&type_id)
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    /// Builds a lookup from atom id to atom.
    ///
    /// Atoms without a readable id are skipped. When an id occurs more than once, the atom that
    /// appears last in the document wins.
    pub fn index_atoms_by_id(&self) -> HashMap<i64, &Atom> {
        self.atoms
            .iter()
            .filter_map(|atom| atom.id.map(|id| (id, atom)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(id: i64, type_id: i64, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(Some(id), Some(1), Some(type_id), 0.0, Point3::new(x, y, z))
    }

    #[test]
    fn accumulator_tracks_componentwise_extremes() {
        let mut acc = BoundsAccumulator::new();
        acc.include(&Point3::new(1.0, -2.0, 3.0));
        acc.include(&Point3::new(-1.0, 4.0, 0.5));

        let bounds = acc.finish().unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, -2.0, 0.5));
        assert_eq!(bounds.max, Point3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn empty_accumulator_yields_no_bounds() {
        let acc = BoundsAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.finish(), None);
    }

    #[test]
    fn bounding_box_center_is_midpoint() {
        let bounds = BoundingBox {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(10.0, 0.0, 0.0),
        };
        assert_eq!(bounds.center(), Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn model_without_bounds_defaults_to_origin() {
        let model = MoleculeModel::new(Vec::new(), Vec::new(), BTreeMap::new(), None);
        assert_eq!(model.bounds().min, Point3::origin());
        assert_eq!(model.bounds().max, Point3::origin());
        assert_eq!(*model.center(), Point3::origin());
    }

    #[test]
    fn model_center_derives_from_bounds() {
        let bounds = BoundingBox {
            min: Point3::new(-2.0, 0.0, 4.0),
            max: Point3::new(2.0, 6.0, 8.0),
        };
        let model = MoleculeModel::new(Vec::new(), Vec::new(), BTreeMap::new(), Some(bounds));
        assert_eq!(*model.center(), Point3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn index_atoms_by_id_skips_unreadable_ids_and_keeps_last_duplicate() {
        let mut nameless = atom(0, 1, 9.0, 9.0, 9.0);
        nameless.id = None;
        let atoms = vec![
            atom(1, 1, 0.0, 0.0, 0.0),
            atom(2, 1, 1.0, 0.0, 0.0),
            atom(1, 2, 5.0, 0.0, 0.0),
            nameless,
        ];
        let model = MoleculeModel::new(atoms, Vec::new(), BTreeMap::new(), None);

        let index = model.index_atoms_by_id();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&1].position.x, 5.0);
        assert_eq!(index[&2].position.x, 1.0);
    }

    #[test]
    fn atom_type_lookup_returns_stored_metadata() {
        let mut types = BTreeMap::new();
        types.insert(3, AtomTypeInfo::unresolved(3, 1));
        let model = MoleculeModel::new(
            vec![atom(1, 3, 0.0, 0.0, 0.0)],
            Vec::new(),
            types,
            None,
        );
        assert_eq!(model.atom_type(3).unwrap().label, "Type 3");
        assert!(model.atom_type(4).is_none());
    }
}
