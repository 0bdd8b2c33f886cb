use nalgebra::Point3;

/// Represents a single particle read from the `Atoms` section of a structure file.
///
/// The integer columns are optional because the reader admits lines whose identity columns fail to
/// parse as long as the coordinates are readable. Such columns are stored as `None` rather than
/// rejecting the whole line.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom id, unique within a document but not necessarily contiguous.
    pub id: Option<i64>,
    /// The molecule grouping tag. Stored only, never interpreted.
    pub molecule_tag: Option<i64>,
    /// The numeric atom type, a key into the model's atom-type metadata.
    pub type_id: Option<i64>,
    /// The partial charge, stored verbatim (`NaN` when unreadable).
    pub charge: f64,
    /// The position in document units.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from its raw columns.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom id, if readable.
    /// * `molecule_tag` - The molecule tag, if readable.
    /// * `type_id` - The atom type, if readable.
    /// * `charge` - The partial charge.
    /// * `position` - The coordinates of the atom.
    pub fn new(
        id: Option<i64>,
        molecule_tag: Option<i64>,
        type_id: Option<i64>,
        charge: f64,
        position: Point3<f64>,
    ) -> Self {
        Self {
            id,
            molecule_tag,
            type_id,
            charge,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_all_columns() {
        let atom = Atom::new(Some(7), Some(2), Some(3), -0.5, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.id, Some(7));
        assert_eq!(atom.molecule_tag, Some(2));
        assert_eq!(atom.type_id, Some(3));
        assert_eq!(atom.charge, -0.5);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(Some(1), None, Some(1), 0.25, Point3::new(0.0, 1.0, 0.0));
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
