/// An edge between two atoms, read from the `Bonds` section of a structure file.
///
/// The endpoints reference [`Atom::id`](super::atom::Atom::id) values. Referential integrity is not
/// checked when a bond is read: an endpoint may name an atom that does not exist, or may be `None`
/// when its column could not be parsed. Consumers resolve endpoints themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub id: Option<i64>,
    pub type_id: Option<i64>,
    pub atom1_id: Option<i64>, // ID of the first atom
    pub atom2_id: Option<i64>, // ID of the second atom
}

impl Bond {
    pub fn new(
        id: Option<i64>,
        type_id: Option<i64>,
        atom1_id: Option<i64>,
        atom2_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            type_id,
            atom1_id,
            atom2_id,
        }
    }

    /// Both endpoint ids, or `None` if either column was unreadable.
    pub fn endpoints(&self) -> Option<(i64, i64)> {
        Some((self.atom1_id?, self.atom2_id?))
    }

    /// Returns `true` if every column of the bond was read successfully.
    pub fn is_complete(&self) -> bool {
        self.id.is_some()
            && self.type_id.is_some()
            && self.atom1_id.is_some()
            && self.atom2_id.is_some()
    }
}
