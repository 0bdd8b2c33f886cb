/// Maximum absolute difference between an observed and a tabulated atomic mass for the two to be
/// considered the same element.
pub const MASS_MATCH_TOLERANCE: f64 = 0.5;

/// Reference data for one chemical element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    /// The standard atomic mass in g/mol.
    pub mass: f64,
    /// The chemical symbol (e.g. `"Na"`).
    pub symbol: &'static str,
    /// The English element name (e.g. `"Sodium"`).
    pub name: &'static str,
    /// The atomic number.
    pub number: u32,
}

const fn element(mass: f64, symbol: &'static str, name: &'static str, number: u32) -> ElementData {
    ElementData {
        mass,
        symbol,
        name,
        number,
    }
}

/// The standard element reference table.
///
/// Mass-based lookups return the first entry within tolerance in this order, so the order is part
/// of the classification behavior (e.g. a mass of 39.5 resolves to Ar, not K).
pub static ELEMENT_DATA: &[ElementData] = &[
    element(1.008, "H", "Hydrogen", 1),
    element(4.003, "He", "Helium", 2),
    element(6.941, "Li", "Lithium", 3),
    element(9.012, "Be", "Beryllium", 4),
    element(10.81, "B", "Boron", 5),
    element(12.01, "C", "Carbon", 6),
    element(14.01, "N", "Nitrogen", 7),
    element(16.00, "O", "Oxygen", 8),
    element(19.00, "F", "Fluorine", 9),
    element(20.18, "Ne", "Neon", 10),
    element(22.99, "Na", "Sodium", 11),
    element(24.31, "Mg", "Magnesium", 12),
    element(26.98, "Al", "Aluminium", 13),
    element(28.09, "Si", "Silicon", 14),
    element(30.97, "P", "Phosphorus", 15),
    element(32.07, "S", "Sulfur", 16),
    element(35.45, "Cl", "Chlorine", 17),
    element(39.95, "Ar", "Argon", 18),
    element(39.10, "K", "Potassium", 19),
    element(40.08, "Ca", "Calcium", 20),
    element(47.87, "Ti", "Titanium", 22),
    element(55.85, "Fe", "Iron", 26),
    element(63.55, "Cu", "Copper", 29),
    element(107.9, "Ag", "Silver", 47),
    element(196.97, "Au", "Gold", 79),
];

/// A read-only view over an ordered element table.
#[derive(Debug, Clone, Copy)]
pub struct ElementTable<'a> {
    entries: &'a [ElementData],
}

impl Default for ElementTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl ElementTable<'static> {
    pub fn standard() -> Self {
        Self {
            entries: ELEMENT_DATA,
        }
    }
}

impl<'a> ElementTable<'a> {
    pub fn new(entries: &'a [ElementData]) -> Self {
        Self { entries }
    }

    /// Finds the first element, in table order, whose mass is within [`MASS_MATCH_TOLERANCE`].
    pub fn by_mass(&self, mass: f64) -> Option<&'a ElementData> {
        self.entries
            .iter()
            .find(|e| (e.mass - mass).abs() < MASS_MATCH_TOLERANCE)
    }

    /// Finds the element with the given atomic number.
    pub fn by_number(&self, number: i64) -> Option<&'a ElementData> {
        let number = u32::try_from(number).ok()?;
        self.entries.iter().find(|e| e.number == number)
    }

    /// Finds the element with the given symbol (exact, case-sensitive).
    pub fn by_symbol(&self, symbol: &str) -> Option<&'a ElementData> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }
}
