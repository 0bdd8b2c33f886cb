use super::color::Color;
use super::elements::ElementTable;
use crate::core::models::atom_type::AtomTypeInfo;
use phf::{Map, phf_map};

/// Color for atoms whose type could not be matched to any palette entry.
pub const DEFAULT_ATOM_COLOR: Color = Color::from_hex(0xFF00FF);

// CPK-style colors keyed by atomic number.
static ATOM_COLORS: Map<u32, Color> = phf_map! {
    1u32 => Color::from_hex(0xFFFFFF),  // H
    2u32 => Color::from_hex(0xD9FFFF),  // He
    3u32 => Color::from_hex(0xCC80FF),  // Li
    4u32 => Color::from_hex(0xC2FF00),  // Be
    5u32 => Color::from_hex(0xFFB5B5),  // B
    6u32 => Color::from_hex(0x909090),  // C
    7u32 => Color::from_hex(0x3050F8),  // N
    8u32 => Color::from_hex(0xFF0D0D),  // O
    9u32 => Color::from_hex(0x90E050),  // F
    10u32 => Color::from_hex(0xB3E3F5), // Ne
    11u32 => Color::from_hex(0xAB5CF2), // Na
    12u32 => Color::from_hex(0x8AFF00), // Mg
    13u32 => Color::from_hex(0xBFA6A6), // Al
    14u32 => Color::from_hex(0xF0C8A0), // Si
    15u32 => Color::from_hex(0xFF8000), // P
    16u32 => Color::from_hex(0xFFFF30), // S
    17u32 => Color::from_hex(0x1FF01F), // Cl
    18u32 => Color::from_hex(0x80D1E3), // Ar
    19u32 => Color::from_hex(0x8F40D4), // K
    20u32 => Color::from_hex(0x3DFF00), // Ca
    21u32 => Color::from_hex(0xE6E6E6), // Sc
    22u32 => Color::from_hex(0xBFC2C7), // Ti
    23u32 => Color::from_hex(0xA6A6AB), // V
    24u32 => Color::from_hex(0x8A99C7), // Cr
    25u32 => Color::from_hex(0x9C7AC7), // Mn
    26u32 => Color::from_hex(0xE06633), // Fe
    27u32 => Color::from_hex(0xF090A0), // Co
    28u32 => Color::from_hex(0x50D050), // Ni
    29u32 => Color::from_hex(0xC88033), // Cu
    30u32 => Color::from_hex(0x7D80B0), // Zn
    31u32 => Color::from_hex(0xC28F8F), // Ga
    32u32 => Color::from_hex(0x668F8F), // Ge
    33u32 => Color::from_hex(0xBD80E3), // As
    34u32 => Color::from_hex(0xFFA100), // Se
    35u32 => Color::from_hex(0xA62929), // Br
    36u32 => Color::from_hex(0x5CB8D1), // Kr
    37u32 => Color::from_hex(0x702EB0), // Rb
    38u32 => Color::from_hex(0x00FF00), // Sr
    46u32 => Color::from_hex(0x006985), // Pd
    47u32 => Color::from_hex(0xC0C0C0), // Ag
    48u32 => Color::from_hex(0xFFD98F), // Cd
    50u32 => Color::from_hex(0x668080), // Sn
    53u32 => Color::from_hex(0x940094), // I
    54u32 => Color::from_hex(0x429EB0), // Xe
    78u32 => Color::from_hex(0xD0D0E0), // Pt
    79u32 => Color::from_hex(0xFFD123), // Au
    80u32 => Color::from_hex(0xB8B8D0), // Hg
    82u32 => Color::from_hex(0x575961), // Pb
    92u32 => Color::from_hex(0x008FFF), // U
};

/// Returns the palette color for an atomic number, if the palette has one.
pub fn color_for_atomic_number(number: i64) -> Option<Color> {
    let key = u32::try_from(number).ok()?;
    ATOM_COLORS.get(&key).copied()
}

/// Picks the default display color for an atom type.
///
/// The inferred element is tried first (through its atomic number in `table`), then the type id
/// itself as an atomic number, then [`DEFAULT_ATOM_COLOR`].
pub fn default_color(info: &AtomTypeInfo, table: &ElementTable<'_>) -> Color {
    table
        .by_symbol(&info.element)
        .and_then(|element| color_for_atomic_number(i64::from(element.number)))
        .or_else(|| color_for_atomic_number(info.id))
        .unwrap_or(DEFAULT_ATOM_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: i64, element: &str) -> AtomTypeInfo {
        AtomTypeInfo {
            element: element.to_string(),
            ..AtomTypeInfo::unresolved(id, 1)
        }
    }

    #[test]
    fn color_lookup_by_atomic_number() {
        assert_eq!(color_for_atomic_number(6), Some(Color::from_hex(0x909090)));
        assert_eq!(color_for_atomic_number(92), Some(Color::from_hex(0x008FFF)));
        assert_eq!(color_for_atomic_number(39), None);
        assert_eq!(color_for_atomic_number(-1), None);
    }

    #[test]
    fn element_color_takes_precedence_over_type_id() {
        let table = ElementTable::standard();
        // Type 1 would be hydrogen white, but the element says oxygen.
        assert_eq!(default_color(&info(1, "O"), &table), Color::from_hex(0xFF0D0D));
    }

    #[test]
    fn type_id_is_used_when_element_is_unknown() {
        let table = ElementTable::standard();
        assert_eq!(default_color(&info(7, "X"), &table), Color::from_hex(0x3050F8));
    }

    #[test]
    fn type_id_is_used_when_element_is_not_tabulated() {
        // "Zn" has a palette color but is absent from the element table, so the type id decides.
        let table = ElementTable::standard();
        assert_eq!(default_color(&info(8, "Zn"), &table), Color::from_hex(0xFF0D0D));
    }

    #[test]
    fn falls_back_to_default_color() {
        let table = ElementTable::standard();
        assert_eq!(default_color(&info(200, "X"), &table), DEFAULT_ATOM_COLOR);
        assert_eq!(DEFAULT_ATOM_COLOR.to_string(), "#FF00FF");
    }
}
