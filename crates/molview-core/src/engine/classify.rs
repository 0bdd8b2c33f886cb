use crate::core::chem::elements::{ElementData, ElementTable};
use crate::core::io::lammps::MassEntry;
use crate::core::models::atom_type::AtomTypeInfo;
use std::collections::HashMap;
use tracing::trace;

/// Comments up to this many characters are read as element symbols (e.g. `"C"`, `"Na"`).
pub const SYMBOL_COMMENT_MAX_LEN: usize = 2;

/// Resolves atom type ids to element, label and mass.
///
/// Rules are applied in a fixed order, and the first rule that sets a field wins for that field:
///
/// 1. A `Masses` entry for the type sets the mass. Its comment, if any, becomes the label, and a
///    comment of at most [`SYMBOL_COMMENT_MAX_LEN`] characters is also taken as the element symbol.
/// 2. If the element is still unknown and the mass is positive, the first table element whose mass
///    is within tolerance supplies the element (and the label, if still the default).
/// 3. If the element is still unknown and the mass is exactly zero, a table element whose atomic
///    number equals the type id supplies the element (and the label, if still the default).
///
/// Rules 2 and 3 are mutually exclusive: a type with a positive mass that matches no element is
/// never resolved by its id.
#[derive(Debug, Clone, Copy)]
pub struct TypeClassifier<'a> {
    masses: &'a HashMap<i64, MassEntry>,
    table: ElementTable<'a>,
}

impl<'a> TypeClassifier<'a> {
    pub fn new(masses: &'a HashMap<i64, MassEntry>, table: ElementTable<'a>) -> Self {
        Self { masses, table }
    }

    /// Classifies one type id, recording `count` as its population.
    pub fn classify(&self, type_id: i64, count: usize) -> AtomTypeInfo {
        let mut info = AtomTypeInfo::unresolved(type_id, count);

        if let Some(entry) = self.masses.get(&type_id) {
            info.mass = entry.mass;
            if let Some(comment) = &entry.comment {
                info.label = comment.clone();
                if comment.chars().count() <= SYMBOL_COMMENT_MAX_LEN {
                    info.element = comment.clone();
                }
            }
        }

        // A comment of "X" names the sentinel itself, so inference still applies.
        if !info.is_element_resolved() {
            if let Some(data) = self.infer(type_id, info.mass) {
                info.element = data.symbol.to_string();
                if info.has_default_label() {
                    info.label = format!("{} (Type {})", data.name, type_id);
                }
            }
        }

        trace!(
            type_id,
            element = %info.element,
            label = %info.label,
            "Classified atom type."
        );
        info
    }

    fn infer(&self, type_id: i64, mass: f64) -> Option<&'a ElementData> {
        if mass > 0.0 {
            self.table.by_mass(mass)
        } else if mass == 0.0 {
            self.table.by_number(type_id)
        } else {
            None
        }
    }
}
