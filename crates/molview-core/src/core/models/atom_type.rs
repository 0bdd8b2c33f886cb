/// The element symbol used when no element could be inferred for an atom type.
pub const UNKNOWN_ELEMENT: &str = "X";

/// Returns the label used for an atom type that has no better description.
pub fn default_label(type_id: i64) -> String {
    format!("Type {}", type_id)
}

/// Metadata derived for one atom type that occurs in a parsed structure.
///
/// Exactly one `AtomTypeInfo` exists per distinct type id found on the parsed atoms. Types that are
/// only declared in the `Masses` section but never used by an atom are not materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomTypeInfo {
    /// The numeric type id.
    pub id: i64,
    /// The declared mass, or `0.0` when unknown.
    pub mass: f64,
    /// The inferred element symbol (e.g. `"C"`), or [`UNKNOWN_ELEMENT`].
    pub element: String,
    /// A human-readable display label, `"Type <id>"` by default.
    pub label: String,
    /// The number of atoms carrying this type.
    pub count: usize,
}

impl AtomTypeInfo {
    /// Creates an unresolved `AtomTypeInfo` with unknown mass, the sentinel element and the default label.
    pub fn unresolved(id: i64, count: usize) -> Self {
        Self {
            id,
            mass: 0.0,
            element: UNKNOWN_ELEMENT.to_string(),
            label: default_label(id),
            count,
        }
    }

    /// Returns `true` if an element symbol was inferred for this type.
    pub fn is_element_resolved(&self) -> bool {
        self.element != UNKNOWN_ELEMENT
    }

    /// Returns `true` if the label is still the `"Type <id>"` fallback.
    pub fn has_default_label(&self) -> bool {
        self.label == default_label(self.id)
    }
}
