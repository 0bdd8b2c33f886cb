use super::classify::TypeClassifier;
use super::error::EngineError;
use crate::core::chem::elements::ElementTable;
use crate::core::io::lammps::RecordSet;
use crate::core::models::molecule::MoleculeModel;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Builds the final model from raw records using the standard element table.
///
/// # Errors
///
/// Returns [`EngineError::EmptyStructure`] if the records contain no atoms.
pub fn assemble(records: RecordSet) -> Result<MoleculeModel, EngineError> {
    assemble_with(records, ElementTable::standard())
}

/// Builds the final model from raw records using the given element table.
///
/// One `AtomTypeInfo` is produced per distinct type id found on the atoms; mass entries for
/// unused types are discarded along with the rest of the mass table.
///
/// # Errors
///
/// Returns [`EngineError::EmptyStructure`] if the records contain no atoms.
#[instrument(skip_all, name = "assemble_model")]
pub fn assemble_with(
    records: RecordSet,
    table: ElementTable<'_>,
) -> Result<MoleculeModel, EngineError> {
    let RecordSet {
        masses,
        atoms,
        bonds,
        bounds,
    } = records;

    if atoms.is_empty() {
        return Err(EngineError::EmptyStructure);
    }

    let mut populations: BTreeMap<i64, usize> = BTreeMap::new();
    for type_id in atoms.iter().filter_map(|atom| atom.type_id) {
        *populations.entry(type_id).or_default() += 1;
    }

    let classifier = TypeClassifier::new(&masses, table);
    let atom_types: BTreeMap<_, _> = populations
        .into_iter()
        .map(|(type_id, count)| (type_id, classifier.classify(type_id, count)))
        .collect();

    let resolved = atom_types
        .values()
        .filter(|info| info.is_element_resolved())
        .count();
    debug!(
        atoms = atoms.len(),
        bonds = bonds.len(),
        types = atom_types.len(),
        resolved,
        "Assembled molecule model."
    );

    Ok(MoleculeModel::new(atoms, bonds, atom_types, bounds.finish()))
}
