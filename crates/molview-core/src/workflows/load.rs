use crate::core::io::lammps::{LammpsDataFile, LammpsError, parse_records};
use crate::core::io::traits::StructureFile;
use crate::core::models::molecule::MoleculeModel;
use crate::engine::assembler;
use crate::engine::config::ParseConfig;
use crate::engine::error::EngineError;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read structure file: {0}")]
    Read(#[from] LammpsError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Parses a structure document with the default (lenient) configuration.
///
/// # Errors
///
/// Returns [`EngineError::EmptyStructure`] if no atoms could be read.
pub fn parse_structure(text: &str) -> Result<MoleculeModel, EngineError> {
    run(text, &ParseConfig::default())
}

/// Parses a structure document held in memory.
///
/// Malformed lines never fail the parse; they are dropped (or, for lenient bonds, kept with
/// sentinel values). The only failure is a document without any readable atom.
///
/// # Errors
///
/// Returns [`EngineError::EmptyStructure`] if no atoms could be read.
#[instrument(skip_all, name = "load_workflow")]
pub fn run(text: &str, config: &ParseConfig) -> Result<MoleculeModel, EngineError> {
    let records = parse_records(text, config.bond_policy());
    let model = assembler::assemble(records)?;
    info!(
        atoms = model.atoms().len(),
        bonds = model.bonds().len(),
        types = model.atom_types().len(),
        "Loaded molecular structure."
    );
    Ok(model)
}

/// Reads and parses a structure document from a buffered reader.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the input cannot be read and [`LoadError::Engine`] if it holds
/// no atoms.
pub fn from_reader(
    reader: &mut impl BufRead,
    config: &ParseConfig,
) -> Result<MoleculeModel, LoadError> {
    let records = LammpsDataFile::new(config.bond_policy()).read_from(reader)?;
    Ok(assembler::assemble(records)?)
}

/// Reads and parses a structure file.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and [`LoadError::Engine`] if it holds
/// no atoms.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn from_path(path: impl AsRef<Path>, config: &ParseConfig) -> Result<MoleculeModel, LoadError> {
    let records = LammpsDataFile::new(config.bond_policy()).read_from_path(path.as_ref())?;
    let model = assembler::assemble(records)?;
    info!(
        atoms = model.atoms().len(),
        bonds = model.bonds().len(),
        "Loaded molecular structure from file."
    );
    Ok(model)
}
