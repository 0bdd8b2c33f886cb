use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::BoundsAccumulator;
use crate::core::models::topology::Bond;
use nalgebra::Point3;
use std::collections::HashMap;
use std::io;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// The logical section a data line belongs to.
///
/// `None` covers both "no header seen yet" and the ignored sections (`Velocities`, `Angles`,
/// `Dihedrals`); lines in it are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    None,
    Masses,
    Atoms,
    Bonds,
}

const SECTION_HEADERS: [(&str, Section); 6] = [
    ("Masses", Section::Masses),
    ("Atoms", Section::Atoms),
    ("Bonds", Section::Bonds),
    ("Velocities", Section::None),
    ("Angles", Section::None),
    ("Dihedrals", Section::None),
];

/// How lines in the `Bonds` section with unreadable numeric columns are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondPolicy {
    /// Keep the bond and store unreadable columns as `None`.
    #[default]
    Lenient,
    /// Drop the bond if any of its four columns is unreadable.
    Strict,
}

/// A declared per-type mass with the optional inline comment of its line.
#[derive(Debug, Clone, PartialEq)]
pub struct MassEntry {
    pub mass: f64,
    pub comment: Option<String>,
}

/// One typed record produced from a data line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRecord {
    Mass { type_id: i64, entry: MassEntry },
    Atom(Atom),
    Bond(Bond),
}

/// A non-empty line split at its first `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    pub content: &'a str,
    pub comment: Option<&'a str>,
}

/// Everything extracted from one document.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub masses: HashMap<i64, MassEntry>,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub bounds: BoundsAccumulator,
}

impl RecordSet {
    pub fn push(&mut self, record: LineRecord) {
        match record {
            LineRecord::Mass { type_id, entry } => {
                self.masses.insert(type_id, entry);
            }
            LineRecord::Atom(atom) => {
                self.bounds.include(&atom.position);
                self.atoms.push(atom);
            }
            LineRecord::Bond(bond) => self.bonds.push(bond),
        }
    }
}

#[derive(Debug, Error)]
pub enum LammpsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reader for LAMMPS-style data files.
///
/// Only the `Masses`, `Atoms` (`id mol type charge x y z`) and `Bonds` (`id type atom1 atom2`)
/// sections are interpreted. Header keywords are matched case-insensitively at the start of a
/// line; anything the reader cannot interpret is skipped without error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LammpsDataFile {
    policy: BondPolicy,
}

impl LammpsDataFile {
    pub fn new(policy: BondPolicy) -> Self {
        Self { policy }
    }
}

impl StructureFile for LammpsDataFile {
    type Records = RecordSet;
    type Error = LammpsError;

    fn parse_str(&self, text: &str) -> Result<Self::Records, Self::Error> {
        Ok(parse_records(text, self.policy))
    }
}

#[derive(Debug, Default)]
struct ScanState {
    section: Section,
    records: RecordSet,
}

/// Parses a whole document in one pass.
#[instrument(skip_all, fields(bytes = text.len(), ?policy))]
pub fn parse_records(text: &str, policy: BondPolicy) -> RecordSet {
    let state = text
        .lines()
        .enumerate()
        .fold(ScanState::default(), |mut state, (index, raw)| {
            let line_num = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return state;
            }
            let line = split_comment(trimmed);
            if line.content.is_empty() {
                return state;
            }
            if let Some(section) = match_section_header(line.content) {
                trace!(line = line_num, ?section, "Entering section.");
                state.section = section;
                return state;
            }

            match parse_record(state.section, line, policy) {
                Some(record) => {
                    if let LineRecord::Bond(bond) = &record {
                        if !bond.is_complete() {
                            debug!(line = line_num, "Keeping bond with unreadable columns.");
                        }
                    }
                    state.records.push(record);
                }
                None if state.section != Section::None => {
                    trace!(line = line_num, section = ?state.section, "Skipping unreadable line.");
                }
                None => {}
            }
            state
        });

    let records = state.records;
    debug!(
        masses = records.masses.len(),
        atoms = records.atoms.len(),
        bonds = records.bonds.len(),
        "Finished scanning structure file."
    );
    records
}

/// Splits a trimmed line at its first `#`. An empty comment counts as no comment.
pub fn split_comment(line: &str) -> DataLine<'_> {
    match line.split_once('#') {
        Some((content, comment)) => {
            let comment = comment.trim();
            DataLine {
                content: content.trim(),
                comment: (!comment.is_empty()).then_some(comment),
            }
        }
        None => DataLine {
            content: line.trim(),
            comment: None,
        },
    }
}

/// Returns the section a header line switches to, or `None` if the line is not a header.
pub fn match_section_header(content: &str) -> Option<Section> {
    SECTION_HEADERS
        .iter()
        .find(|(keyword, _)| {
            content
                .get(..keyword.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
        })
        .map(|&(_, section)| section)
}

/// Interprets the content of a data line according to the active section.
pub fn parse_record(section: Section, line: DataLine<'_>, policy: BondPolicy) -> Option<LineRecord> {
    let tokens: Vec<&str> = line.content.split_whitespace().collect();
    match section {
        Section::None => None,
        Section::Masses => parse_mass(&tokens, line.comment),
        Section::Atoms => parse_atom(&tokens),
        Section::Bonds => parse_bond(&tokens, policy),
    }
}

fn parse_mass(tokens: &[&str], comment: Option<&str>) -> Option<LineRecord> {
    let [type_id, mass, ..] = tokens else {
        return None;
    };
    Some(LineRecord::Mass {
        type_id: parse_int(type_id)?,
        entry: MassEntry {
            mass: parse_float(mass)?,
            comment: comment.map(str::to_string),
        },
    })
}

// Only the coordinates gate the line and they must be finite; identity columns and charge fall
// back to sentinels.
fn parse_atom(tokens: &[&str]) -> Option<LineRecord> {
    let [id, molecule_tag, type_id, charge, x, y, z, ..] = tokens else {
        return None;
    };
    let position = Point3::new(parse_float(x)?, parse_float(y)?, parse_float(z)?);
    Some(LineRecord::Atom(Atom::new(
        parse_int(id),
        parse_int(molecule_tag),
        parse_int(type_id),
        parse_float(charge).unwrap_or(f64::NAN),
        position,
    )))
}

fn parse_bond(tokens: &[&str], policy: BondPolicy) -> Option<LineRecord> {
    let [id, type_id, atom1_id, atom2_id, ..] = tokens else {
        return None;
    };
    let bond = Bond::new(
        parse_int(id),
        parse_int(type_id),
        parse_int(atom1_id),
        parse_int(atom2_id),
    );
    match policy {
        BondPolicy::Strict if !bond.is_complete() => None,
        _ => Some(LineRecord::Bond(bond)),
    }
}

/// Reads the leading integer of a token (`"2.0"` reads as 2, `"3abc"` as 3).
fn parse_int(token: &str) -> Option<i64> {
    numeric_prefix(token, false)?.parse().ok()
}

/// Reads the leading decimal number of a token (`"12.011(2)"` reads as 12.011).
///
/// Only finite values are returned; `NaN`, `inf` and overflowing exponents are unreadable.
fn parse_float(token: &str) -> Option<f64> {
    numeric_prefix(token, true)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// Optional sign, digits, and for floats an optional fraction and exponent. At least one mantissa
// digit is required.
fn numeric_prefix(token: &str, fractional: bool) -> Option<&str> {
    let bytes = token.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut mantissa_digits = count_digits(&bytes[end..]);
    end += mantissa_digits;

    if fractional {
        if bytes.get(end) == Some(&b'.') {
            let fraction_digits = count_digits(&bytes[end + 1..]);
            if mantissa_digits + fraction_digits > 0 {
                end += 1 + fraction_digits;
                mantissa_digits += fraction_digits;
            }
        }
        if mantissa_digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exponent_end = end + 1;
            if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
                exponent_end += 1;
            }
            let exponent_digits = count_digits(&bytes[exponent_end..]);
            if exponent_digits > 0 {
                end = exponent_end + exponent_digits;
            }
        }
    }

    (mantissa_digits > 0).then(|| &token[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
