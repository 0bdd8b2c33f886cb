use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use molview::core::chem::elements::ElementTable;
use molview::core::chem::palette::default_color;
use molview::core::models::molecule::MoleculeModel;
use molview::engine::config::ParseConfig;
use molview::workflows::load;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let config = ParseConfig {
        strict_bonds: args.strict_bonds,
    };

    info!("Loading input structure from {:?}", &args.input);
    let model =
        load::from_path(&args.input, &config).map_err(|e| CliError::from_load(&args.input, e))?;

    print!("{}", render_summary(&model));
    Ok(())
}

/// Formats counts, bounds and the atom type table as plain text.
pub fn render_summary(model: &MoleculeModel) -> String {
    let table = ElementTable::standard();
    let bounds = model.bounds();
    let center = model.center();

    let mut out = format!(
        "Atoms:      {}\n\
         Bonds:      {}\n\
         Atom types: {}\n\
         Bounds:     ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})\n\
         Center:     ({:.3}, {:.3}, {:.3})\n\n",
        model.atoms().len(),
        model.bonds().len(),
        model.atom_types().len(),
        bounds.min.x,
        bounds.min.y,
        bounds.min.z,
        bounds.max.x,
        bounds.max.y,
        bounds.max.z,
        center.x,
        center.y,
        center.z
    );
    out.push_str(&format!(
        "{:>6}  {:<7}  {:<24}  {:>10}  {:>7}  {}\n",
        "Type", "Element", "Label", "Mass", "Count", "Color"
    ));
    for info in model.atom_types().values() {
        out.push_str(&format!(
            "{:>6}  {:<7}  {:<24}  {:>10.4}  {:>7}  {}\n",
            info.id,
            info.element,
            info.label,
            info.mass,
            info.count,
            default_color(info, &table)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use molview::workflows::load::parse_structure;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WATER: &str = "\
Masses
1 15.9994 # O
2 1.008
Atoms
1 1 1 -0.834 0.0 0.0 0.0
2 1 2 0.417 0.9572 0.0 0.0
3 1 2 0.417 -0.24 0.927 0.0
Bonds
1 1 1 2
2 1 1 3
";

    #[test]
    fn summary_lists_counts_and_type_table() {
        let summary = render_summary(&parse_structure(WATER).unwrap());

        assert!(summary.starts_with("Atoms:      3\nBonds:      2\nAtom types: 2\n"));
        assert!(summary.contains("\nCenter:     ("));
        assert!(summary.contains("Bonds:      2"));
        assert!(summary.contains("Atom types: 2"));
        assert!(summary.contains("Bounds:     (-0.240, 0.000, 0.000) .. (0.957, 0.927, 0.000)"));

        let rows: Vec<_> = summary.lines().skip_while(|l| !l.contains("Element")).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains("O") && rows[1].contains("#FF0D0D"));
        assert!(rows[2].contains("Hydrogen (Type 2)") && rows[2].contains("#FFFFFF"));
    }

    #[test]
    fn run_reports_empty_structure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Masses\n1 12.0\n").unwrap();

        let result = run(InspectArgs {
            input: file.path().to_path_buf(),
            strict_bonds: false,
        });
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    fn run_reports_missing_file() {
        let result = run(InspectArgs {
            input: "/nonexistent/dir/system.data".into(),
            strict_bonds: true,
        });
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
