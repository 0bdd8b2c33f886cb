use crate::cli::SceneArgs;
use crate::config::PartialViewConfig;
use crate::error::{CliError, Result};
use molview::engine::config::ParseConfig;
use molview::workflows::{load, scene};
use tracing::info;

pub fn run(args: SceneArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialViewConfig::from_file(path)?,
        None => PartialViewConfig::default(),
    };
    info!("Merging view configuration from file and CLI arguments...");
    let view = partial_config.merge_with_cli(&args)?;

    let parse_config = ParseConfig {
        strict_bonds: args.strict_bonds,
    };
    info!("Loading input structure from {:?}", &args.input);
    let model = load::from_path(&args.input, &parse_config)
        .map_err(|e| CliError::from_load(&args.input, e))?;

    let scene = scene::build(&model, &view);
    let document = toml::to_string(&scene).map_err(|e| CliError::Other(e.into()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, document)?;
            info!(
                "Scene with {} atom(s) and {} bond(s) written to {:?}",
                scene.atoms.len(),
                scene.bonds.len(),
                path
            );
        }
        None => print!("{}", document),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const DIMER: &str = "\
Masses
1 12.011 # Carbon
Atoms
1 1 1 0.0 0.0 0.0 0.0
2 1 1 0.0 1.54 0.0 0.0
Bonds
1 1 1 2
";

    fn scene_args(argv: &[&str]) -> SceneArgs {
        let mut full = vec!["molview", "scene"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Scene(args) => args,
            _ => panic!("Expected 'scene' subcommand"),
        }
    }

    #[test]
    fn writes_scene_document_to_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dimer.data");
        let output = dir.path().join("scene.toml");
        fs::write(&input, DIMER).unwrap();

        let args = scene_args(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--material",
            "toon",
            "-S",
            "custom-colors.1=#123456",
        ]);
        run(args).unwrap();

        let document = fs::read_to_string(&output).unwrap();
        let value: toml::Table = toml::from_str(&document).unwrap();
        assert_eq!(value["material"].as_str(), Some("toon"));
        assert_eq!(value["background"].as_str(), Some("#151515"));
        assert_eq!(value["atoms"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["bonds"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["legend"][0]["label"].as_str(), Some("Carbon"));
        assert_eq!(value["atoms"][0]["color"].as_str(), Some("#123456"));
    }

    #[test]
    fn hide_bonds_omits_bond_geometry() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dimer.data");
        let output = dir.path().join("scene.toml");
        fs::write(&input, DIMER).unwrap();

        let args = scene_args(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--hide-bonds",
        ]);
        run(args).unwrap();

        let value: toml::Table = toml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["bonds"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dimer.data");
        fs::write(&input, DIMER).unwrap();
        let missing = dir.path().join("missing.toml");

        let args = scene_args(&[input.to_str().unwrap(), "-c", missing.to_str().unwrap()]);
        assert!(matches!(run(args), Err(CliError::Io(_))));
    }
}
