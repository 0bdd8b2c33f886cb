use crate::cli::SceneArgs;
use crate::error::{CliError, Result};
use molview::core::chem::color::Color;
use molview::engine::config::{MaterialStyle, ViewConfig, ViewConfigBuilder};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// View settings as written in a TOML config file; every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialViewConfig {
    atom_scale: Option<f64>,
    bond_scale: Option<f64>,
    material: Option<MaterialStyle>,
    background: Option<Color>,
    show_bonds: Option<bool>,
    /// Keyed by atom type id written as a string, e.g. `"2" = "#FF0000"`.
    custom_colors: Option<BTreeMap<String, Color>>,
}

impl PartialViewConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading view configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final view configuration.
    ///
    /// Precedence is `--set` values, then dedicated flags, then the file, then the defaults.
    pub fn merge_with_cli(self, args: &SceneArgs) -> Result<ViewConfig> {
        let mut overrides = Self::default();
        overrides.apply_set_values(&args.set_values)?;

        let builder = self.apply_to(ViewConfigBuilder::new())?;
        let builder = apply_flags(builder, args)?;
        let builder = overrides.apply_to(builder)?;

        Ok(builder.build()?)
    }

    fn apply_to(self, mut builder: ViewConfigBuilder) -> Result<ViewConfigBuilder> {
        if let Some(scale) = self.atom_scale {
            builder = builder.atom_scale(scale);
        }
        if let Some(scale) = self.bond_scale {
            builder = builder.bond_scale(scale);
        }
        if let Some(material) = self.material {
            builder = builder.material(material);
        }
        if let Some(color) = self.background {
            builder = builder.background(color);
        }
        if let Some(show) = self.show_bonds {
            builder = builder.show_bonds(show);
        }
        if let Some(colors) = self.custom_colors {
            builder = builder.custom_colors(parse_color_keys(colors)?);
        }
        Ok(builder)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "atom-scale" => self.atom_scale = Some(parse_value(key, value_str)?),
                "bond-scale" => self.bond_scale = Some(parse_value(key, value_str)?),
                "material" => self.material = Some(parse_value(key, value_str)?),
                "background" => self.background = Some(parse_value(key, value_str)?),
                "show-bonds" => self.show_bonds = Some(parse_value(key, value_str)?),
                _ => match key.strip_prefix("custom-colors.") {
                    Some(type_id) => {
                        let color = parse_value(key, value_str)?;
                        self.custom_colors
                            .get_or_insert_with(Default::default)
                            .insert(type_id.to_string(), color);
                    }
                    None => {
                        return Err(CliError::Config(format!(
                            "Unsupported configuration key for --set: '{}'",
                            key
                        )));
                    }
                },
            }
        }
        Ok(())
    }
}

fn apply_flags(mut builder: ViewConfigBuilder, args: &SceneArgs) -> Result<ViewConfigBuilder> {
    if let Some(scale) = args.atom_scale {
        builder = builder.atom_scale(scale);
    }
    if let Some(scale) = args.bond_scale {
        builder = builder.bond_scale(scale);
    }
    if let Some(material) = &args.material {
        let material =
            MaterialStyle::from_str(material).map_err(|e| CliError::Argument(e.to_string()))?;
        builder = builder.material(material);
    }
    if let Some(background) = &args.background {
        let color = Color::from_str(background).map_err(|e| CliError::Argument(e.to_string()))?;
        builder = builder.background(color);
    }
    if args.hide_bonds {
        builder = builder.show_bonds(false);
    }
    Ok(builder)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value_str)))
}

fn parse_color_keys(colors: BTreeMap<String, Color>) -> Result<BTreeMap<i64, Color>> {
    colors
        .into_iter()
        .map(|(key, color)| {
            key.trim()
                .parse::<i64>()
                .map(|type_id| (type_id, color))
                .map_err(|_| {
                    CliError::Config(format!(
                        "Invalid atom type id in custom-colors: '{}'",
                        key
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("view.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn scene_args(extra: &[&str]) -> SceneArgs {
        let mut argv = vec!["molview", "scene", "in.data"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Scene(args) => args,
            _ => panic!("Expected 'scene' subcommand"),
        }
    }

    #[test]
    fn load_from_file_and_merge_with_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r##"
            atom-scale = 1.5
            material = "plastic"
            background = "#ffffff"

            [custom-colors]
            "2" = "#00FF00"
            "##,
        );

        let partial = PartialViewConfig::from_file(&path).unwrap();
        let config = partial.merge_with_cli(&scene_args(&[])).unwrap();

        assert_eq!(config.atom_scale, 1.5);
        assert_eq!(config.bond_scale, 1.0);
        assert_eq!(config.material, MaterialStyle::Plastic);
        assert_eq!(config.background, Color::from_hex(0xFFFFFF));
        assert!(config.show_bonds);
        assert_eq!(config.custom_colors[&2], Color::from_hex(0x00FF00));
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "atom-scale = 1.5\nbond-scale = 2.0\nmaterial = \"plastic\"\nshow-bonds = true\n",
        );

        let partial = PartialViewConfig::from_file(&path).unwrap();
        let args = scene_args(&[
            "--atom-scale",
            "0.5",
            "--material",
            "Toon",
            "--background",
            "#000000",
            "--hide-bonds",
        ]);
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.atom_scale, 0.5);
        assert_eq!(config.bond_scale, 2.0);
        assert_eq!(config.material, MaterialStyle::Toon);
        assert_eq!(config.background, Color::from_hex(0x000000));
        assert!(!config.show_bonds);
    }

    #[test]
    fn set_values_override_flags_and_file() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "bond-scale = 2.0\n[custom-colors]\n\"1\" = \"#111111\"\n");

        let partial = PartialViewConfig::from_file(&path).unwrap();
        let args = scene_args(&[
            "--atom-scale",
            "0.5",
            "-S",
            "atom-scale=3.0",
            "-S",
            "custom-colors.1=#222222",
            "-S",
            "custom-colors.4=#444444",
            "-S",
            "show-bonds=false",
        ]);
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.atom_scale, 3.0);
        assert_eq!(config.bond_scale, 2.0);
        assert!(!config.show_bonds);
        assert_eq!(config.custom_colors[&1], Color::from_hex(0x222222));
        assert_eq!(config.custom_colors[&4], Color::from_hex(0x444444));
    }

    #[test]
    fn no_file_and_no_flags_yields_defaults() {
        let config = PartialViewConfig::default()
            .merge_with_cli(&scene_args(&[]))
            .unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn unknown_key_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "atom-size = 2.0\n");
        let result = PartialViewConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn invalid_color_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "background = \"151515\"\n");
        assert!(PartialViewConfig::from_file(&path).is_err());
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in ["atom-scale", "atom-scale=big", "opacity=0.5", "custom-colors.1=red"] {
            let args = scene_args(&["-S", bad]);
            let result = PartialViewConfig::default().merge_with_cli(&args);
            assert!(matches!(result, Err(CliError::Config(_))), "accepted '{}'", bad);
        }
    }

    #[test]
    fn non_numeric_color_key_is_rejected() {
        let args = scene_args(&["-S", "custom-colors.water=#0000FF"]);
        let result = PartialViewConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_scale_is_reported_as_config_error() {
        let args = scene_args(&["--bond-scale", "0"]);
        let result = PartialViewConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_flag_values_are_argument_errors() {
        let args = scene_args(&["--material", "glass"]);
        let result = PartialViewConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(_))));

        let args = scene_args(&["--background", "#12"]);
        let result = PartialViewConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
