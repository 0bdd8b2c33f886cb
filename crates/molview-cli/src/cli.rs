use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "molview CLI - Inspect LAMMPS-style structure files and turn them into render-ready scenes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a structure file and print a summary of its atoms, bonds and atom types.
    Inspect(InspectArgs),
    /// Build a centered, colored scene from a structure file and write it as TOML.
    Scene(SceneArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input structure file (e.g., system.data).
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Drop bond lines with unreadable columns instead of keeping them.
    #[arg(long)]
    pub strict_bonds: bool,
}

/// Arguments for the `scene` subcommand.
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Path to the input structure file (e.g., system.data).
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to a view configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the scene to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- View Overrides ---
    /// Override the atom radius multiplier.
    #[arg(long, value_name = "FLOAT")]
    pub atom_scale: Option<f64>,

    /// Override the bond radius multiplier.
    #[arg(long, value_name = "FLOAT")]
    pub bond_scale: Option<f64>,

    /// Override the material style (realistic, plastic or toon).
    #[arg(long, value_name = "STYLE")]
    pub material: Option<String>,

    /// Override the background color (e.g., '#151515').
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Do not emit bond geometry, overriding the config file.
    #[arg(long)]
    pub hide_bonds: bool,

    /// Drop bond lines with unreadable columns instead of keeping them.
    #[arg(long)]
    pub strict_bonds: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S custom-colors.2=#FF0000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
