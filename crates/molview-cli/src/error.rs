use molview::engine::config::ConfigError;
use molview::engine::error::EngineError;
use molview::workflows::load::LoadError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl CliError {
    /// Attributes a load failure to the file it came from; an empty structure stays an engine error.
    pub fn from_load(path: &Path, error: LoadError) -> Self {
        match error {
            LoadError::Engine(e) => CliError::Engine(e),
            LoadError::Read(e) => CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            },
        }
    }
}
