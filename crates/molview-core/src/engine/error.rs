use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No atoms found in data. Check the format.")]
    EmptyStructure,
}
