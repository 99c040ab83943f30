use crate::action::{Action, ActionError};
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::executor::ExecutorError;

#[derive(Debug, thiserror::Error)]
pub enum ErrInvalidName {
    #[error("container name can't be empty")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum HeaverError {
    #[error("invalid container name")]
    InvalidName(#[from] ErrInvalidName),
    #[error(transparent)]
    InvalidAction(#[from] ActionError),
    /// heaver could not be run or exited unsuccessfully
    #[error("external tool failed")]
    Execution(#[from] ExecutorError),
    /// heaver ran but did not print the expected confirmation
    #[error("could not perform {action}")]
    Protocol { action: Action, output: String },
    #[error("failed to decode image catalog")]
    Decode(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HeaverError {
    /// Raw output of the external tool, when the failure carries one.
    pub fn output(&self) -> Option<&str> {
        match self {
            HeaverError::Execution(err) => err.output(),
            HeaverError::Protocol { output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaverError>;
