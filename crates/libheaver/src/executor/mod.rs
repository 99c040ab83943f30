//! Running the external tools
//! This is the only place where the driver touches the operating system, so the
//! rest of the crate can be exercised against canned answers.

pub mod process;
pub mod test;

use std::any::Any;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use process::ProcessExecutor;
pub use test::TestExecutor;

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("failed to spawn {program:?}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to wait for {program:?}")]
    Wait {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("{program:?} exited unsuccessfully (code {code:?}): {output}")]
    Failed {
        program: PathBuf,
        code: Option<i32>,
        output: String,
    },
    #[error("{program:?} did not finish within {timeout:?}")]
    Timeout { program: PathBuf, timeout: Duration },
}

impl ExecutorError {
    /// Output captured from a process that ran but failed
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecutorError::Failed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Runs a program to completion and captures its standard output.
/// `argv[0]` is the name the program is invoked as, the remaining elements are its arguments.
pub trait Executor: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn run(&self, program: &Path, argv: &[String]) -> Result<Vec<u8>, ExecutorError>;
}

#[derive(Clone, Copy, Debug)]
pub enum ExecutorType {
    Process,
    Test,
}

impl Default for ExecutorType {
    fn default() -> Self {
        if cfg!(test) {
            ExecutorType::Test
        } else {
            ExecutorType::Process
        }
    }
}

impl ExecutorType {
    pub fn create_executor(&self, timeout: Option<Duration>) -> Box<dyn Executor> {
        match self {
            ExecutorType::Process => Box::new(ProcessExecutor::new(timeout)),
            ExecutorType::Test => Box::<TestExecutor>::default(),
        }
    }
}

pub fn create_executor(timeout: Option<Duration>) -> Box<dyn Executor> {
    ExecutorType::default().create_executor(timeout)
}
