//! @acp:module "Command Runner"
//! @acp:summary "Executes an assembled command as a subprocess"
//! @acp:domain cli
//! @acp:layer service

use std::process::Command;

use crate::command::CommandRequest;
use crate::error::{PickError, Result};

/// Program invoked when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "hasura";

/// Output of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// stdout followed by stderr
    pub output: String,
}

/// Executes a command request
pub trait Runner {
    /// Program name shown to the operator
    fn program(&self) -> &str;

    fn run(&self, command: &CommandRequest) -> Result<RunOutput>;
}

/// Runs the request as a child process and waits for it
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Runner for ProcessRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, command: &CommandRequest) -> Result<RunOutput> {
        tracing::debug!("Spawning {} with {} args", self.program, command.args().len());

        let result = Command::new(&self.program)
            .args(command.args())
            .output()
            .map_err(|source| PickError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        let mut output = String::from_utf8_lossy(&result.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&result.stderr));

        if result.status.success() {
            Ok(RunOutput { output })
        } else {
            Err(PickError::SubprocessFailed {
                status: result.status.code(),
                output,
            })
        }
    }
}
