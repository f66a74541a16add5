//! @acp:module "Picker"
//! @acp:summary "Runs one list, select, resolve, build, run cycle"
//! @acp:domain cli
//! @acp:layer service
//!
//! Every invocation reads a fresh directory listing; nothing is cached
//! between runs.

use crate::candidates::{CandidateLister, SourceLayout};
use crate::command::CommandRequest;
use crate::error::{PickError, Result};
use crate::operation::OperationKind;
use crate::options::OptionSet;
use crate::resolver;
use crate::runner::{RunOutput, Runner};
use crate::selector::Selector;

/// What a picker run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran successfully
    Ran {
        command: CommandRequest,
        output: RunOutput,
    },
    /// The picked candidate resolved to no target; nothing was run
    NoOp { candidate: String },
}

/// A command that is ready to run, or the candidate that produced none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    Command(CommandRequest),
    NoOp { candidate: String },
}

/// Picks a target for one operation and builds the hasura command for it
#[derive(Debug, Clone)]
pub struct Picker {
    kind: OperationKind,
    options: OptionSet,
    lister: CandidateLister,
}

impl Picker {
    pub fn new(kind: OperationKind, options: OptionSet, layout: SourceLayout) -> Self {
        Self {
            kind,
            options,
            lister: CandidateLister::new(layout),
        }
    }

    /// List the candidates for this operation
    pub fn candidates(&self) -> Result<Vec<String>> {
        let namespace = self.options.namespace().ok_or(PickError::MissingNamespace)?;
        self.lister.list(self.kind, namespace)
    }

    /// List, select, resolve and build without running anything
    pub fn prepare(&self, selector: &mut dyn Selector) -> Result<Prepared> {
        let candidates = self.candidates()?;
        let candidate = selector.select(&candidates)?;
        let target = resolver::resolve(self.kind, &candidate);
        tracing::debug!("Resolved {} to target {:?}", candidate, target);

        match CommandRequest::build(self.kind, &target, &self.options) {
            Some(command) => Ok(Prepared::Command(command)),
            None => {
                tracing::debug!("{} has no version prefix; nothing to run", candidate);
                Ok(Prepared::NoOp { candidate })
            }
        }
    }

    /// Prepare the command and hand it to `runner`
    pub fn run(&self, selector: &mut dyn Selector, runner: &dyn Runner) -> Result<Outcome> {
        match self.prepare(selector)? {
            Prepared::Command(command) => {
                tracing::info!("Running {} {}", runner.program(), command);
                let output = runner.run(&command)?;
                Ok(Outcome::Ran { command, output })
            }
            Prepared::NoOp { candidate } => Ok(Outcome::NoOp { candidate }),
        }
    }
}
