//! @acp:module "Pick Command"
//! @acp:summary "Pick a seed or migration and run the hasura command for it"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `hasura-pick seed apply`, `migrate apply` and `migrate delete`.

use anyhow::Result;
use console::style;

use crate::command::CommandRequest;
use crate::config::Config;
use crate::error::PickError;
use crate::operation::OperationKind;
use crate::options::{OptionSet, OptionValue, NAMESPACE_KEY};
use crate::picker::{Outcome, Picker, Prepared};
use crate::runner::{ProcessRunner, RunOutput, Runner};
use crate::selector::{FuzzySelector, PresetSelector, Selector};

/// Options for the pick commands
#[derive(Debug, Clone)]
pub struct PickOptions {
    /// Operation to prepare
    pub kind: OperationKind,
    /// Database whose seeds/migrations are listed (falls back to config)
    pub database_name: Option<String>,
    /// Flags given on the command line, forwarded verbatim
    pub flags: Vec<(String, OptionValue)>,
    /// Candidate to use instead of prompting
    pub pick: Option<String>,
    /// Print the command instead of running it
    pub print: bool,
}

impl PickOptions {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            database_name: None,
            flags: Vec::new(),
            pick: None,
            print: false,
        }
    }

    /// Command-line flags first, then config defaults for anything unset
    pub fn option_set(&self, config: &Config) -> crate::Result<OptionSet> {
        let namespace = self
            .database_name
            .clone()
            .unwrap_or_else(|| config.database_name.clone());
        let mut options = OptionSet::with_namespace(namespace);
        for (key, value) in &self.flags {
            if key != NAMESPACE_KEY {
                options.insert(key.clone(), value.clone());
            }
        }
        options.merge_json(&config.flags)?;
        Ok(options)
    }
}

/// Prints the command line before handing it to the real runner
struct Announcing<'a> {
    inner: &'a dyn Runner,
}

impl Runner for Announcing<'_> {
    fn program(&self) -> &str {
        self.inner.program()
    }

    fn run(&self, command: &CommandRequest) -> crate::Result<RunOutput> {
        println!("running...  {} {}", self.inner.program(), command);
        println!();
        self.inner.run(command)
    }
}

/// Execute a pick command
pub fn execute_pick(options: PickOptions, config: Config) -> Result<()> {
    let option_set = options.option_set(&config)?;
    let picker = Picker::new(options.kind, option_set, config.layout());

    let mut selector: Box<dyn Selector> = match &options.pick {
        Some(name) => Box::new(PresetSelector::new(name.clone())),
        None => Box::new(FuzzySelector::new(format!("{} target", options.kind))),
    };

    if options.print {
        match picker.prepare(selector.as_mut())? {
            Prepared::Command(command) => println!("{} {}", config.hasura_bin, command),
            Prepared::NoOp { candidate } => report_noop(&candidate),
        }
        return Ok(());
    }

    let runner = ProcessRunner::new(config.hasura_bin.clone());
    let announcing = Announcing { inner: &runner };

    match picker.run(selector.as_mut(), &announcing) {
        Ok(Outcome::Ran { output, .. }) => {
            print!("{}", output.output);
            Ok(())
        }
        Ok(Outcome::NoOp { candidate }) => {
            report_noop(&candidate);
            Ok(())
        }
        Err(PickError::SelectionCancelled) => {
            eprintln!("{} Selection cancelled", style("✗").red());
            std::process::exit(1);
        }
        Err(e) => {
            if let Some(output) = e.output() {
                print!("{}", output);
            }
            Err(e.into())
        }
    }
}

fn report_noop(candidate: &str) {
    println!(
        "{} {} has no version prefix, nothing to run",
        style("!").yellow(),
        style(candidate).cyan()
    );
}
