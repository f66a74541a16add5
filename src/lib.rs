#![forbid(unsafe_code)]

//! @acp:module "hasura-pick Library"
//! @acp:summary "Pick seeds and migrations and build hasura commands for them"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # hasura-pick
//!
//! Lists the seed files or migration directories of a Hasura project, lets
//! the operator pick one, and runs `hasura seed apply --file <name>` or
//! `hasura migrate apply|delete --version <version>` for it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hpick::{OperationKind, OptionSet, Outcome, Picker, PresetSelector, ProcessRunner, SourceLayout};
//!
//! fn main() -> hpick::Result<()> {
//!     let picker = Picker::new(
//!         OperationKind::MigrateApply,
//!         OptionSet::with_namespace("default"),
//!         SourceLayout::default(),
//!     );
//!
//!     let mut selector = PresetSelector::new("1700000000000_init");
//!     if let Outcome::Ran { output, .. } = picker.run(&mut selector, &ProcessRunner::default())? {
//!         print!("{}", output.output);
//!     }
//!     Ok(())
//! }
//! ```

pub mod candidates;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod operation;
pub mod options;
pub mod picker;
pub mod resolver;
pub mod runner;
pub mod selector;

// Re-exports
pub use candidates::{CandidateLister, SourceLayout};
pub use command::CommandRequest;
pub use config::Config;
pub use error::{PickError, Result};
pub use operation::OperationKind;
pub use options::{OptionSet, OptionValue, NAMESPACE_KEY};
pub use picker::{Outcome, Picker, Prepared};
pub use resolver::resolve;
pub use runner::{ProcessRunner, RunOutput, Runner};
pub use selector::{FuzzySelector, PresetSelector, Selector};
