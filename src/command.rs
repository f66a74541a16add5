//! @acp:module "Command Builder"
//! @acp:summary "Assembles the hasura argument vector for a resolved target"
//! @acp:domain cli
//! @acp:layer service

use std::fmt;

use crate::operation::OperationKind;
use crate::options::OptionSet;

/// A fully assembled hasura invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    args: Vec<String>,
}

impl CommandRequest {
    /// Build the command for `target`, or `None` when the target is empty.
    ///
    /// The argument vector is the operation prefix and target flag followed
    /// by `--<key> <value>` for every option in key order.
    pub fn build(kind: OperationKind, target: &str, options: &OptionSet) -> Option<Self> {
        if target.is_empty() {
            return None;
        }

        let [group, action] = kind.subcommand();
        let mut args = Vec::with_capacity(4 + options.len() * 2);
        args.push(group.to_string());
        args.push(action.to_string());
        args.push(kind.target_flag().to_string());
        args.push(target.to_string());

        for (key, value) in options {
            args.push(format!("--{}", key));
            args.push(value.to_string());
        }

        Some(Self { args })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}
