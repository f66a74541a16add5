//! @acp:module "Operation Kinds"
//! @acp:summary "The hasura operations a target can be picked for"
//! @acp:domain cli
//! @acp:layer model

use std::fmt;

/// Which hasura operation is being prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    SeedApply,
    MigrateApply,
    MigrateDelete,
}

/// Directory tree an operation reads its candidates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRoot {
    Seeds,
    Migrations,
}

impl OperationKind {
    /// Leading subcommand tokens passed to hasura
    pub fn subcommand(&self) -> [&'static str; 2] {
        match self {
            OperationKind::SeedApply => ["seed", "apply"],
            OperationKind::MigrateApply => ["migrate", "apply"],
            OperationKind::MigrateDelete => ["migrate", "delete"],
        }
    }

    /// Flag that carries the resolved target
    pub fn target_flag(&self) -> &'static str {
        match self {
            OperationKind::SeedApply => "--file",
            OperationKind::MigrateApply | OperationKind::MigrateDelete => "--version",
        }
    }

    pub fn source_root(&self) -> SourceRoot {
        match self {
            OperationKind::SeedApply => SourceRoot::Seeds,
            OperationKind::MigrateApply | OperationKind::MigrateDelete => SourceRoot::Migrations,
        }
    }

    /// Whether candidates are version-prefixed migration directories
    pub fn is_migration(&self) -> bool {
        self.source_root() == SourceRoot::Migrations
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [group, action] = self.subcommand();
        write!(f, "{} {}", group, action)
    }
}
