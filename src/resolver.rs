//! @acp:module "Target Resolver"
//! @acp:summary "Derives the --file or --version value from a picked candidate"
//! @acp:domain cli
//! @acp:layer service

use crate::operation::OperationKind;

/// Resolve the value hasura expects for a candidate.
///
/// Seeds are passed by file name. Migrations are passed by the version
/// number their directory name starts with, which is empty when the name
/// has no leading digits.
pub fn resolve(kind: OperationKind, candidate: &str) -> String {
    if kind.is_migration() {
        leading_digits(candidate).to_string()
    } else {
        candidate.to_string()
    }
}

/// The run of ASCII digits at the start of `name`
pub fn leading_digits(name: &str) -> &str {
    let end = name
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(name.len());
    &name[..end]
}
