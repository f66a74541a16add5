//! Picker integration tests
//!
//! End-to-end checks of listing, selecting, resolving and building commands
//! against a throwaway Hasura project tree.

use std::cell::RefCell;
use std::path::Path;

use hpick::{
    CandidateLister, CommandRequest, OperationKind, OptionSet, Outcome, PickError, Picker,
    Prepared, PresetSelector, RunOutput, Runner, Selector, SourceLayout,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn hasura_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let seeds = root.join("seeds/app");
    std::fs::create_dir_all(&seeds).unwrap();
    std::fs::write(seeds.join("001_users.sql"), "INSERT INTO users VALUES (1);").unwrap();
    std::fs::write(seeds.join("002_posts.sql"), "INSERT INTO posts VALUES (1);").unwrap();

    for name in ["0003_create_users", "0007_add_index", "manual_fix"] {
        let dir = root.join("migrations/app").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("up.sql"), "").unwrap();
    }
    std::fs::write(root.join("migrations/app/notes.txt"), "").unwrap();

    temp
}

fn picker(kind: OperationKind, root: &Path, options: OptionSet) -> Picker {
    Picker::new(kind, options, SourceLayout::under(root))
}

/// Runner that records commands instead of spawning hasura
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Vec<String>>>,
}

impl Runner for Recorder {
    fn program(&self) -> &str {
        "hasura"
    }

    fn run(&self, command: &CommandRequest) -> hpick::Result<RunOutput> {
        self.calls.borrow_mut().push(command.args().to_vec());
        Ok(RunOutput {
            output: "INFO migrations applied\n".to_string(),
        })
    }
}

/// Runner that always reports a failed hasura run
struct Failing;

impl Runner for Failing {
    fn program(&self) -> &str {
        "hasura"
    }

    fn run(&self, _command: &CommandRequest) -> hpick::Result<RunOutput> {
        Err(PickError::SubprocessFailed {
            status: Some(1),
            output: "FATA version not found\n".to_string(),
        })
    }
}

/// Selector standing in for an operator who presses Esc
struct Cancelling;

impl Selector for Cancelling {
    fn select(&mut self, _candidates: &[String]) -> hpick::Result<String> {
        Err(PickError::SelectionCancelled)
    }
}

/// Selector that records what it was offered and picks the last entry
#[derive(Default)]
struct PickLast {
    offered: Vec<String>,
}

impl Selector for PickLast {
    fn select(&mut self, candidates: &[String]) -> hpick::Result<String> {
        self.offered = candidates.to_vec();
        candidates.last().cloned().ok_or(PickError::EmptyCandidates)
    }
}

// =============================================================================
// Candidate listing
// =============================================================================

mod listing_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seed_candidates_are_sorted_files() {
        let project = hasura_project();
        let mut selector = PickLast::default();
        let picker = picker(
            OperationKind::SeedApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );

        picker.prepare(&mut selector).unwrap();
        assert_eq!(selector.offered, vec!["001_users.sql", "002_posts.sql"]);
    }

    #[test]
    fn test_migration_candidates_are_directories() {
        let project = hasura_project();
        let lister = CandidateLister::new(SourceLayout::under(project.path()));
        let names = lister.list(OperationKind::MigrateDelete, "app").unwrap();
        assert_eq!(
            names,
            vec!["0003_create_users", "0007_add_index", "manual_fix"]
        );
    }

    #[test]
    fn test_unknown_database_is_unavailable() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::MigrateApply,
            project.path(),
            OptionSet::with_namespace("analytics"),
        );
        let mut selector = PickLast::default();

        let err = picker.prepare(&mut selector).unwrap_err();
        assert!(matches!(err, PickError::DirectoryUnavailable { .. }));
        assert!(selector.offered.is_empty());
    }

    #[test]
    fn test_directory_without_eligible_entries_is_unavailable() {
        let project = TempDir::new().unwrap();
        let seeds = project.path().join("seeds/app");
        std::fs::create_dir_all(seeds.join("nested")).unwrap();

        let lister = CandidateLister::new(SourceLayout::under(project.path()));
        assert!(matches!(
            lister.list(OperationKind::SeedApply, "app"),
            Err(PickError::DirectoryUnavailable { .. })
        ));
    }
}

// =============================================================================
// Command construction
// =============================================================================

mod command_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_migrate_apply_uses_version_prefix() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::MigrateApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );

        let prepared = picker
            .prepare(&mut PresetSelector::new("0003_create_users"))
            .unwrap();
        let Prepared::Command(command) = prepared else {
            panic!("expected a command");
        };
        assert_eq!(
            command.into_args(),
            vec!["migrate", "apply", "--version", "0003", "--database-name", "app"]
        );
    }

    #[test]
    fn test_seed_apply_uses_file_name_and_flags() {
        let project = hasura_project();
        let mut options = OptionSet::with_namespace("app");
        options.insert("dry-run", true);
        options.insert("endpoint", "http://localhost:8080");
        let picker = picker(OperationKind::SeedApply, project.path(), options);

        let prepared = picker
            .prepare(&mut PresetSelector::new("001_users.sql"))
            .unwrap();
        let Prepared::Command(command) = prepared else {
            panic!("expected a command");
        };
        assert_eq!(
            command.to_string(),
            "seed apply --file 001_users.sql --database-name app --dry-run true --endpoint http://localhost:8080"
        );
    }

    #[test]
    fn test_unversioned_migration_is_noop() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::MigrateApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );
        let recorder = Recorder::default();

        let outcome = picker
            .run(&mut PresetSelector::new("manual_fix"), &recorder)
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::NoOp {
                candidate: "manual_fix".to_string()
            }
        );
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_repeated_runs_build_identical_commands() {
        let project = hasura_project();
        let mut options = OptionSet::with_namespace("app");
        options.insert("admin-secret", "secret");
        options.insert("skip-execution", false);
        let picker = picker(OperationKind::MigrateDelete, project.path(), options);
        let recorder = Recorder::default();

        for _ in 0..2 {
            picker
                .run(&mut PresetSelector::new("0007_add_index"), &recorder)
                .unwrap();
        }

        let calls = recorder.calls.into_inner();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            calls[0],
            vec![
                "migrate",
                "delete",
                "--version",
                "0007",
                "--admin-secret",
                "secret",
                "--database-name",
                "app",
                "--skip-execution",
                "false"
            ]
        );
    }
}

// =============================================================================
// Error propagation
// =============================================================================

mod error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cancelled_selection_builds_nothing() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::SeedApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );
        let recorder = Recorder::default();

        let err = picker.run(&mut Cancelling, &recorder).unwrap_err();
        assert!(matches!(err, PickError::SelectionCancelled));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_subprocess_failure_is_passed_through() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::MigrateApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );

        let err = picker
            .run(&mut PresetSelector::new("0007_add_index"), &Failing)
            .unwrap_err();
        assert_eq!(err.output(), Some("FATA version not found\n"));
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let project = hasura_project();
        let picker = picker(
            OperationKind::SeedApply,
            project.path(),
            OptionSet::with_namespace("app"),
        );

        let err = picker
            .prepare(&mut PresetSelector::new("003_tags.sql"))
            .unwrap_err();
        assert!(matches!(err, PickError::UnknownCandidate(_)));
    }
}
