//! @acp:module "Candidate Lister"
//! @acp:summary "Lists the seed files or migration directories for a database"
//! @acp:domain cli
//! @acp:layer service
//!
//! Seeds live in `<seeds>/<database>/<file>`, migrations in
//! `<migrations>/<database>/<version>_<name>/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PickError, Result};
use crate::operation::{OperationKind, SourceRoot};

/// Where seed and migration trees live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub seeds_dir: PathBuf,
    pub migrations_dir: PathBuf,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self::under(".")
    }
}

impl SourceLayout {
    /// Standard hasura project layout below `project_dir`
    pub fn under<P: AsRef<Path>>(project_dir: P) -> Self {
        let root = project_dir.as_ref();
        Self {
            seeds_dir: root.join("seeds"),
            migrations_dir: root.join("migrations"),
        }
    }

    /// Directory holding the candidates of `kind` for `namespace`
    pub fn directory_for(&self, kind: OperationKind, namespace: &str) -> PathBuf {
        match kind.source_root() {
            SourceRoot::Seeds => self.seeds_dir.join(namespace),
            SourceRoot::Migrations => self.migrations_dir.join(namespace),
        }
    }
}

/// Lists candidate names for an operation
#[derive(Debug, Clone, Default)]
pub struct CandidateLister {
    layout: SourceLayout,
}

impl CandidateLister {
    pub fn new(layout: SourceLayout) -> Self {
        Self { layout }
    }

    /// List eligible entries, sorted by name.
    ///
    /// Seeds keep regular files only, migrations keep directories only.
    /// A missing or unreadable directory and a directory without eligible
    /// entries both fail with [`PickError::DirectoryUnavailable`].
    pub fn list(&self, kind: OperationKind, namespace: &str) -> Result<Vec<String>> {
        if namespace.is_empty() {
            return Err(PickError::MissingNamespace);
        }

        let dir = self.layout.directory_for(kind, namespace);
        let unavailable = |reason: String| PickError::DirectoryUnavailable {
            path: dir.clone(),
            reason,
        };

        let entries = fs::read_dir(&dir).map_err(|e| unavailable(e.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| unavailable(e.to_string()))?;
            // Follows symlinks, so a linked seed file still counts as a file
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            let eligible = match kind.source_root() {
                SourceRoot::Seeds => metadata.is_file(),
                SourceRoot::Migrations => metadata.is_dir(),
            };
            if !eligible {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!("Skipping non UTF-8 entry name: {:?}", raw),
            }
        }

        if names.is_empty() {
            let expected = match kind.source_root() {
                SourceRoot::Seeds => "no seed files",
                SourceRoot::Migrations => "no migration directories",
            };
            return Err(unavailable(expected.to_string()));
        }

        names.sort();
        tracing::debug!("Found {} candidates in {}", names.len(), dir.display());
        Ok(names)
    }
}
