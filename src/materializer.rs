//! Writes the fixed auxiliary file set into the project directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ioutils;

/// One file to materialize: a path relative to the project root, its content,
/// and the permission mode to apply. Entries are independent of each other.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: Vec<u8>,
    pub mode: u32,
}

impl FileEntry {
    pub fn new<P: Into<PathBuf>>(path: P, content: impl Into<Vec<u8>>, mode: u32) -> Self {
        Self { path: path.into(), content: content.into(), mode }
    }
}

/// Writes every entry under `root`, creating parent directories as needed and
/// overwriting existing files.
///
/// Failure policy: every entry is attempted even when an earlier one failed.
/// All failures are collected and reported together as a single
/// [`Error::MaterializationFailed`] naming each failed path; a partial failure
/// never silently drops an entry and never aborts the remaining writes.
pub fn write_all<P: AsRef<Path>>(root: P, entries: &[FileEntry]) -> Result<()> {
    let root = root.as_ref();
    let mut failures = Vec::new();

    for entry in entries {
        let target = root.join(&entry.path);
        let written = ioutils::write_bytes(&entry.content, &target)
            .and_then(|()| ioutils::set_mode(&target, entry.mode));

        if let Err(e) = written {
            failures.push(format!("'{}': {}", entry.path.display(), e));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::MaterializationFailed { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FILE_MODE;
    use tempfile::TempDir;

    #[test]
    fn writes_entries_and_creates_parent_directories() {
        let root = TempDir::new().unwrap();
        let entries = vec![
            FileEntry::new("Procfile", "process: node ./src/index.js", FILE_MODE),
            FileEntry::new("src/index.js", "console.log('hi');\n", FILE_MODE),
        ];

        write_all(root.path(), &entries).unwrap();

        assert!(root.path().join("Procfile").is_file());
        let content = std::fs::read_to_string(root.path().join("src/index.js")).unwrap();
        assert_eq!(content, "console.log('hi');\n");
    }

    #[test]
    fn overwrites_existing_files() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("Dockerfile"), "old").unwrap();

        let entries = vec![FileEntry::new("Dockerfile", "new", FILE_MODE)];
        write_all(root.path(), &entries).unwrap();

        assert_eq!(std::fs::read_to_string(root.path().join("Dockerfile")).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn attempts_every_entry_and_names_exactly_the_failed_paths() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly = root.path().join("frozen");
        std::fs::create_dir(&readonly).unwrap();
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o555)).unwrap();

        let entries = vec![
            FileEntry::new("first.txt", "a", FILE_MODE),
            FileEntry::new("frozen/blocked.txt", "b", FILE_MODE),
            FileEntry::new("second.txt", "c", FILE_MODE),
        ];

        let err = write_all(root.path(), &entries).unwrap_err();

        // Writable entries landed despite the failure in the middle.
        assert!(root.path().join("first.txt").is_file());
        assert!(root.path().join("second.txt").is_file());

        match err {
            Error::MaterializationFailed { failures } => {
                assert_eq!(failures.len(), 1);
                assert!(failures[0].contains("frozen/blocked.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }

        // Restore so TempDir can clean up.
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn applies_the_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let entries = vec![FileEntry::new("run.sh", "#!/bin/sh\n", 0o755)];
        write_all(root.path(), &entries).unwrap();

        let mode = std::fs::metadata(root.path().join("run.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
