//! Final project check run after scaffolding completes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::variant::Platform;

/// Collaborator invoked once at the end of a scaffold with the project name
/// and platform tag. Implementations may perform arbitrary validation; the
/// orchestrator passes the result through unchanged.
pub trait ProjectValidator {
    fn check(&self, project_root: &Path, project_name: &str, platform: Platform)
        -> anyhow::Result<()>;
}

/// Default validator: confirms the essential file set exists on disk.
pub struct FileSetValidator;

const REQUIRED_FILES: &[&str] =
    &["package.json", "src/index.js", "Dockerfile", "Procfile", "resources.md", "src/bot.gif"];

impl ProjectValidator for FileSetValidator {
    fn check(
        &self,
        project_root: &Path,
        project_name: &str,
        platform: Platform,
    ) -> anyhow::Result<()> {
        let mut present: HashSet<PathBuf> = HashSet::new();

        for entry in WalkDir::new(project_root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
        {
            if let Ok(rel) = entry.path().strip_prefix(project_root) {
                present.insert(rel.to_path_buf());
            }
        }

        let missing: Vec<&str> = REQUIRED_FILES
            .iter()
            .filter(|f| !present.contains(Path::new(**f)))
            .copied()
            .collect();

        if missing.is_empty() {
            log::info!("project '{project_name}' ({platform}) passed the file check");
            Ok(())
        } else {
            anyhow::bail!(
                "project '{}' ({}) is missing: {}",
                project_name,
                platform,
                missing.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "x").unwrap();
    }

    #[test]
    fn passes_when_all_required_files_exist() {
        let root = TempDir::new().unwrap();
        for file in REQUIRED_FILES {
            touch(root.path(), file);
        }

        let result = FileSetValidator.check(root.path(), "mybot", Platform::Telegram);
        assert!(result.is_ok());
    }

    #[test]
    fn names_missing_files() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "package.json");
        touch(root.path(), "src/index.js");

        let err =
            FileSetValidator.check(root.path(), "mybot", Platform::Discord).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Dockerfile"));
        assert!(message.contains("resources.md"));
        assert!(!message.contains("package.json,"));
    }
}
