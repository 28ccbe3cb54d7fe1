//! Executable lookup on the host's search path.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resolves the absolute path of an external tool.
///
/// Read-only search of `PATH`; no side effects. Failure is terminal for the
/// whole scaffolding operation, so the caller gets a distinct error naming the
/// missing tool rather than a generic IO failure.
pub fn locate_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::ToolNotFound { tool: name.to_string() })
}
