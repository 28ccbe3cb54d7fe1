use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: '{tool}' is not installed or not on PATH.")]
    ToolNotFound { tool: String },

    /// When the external command could not be started at all.
    #[error("Failed to start command '{command}'. Original error: {e}")]
    ProcessSpawnError { command: String, e: String },

    /// When the external command started but exited non-zero.
    #[error("Command '{command}' exited with status: {status}")]
    ProcessFailed { command: String, status: std::process::ExitStatus },

    #[error("Failed to read manifest '{path}'. Original error: {e}")]
    ManifestReadError { path: String, e: String },

    #[error("Failed to write manifest '{path}'. Original error: {e}")]
    ManifestWriteError { path: String, e: String },

    #[error("Malformed manifest: {0}.")]
    MalformedManifest(String),

    /// Aggregate of every file write that failed during materialization.
    #[error("Failed to materialize project files: {}", failures.join("; "))]
    MaterializationFailed { failures: Vec<String> },

    #[error("Cannot proceed: project directory '{project_dir}' already exists. Use --force to overwrite it.")]
    ProjectDirectoryExistsError { project_dir: String },

    #[error("Project check failed: {0}.")]
    ProjectCheckError(String),

    #[error("Prompt error: {0}.")]
    DialoguerError(#[from] dialoguer::Error),
}

/// Convenience type alias for Results with the botsmith Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
