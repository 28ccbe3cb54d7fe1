/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used across the crate.
pub mod constants;

/// The (platform, runtime, package-manager) variant coordinate.
pub mod variant;

/// Static boilerplate content per variant.
pub mod content;

/// Executable lookup on the host search path.
pub mod locator;

/// External command invocation with per-OS shell selection.
pub mod process;

/// Package-manifest normalization pipeline.
pub mod manifest;

/// Writing the auxiliary project file set.
pub mod materializer;

/// The scaffolding orchestrator and its step policy table.
pub mod scaffold;

/// Progress and failure reporting interfaces.
pub mod report;

/// Post-scaffold project validation.
pub mod check;

/// User confirmation prompts.
pub mod dialoguer;

/// A set of helpers for working with the file system.
pub mod ioutils;
