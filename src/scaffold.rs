//! Orchestrates one scaffold: locate tool, init, normalize manifest,
//! materialize files, install dependencies, check the result.

use std::path::{Path, PathBuf};

use crate::check::ProjectValidator;
use crate::constants::MANIFEST_FILE;
use crate::content;
use crate::error::{Error, Result};
use crate::ioutils;
use crate::locator;
use crate::manifest;
use crate::materializer;
use crate::process::{CommandSpec, HostOs};
use crate::report::Reporter;
use crate::variant::Variant;

/// Whether a step's failure stops the scaffold or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Failure surfaces to the caller immediately; later steps do not run.
    Fatal,
    /// Failure goes to the reporter; execution continues.
    BestEffort,
}

/// The steps of the scaffolding state machine, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Locate,
    Init,
    ReadManifest,
    Transform,
    PersistManifest,
    Materialize,
    Install,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Locate => "locate package manager",
            Step::Init => "initialize project",
            Step::ReadManifest => "read manifest",
            Step::Transform => "normalize manifest",
            Step::PersistManifest => "write manifest",
            Step::Materialize => "materialize project files",
            Step::Install => "install dependencies",
        }
    }

    /// The failure policy table. The asymmetry is deliberate: the auxiliary
    /// files are essential to a usable project, while manifest normalization
    /// and dependency installation are best-effort and can be redone by hand.
    pub fn policy(self) -> StepPolicy {
        match self {
            Step::Locate | Step::Materialize => StepPolicy::Fatal,
            Step::Init
            | Step::ReadManifest
            | Step::Transform
            | Step::PersistManifest
            | Step::Install => StepPolicy::BestEffort,
        }
    }
}

/// Looks up an executable; injectable so tests can supply a mock tool.
pub type ToolLocator<'a> = Box<dyn Fn(&str) -> Result<PathBuf> + 'a>;

/// Runs the full scaffolding sequence for one variant.
///
/// Strictly sequential and blocking; the init and install steps wait on the
/// external package manager without a timeout. No rollback is attempted on
/// fatal failure: a failed scaffold leaves a partially populated directory
/// behind for the user to inspect.
pub struct Scaffolder<'a> {
    variant: Variant,
    project_root: PathBuf,
    project_name: String,
    host: HostOs,
    locator: ToolLocator<'a>,
    reporter: &'a dyn Reporter,
    validator: &'a dyn ProjectValidator,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        variant: Variant,
        project_root: impl Into<PathBuf>,
        reporter: &'a dyn Reporter,
        validator: &'a dyn ProjectValidator,
    ) -> Self {
        let project_root = project_root.into();
        let project_name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            variant,
            project_root,
            project_name,
            host: HostOs::current(),
            locator: Box::new(locator::locate_tool),
            reporter,
            validator,
        }
    }

    /// Overrides the host OS descriptor, for tests.
    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    /// Overrides the executable lookup, for tests with a mock tool.
    pub fn with_locator(mut self, locator: impl Fn(&str) -> Result<PathBuf> + 'a) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn run(&self) -> Result<()> {
        // Pre-flight, fatal per the policy table; nothing may be written
        // before the tool resolves.
        let tool = (self.locator)(self.variant.package_manager.binary())?;
        self.reporter.step(&format!(
            "scaffolding '{}' ({}) with {}",
            self.project_name,
            self.variant,
            tool.display()
        ));

        ioutils::create_dir_all(&self.project_root)?;

        let init = CommandSpec::captured(self.variant.init_command(&tool), &self.project_root);
        self.attempt(Step::Init, init.run(self.host))?;

        self.normalize_manifest()?;

        let entries = content::project_files(&self.variant, &self.project_name);
        self.attempt(Step::Materialize, materializer::write_all(&self.project_root, &entries))?;

        let install =
            CommandSpec::interactive(self.variant.install_command(&tool), &self.project_root);
        self.attempt(Step::Install, install.run(self.host))?;

        // Pass-through: the validator's verdict is the scaffold's verdict.
        self.validator
            .check(&self.project_root, &self.project_name, self.variant.platform)
            .map_err(|e| Error::ProjectCheckError(e.to_string()))
    }

    /// Read, transform, and persist the manifest. All three steps are
    /// best-effort; the transform itself is atomic, so a pipeline failure
    /// leaves the on-disk manifest untouched.
    fn normalize_manifest(&self) -> Result<()> {
        let manifest_path = self.project_root.join(MANIFEST_FILE);

        let document = match std::fs::read_to_string(&manifest_path) {
            Ok(document) => document,
            Err(e) => {
                return self.attempt(
                    Step::ReadManifest,
                    Err(Error::ManifestReadError {
                        path: manifest_path.display().to_string(),
                        e: e.to_string(),
                    }),
                );
            }
        };

        let normalized = match manifest::apply(&document, &manifest::normalization_pipeline()) {
            Ok(normalized) => normalized,
            Err(e) => return self.attempt(Step::Transform, Err(e)),
        };

        let persisted = std::fs::write(&manifest_path, normalized).map_err(|e| {
            Error::ManifestWriteError { path: manifest_path.display().to_string(), e: e.to_string() }
        });
        self.attempt(Step::PersistManifest, persisted)
    }

    /// Applies the step's policy to its outcome: fatal failures propagate,
    /// best-effort failures are reported and swallowed.
    fn attempt(&self, step: Step, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                self.reporter.step(step.name());
                Ok(())
            }
            Err(e) => match step.policy() {
                StepPolicy::Fatal => Err(e),
                StepPolicy::BestEffort => {
                    self.reporter.warn(&format!("{} failed, continuing: {e}", step.name()));
                    Ok(())
                }
            },
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
