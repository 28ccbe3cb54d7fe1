use std::path::PathBuf;

use crate::{
    check::FileSetValidator,
    cli::Args,
    dialoguer::confirm,
    error::{Error, Result},
    report::LogReporter,
    scaffold::Scaffolder,
    variant::Variant,
};

/// Main CLI runner that orchestrates one project scaffold.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let variant =
            Variant::new(self.args.platform, self.args.runtime, self.args.package_manager);
        let project_root = self.resolve_project_root()?;

        let reporter = LogReporter;
        let validator = FileSetValidator;
        let scaffolder = Scaffolder::new(variant, &project_root, &reporter, &validator);
        scaffolder.run()?;

        println!(
            "Bot project '{}' ({}) created in {}.",
            self.args.name,
            variant,
            project_root.display()
        );
        Ok(())
    }

    /// Resolves the target directory, asking before reusing an existing one.
    fn resolve_project_root(&self) -> Result<PathBuf> {
        let project_root = PathBuf::from(&self.args.name);

        if project_root.exists() && !self.args.force {
            if self.args.non_interactive {
                return Err(Error::ProjectDirectoryExistsError {
                    project_dir: project_root.display().to_string(),
                });
            }

            let proceed = confirm(
                false,
                format!(
                    "Directory '{}' already exists. Scaffold into it anyway?",
                    project_root.display()
                ),
            )?;

            if !proceed {
                return Err(Error::ProjectDirectoryExistsError {
                    project_dir: project_root.display().to_string(),
                });
            }
        }

        Ok(project_root)
    }
}

/// Entry point used by the binary.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
