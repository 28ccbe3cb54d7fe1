//! The (platform, runtime, package-manager) coordinate that selects which
//! template content and package-manager commands apply.

use clap::ValueEnum;
use std::fmt::Display;

/// Messaging platform the bot targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Discord,
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::Telegram => "telegram",
            Platform::Discord => "discord",
        };
        write!(f, "{s}")
    }
}

/// Language runtime of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Runtime {
    Nodejs,
}

impl Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Nodejs => write!(f, "nodejs"),
        }
    }
}

/// Package manager used for init and dependency installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Name of the binary looked up on PATH.
    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments of the project-init subcommand.
    ///
    /// npm and yarn prompt interactively under plain `init`; `-y` keeps them
    /// non-interactive since init runs with captured output.
    pub fn init_args(self) -> &'static str {
        match self {
            PackageManager::Pnpm => "init",
            PackageManager::Npm | PackageManager::Yarn => "init -y",
        }
    }

    /// Arguments of the dependency-install subcommand.
    pub fn add_args(self) -> &'static str {
        "add"
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Immutable coordinate selecting one template variant. Created once per
/// invocation and handed through the whole scaffold.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub platform: Platform,
    pub runtime: Runtime,
    pub package_manager: PackageManager,
}

impl Variant {
    pub fn new(platform: Platform, runtime: Runtime, package_manager: PackageManager) -> Self {
        Self { platform, runtime, package_manager }
    }

    /// Space-separated package list installed for this variant.
    pub fn packages(&self) -> &'static str {
        match (self.platform, self.runtime) {
            (Platform::Telegram, Runtime::Nodejs) => "telegraf dotenv",
            (Platform::Discord, Runtime::Nodejs) => "discord.js dotenv",
        }
    }

    /// Shell line for the package manager's init command.
    pub fn init_command(&self, tool: &std::path::Path) -> String {
        format!("{} {}", tool.display(), self.package_manager.init_args())
    }

    /// Shell line for the dependency-install command.
    pub fn install_command(&self, tool: &std::path::Path) -> String {
        format!("{} {} {}", tool.display(), self.package_manager.add_args(), self.packages())
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.platform, self.runtime, self.package_manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn init_command_includes_resolved_tool_path() {
        let variant = Variant::new(Platform::Telegram, Runtime::Nodejs, PackageManager::Pnpm);
        assert_eq!(variant.init_command(Path::new("/usr/bin/pnpm")), "/usr/bin/pnpm init");
    }

    #[test]
    fn npm_init_is_non_interactive() {
        let variant = Variant::new(Platform::Telegram, Runtime::Nodejs, PackageManager::Npm);
        assert_eq!(variant.init_command(Path::new("npm")), "npm init -y");
    }

    #[test]
    fn install_command_joins_package_list() {
        let variant = Variant::new(Platform::Discord, Runtime::Nodejs, PackageManager::Yarn);
        assert_eq!(
            variant.install_command(Path::new("yarn")),
            "yarn add discord.js dotenv"
        );
    }
}
