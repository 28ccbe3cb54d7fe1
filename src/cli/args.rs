use crate::constants::{exit_codes, verbosity};
use crate::variant::{PackageManager, Platform, Runtime};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for botsmith.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the bot project; also the directory created for it.
    #[arg(value_name = "BOT_NAME")]
    pub name: String,

    /// Messaging platform the bot targets.
    #[arg(long, value_enum)]
    pub platform: Platform,

    /// Language runtime of the generated project.
    #[arg(long = "lang", value_enum, default_value = "nodejs")]
    pub runtime: Runtime,

    /// Package manager used to initialize the project and install packages.
    #[arg(short = 'p', long = "package-manager", value_enum)]
    pub package_manager: PackageManager,

    /// Scaffold into an existing directory without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable interactive prompts.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
