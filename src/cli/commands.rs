use clap::{Parser, Subcommand};

/// Interactive CMake configuration and build wrapper
#[derive(Parser, Debug)]
#[command(
    name = "cmakewiz",
    about = "Interactive CMake configuration and build wrapper",
    version,
    long_about = "cmakewiz checks the installed CMake, asks once for a generator, C++ compiler \
                  and build type, remembers the answer in build_settings.json, and then runs \
                  the configure and build steps. Delete build_settings.json to choose again."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    #[command(
        about = "Configure and build the project (default)",
        long_about = "Probes CMake, runs the settings wizard if no settings are saved, then \
                      configures into ./build and builds with maximum parallelism.\n\n\
                      Examples:\n  \
                      cmakewiz\n  \
                      cmakewiz build -v"
    )]
    Build,

    #[command(about = "Delete everything inside the build and bin directories")]
    Clean,

    #[command(about = "Count lines in the project's C/C++ sources")]
    Lines,

    #[command(about = "Print the saved build settings")]
    Show,
}

impl CliArgs {
    pub fn command_or_default(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }
}
