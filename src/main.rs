use cmakewiz::cli::handlers::{check_config, handle_build, handle_clean, handle_lines, handle_show};
use cmakewiz::cli::{CliArgs, Commands};
use cmakewiz::util::{init_logging, LoggingConfig};
use cmakewiz::{WizardConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("cmakewiz v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = WizardConfig::default();
    if let Err(code) = check_config(&config) {
        std::process::exit(code);
    }

    let exit_code = match args.command_or_default() {
        Commands::Build => handle_build(&config),
        Commands::Clean => handle_clean(&config),
        Commands::Lines => handle_lines(&config),
        Commands::Show => handle_show(&config),
    };

    std::process::exit(exit_code);
}
