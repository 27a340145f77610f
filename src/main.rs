//! Police CLI entry point

use clap::Parser;
use police::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use police::cli::init::InitOutcome;
use police::cli::{ColorChoice, Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    police::logging::init_logging(cli.verbose, cli.color != ColorChoice::Never);
    let color = termcolor::ColorChoice::from(cli.color);

    let exit_code = match cli.command {
        Command::Check {
            paths,
            strict,
            no_strict,
        } => {
            let strict_override = match (strict, no_strict) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            police::cli::check::run_check(&paths, &cli.config, strict_override, color)
        }
        Command::List { format } => police::cli::list::run_list(&cli.config, format),
        Command::Init { force } => match police::cli::init::run_init(&cli.config, force) {
            Ok(InitOutcome::Created) => {
                println!("Created {}.", cli.config.display());
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote {}.", cli.config.display());
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Skipped) => {
                println!(
                    "{} already exists; use --force to overwrite it.",
                    cli.config.display()
                );
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}
