use std::process;

use anyhow::Result;
use clap::Parser;

use callguard::cli::{Cli, Commands};
use callguard::config::{self, ConfigService};
use callguard::domain;
use callguard::service::CallService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    match cli.command {
        Commands::Call => {
            let service = CallService::new(&config)?;
            let exit_code = service.run()?;
            process::exit(exit_code);
        }
        Commands::Plan => {
            let service = CallService::new(&config)?;
            for (command, filters) in service.plan()? {
                if filters.is_empty() {
                    println!("{}: (none)", command);
                } else {
                    println!("{}: {}", command, filters.join(" -> "));
                }
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("callguard {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
