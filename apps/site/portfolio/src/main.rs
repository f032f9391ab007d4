use portfolio::cli::{Cli, Command};
use portfolio::commands;
use portfolio::logger::{default_log_dir, initialize as LoggerInitialize, level_for};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    // Load .env before parsing so PORTFOLIO_* variables can come from it
    let env_file = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(e) = LoggerInitialize(&log_dir, level_for(cli.verbose)) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }
    info!("Log directory: {}", log_dir.display());

    let json = matches!(cli.command, Command::Check { json: true });

    match commands::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            if json {
                match serde_json::to_string_pretty(&e) {
                    Ok(report) => println!("{report}"),
                    Err(_) => eprintln!("{e}"),
                }
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
