use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio",
    version,
    about = "Render the single-page portfolio site",
    long_about = "Renders the portfolio page from portfolio.toml.\n\n\
                  Commands:\n  \
                  build   Write index.html and styles.css to an output directory\n  \
                  render  Print the rendered page to stdout\n  \
                  check   Load and validate the configuration"
)]
pub struct Cli {
    /// Path to the site configuration (missing file = built-in content)
    #[arg(
        long,
        global = true,
        env = "PORTFOLIO_CONFIG",
        default_value = "portfolio.toml"
    )]
    pub config: PathBuf,

    /// Directory for portfolio.log (default: platform data dir)
    #[arg(long, global = true, env = "PORTFOLIO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log everything, down to per-batch traces
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the site to an output directory
    Build {
        #[arg(long, env = "PORTFOLIO_OUT_DIR", default_value = "dist")]
        out: PathBuf,
    },

    /// Print the rendered page to stdout
    Render,

    /// Validate the configuration
    Check {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
