use anyhow::Result;
use clap::{Parser, Subcommand};
use common::ColorScheme;
use std::path::PathBuf;

pub mod commands;

use commands::{InspectSource, inspect, serve};

#[derive(Parser)]
#[command(name = "portfolio-treemap")]
#[command(about = "Portfolio treemap data service and inspection tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve holdings at GET /portfolio
    Serve {
        /// JSON file with the holdings to serve
        ///
        /// The file must contain an array whose entries are either
        /// `{"symbol": "AAPL", "weight": 25}` objects or `["AAPL", 25]` pairs.
        /// When omitted, a built-in sample portfolio is served.
        #[arg(long, env = "HOLDINGS_FILE")]
        holdings_file: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:5000")]
        bind_address: String,
    },
    /// Normalize a portfolio and print its slices
    ///
    /// Reads holdings from a file, or fetches them from a running data
    /// service, and prints each slice with its percentage and color.
    Inspect {
        /// Portfolio endpoint to fetch from
        #[arg(short, long, env = "PORTFOLIO_URL", default_value = "http://localhost:5000/portfolio")]
        url: String,

        /// Read holdings from this JSON file instead of fetching
        ///
        /// Takes precedence over --url.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Color scheme: palette or spectrum
        #[arg(short, long, default_value_t = ColorScheme::Palette)]
        scheme: ColorScheme,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { holdings_file, bind_address } => {
                serve(holdings_file.as_deref(), &bind_address).await?;
            }
            Commands::Inspect { url, file, scheme } => {
                let source = match file {
                    Some(path) => InspectSource::File(path),
                    None => InspectSource::Url(url),
                };
                inspect(source, scheme).await?;
            }
        }
        Ok(())
    }
}
