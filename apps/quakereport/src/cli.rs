use quake_core::usgs::OrderBy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "quakereport",
    version,
    about = "List recent earthquakes from the USGS feed"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Log at trace level")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        env = "QUAKEREPORT_CONFIG_DIR",
        help = "Directory holding config.json and quakereport.log"
    )]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and list earthquakes
    Fetch(FetchArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FetchArgs {
    #[arg(long, help = "Full query URL; overrides the configured endpoint and filters")]
    pub url: Option<String>,
    #[arg(long)]
    pub min_magnitude: Option<f64>,
    #[arg(long, value_enum)]
    pub order_by: Option<SortOrder>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long, help = "Drop malformed features instead of failing the whole response")]
    pub skip_malformed: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Time,
    Magnitude,
}

impl From<SortOrder> for OrderBy {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Time => OrderBy::Time,
            SortOrder::Magnitude => OrderBy::Magnitude,
        }
    }
}
