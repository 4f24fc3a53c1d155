use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for GeoTimbra
#[derive(Parser)]
#[command(
    name = "geotimbra",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time clock: punch in/out with geolocation and review your monthly timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Log in with this email instead of the configured one
    #[arg(global = true, long = "email")]
    pub email: Option<String>,

    /// Log in with this password instead of the configured one
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (default config, no config file update, no simulated latency)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database (with sample data)
    Init {
        #[arg(long = "no-seed", help = "Do not insert the sample punches")]
        no_seed: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Show whether you are in service and your last punch
    Status,

    /// Punch in or out (toggles from your last punch)
    Clock {
        /// Latitude of the punch (overrides the configured location source)
        #[arg(long = "lat", requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the punch (overrides the configured location source)
        #[arg(long = "lon", requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Show the monthly timesheet grouped by day
    Timesheet {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        period: Option<String>,
    },

    /// Show entry and exit details for one day
    Detail {
        /// Day to show (YYYY-MM-DD)
        date: String,
    },

    /// Interactive mode with home, timesheet and detail screens
    App,

    /// Export your punches
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (start:end)"
        )]
        period: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import punches from a JSON export or a browser `timbrature` document
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
