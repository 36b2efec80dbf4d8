use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ngotrack
/// CLI application to track NGOs and donations with JSON storage
#[derive(Parser)]
#[command(
    name = "ngotrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple NGO tracking CLI: manage NGOs, record donations and chart the top recipients",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file
    Config {
        /// Print the active configuration
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,
    },

    /// List NGOs
    List {
        /// Rank by total donations instead of insertion order.
        ///
        /// The ranked view is display-only: the numbers shown by the plain
        /// `list` are the ones `donate --ngo` and `del` accept.
        #[arg(long = "sorted", help = "Rank by total donations (display-only)")]
        sorted: bool,
    },

    /// Add a new NGO
    Add {
        /// NGO name
        name: String,

        /// Cause category (e.g. Environment, Education)
        cause: String,
    },

    /// Delete an NGO by its list number
    Del {
        /// 1-indexed number from the plain `list` output
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Record a donation to an NGO
    Donate {
        /// 1-indexed NGO number from the plain `list` output
        #[arg(long = "ngo")]
        ngo: usize,

        /// Donor name (may be empty)
        #[arg(long = "donor", default_value = "")]
        donor: String,

        /// Donation amount, must be greater than zero
        #[arg(long = "amount", allow_negative_numbers = true)]
        amount: f64,
    },

    /// Search NGOs by cause
    Search {
        /// Cause to match (case-insensitive, exact)
        #[arg(long = "cause")]
        cause: String,
    },

    /// Show or search the donation history
    History {
        /// Only donations by this donor (case-insensitive, exact)
        #[arg(long = "donor")]
        donor: Option<String>,

        /// Only donations to this NGO (case-insensitive, exact)
        #[arg(long = "ngo")]
        ngo: Option<String>,
    },

    /// Render the top-NGO chart without donating
    Chart {
        /// Number of NGOs to chart (default from the configuration)
        #[arg(long = "top")]
        top: Option<usize>,

        /// Write the artifact to this path instead of the configured one
        #[arg(long = "file", value_name = "FILE")]
        file: Option<String>,
    },

    /// Export the donation history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only donations by this donor
        #[arg(long = "donor")]
        donor: Option<String>,

        /// Only donations to this NGO
        #[arg(long = "ngo")]
        ngo: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
