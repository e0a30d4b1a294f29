use clap::{Parser, Subcommand};

/// CLI arguments for geoseek-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoseek",
    version,
    about = "CLI for querying a countries/states/cities dataset with fuzzy search"
)]
pub struct CliArgs {
    /// Path to the input dataset (.json or .json.gz)
    #[arg(short = 'i', long = "input", global = true, default_value = "countries+states+cities.json.gz")]
    pub input: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Run a fuzzy search query (supports the key:value filter grammar)
    Search {
        /// Free text plus optional filters, e.g. 'paris' or 'georgia type:state'
        query: String,

        /// Maximum number of results to print
        #[arg(short = 'n', long = "max-results", default_value_t = 10)]
        max_results: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Lookup a country by ISO2/ISO3 code or by name
    Country {
        /// ISO2 or ISO3 code (e.g. DE, USA), or a country name
        code: String,
    },

    /// List the recognized search filters
    Filters,
}
