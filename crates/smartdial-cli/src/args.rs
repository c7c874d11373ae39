use clap::{Parser, Subcommand};

/// CLI arguments for smartdial-cli
#[derive(Debug, Parser)]
#[command(
    name = "smartdial",
    version,
    about = "Match dialpad (T9) queries against contact names and phone numbers"
)]
pub struct CliArgs {
    /// ISO2 country of the user (e.g. US, DE); enables NANP handling for NANP countries
    #[arg(short = 'c', long = "country", global = true)]
    pub country: Option<String>,

    /// Treat numbers as NANP (area code handling) regardless of --country
    #[arg(long = "nanp", global = true)]
    pub nanp: bool,

    /// Path to a JSON matcher configuration (missing fields keep their defaults)
    #[arg(long = "config", global = true)]
    pub config: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the keypad digit tokens of a name
    Tokens {
        /// Display name (quote it if it contains spaces)
        name: String,
    },

    /// List the digit strings under which a name can be found
    Prefixes {
        /// Display name
        name: String,
    },

    /// Show calling code, area code and digit prefixes of a phone number
    Number {
        /// Raw phone number, formatting allowed (e.g. "+1 (555) 123-4567")
        number: String,
    },

    /// Match a query against a name and/or a phone number
    Match {
        /// Dialpad query; non-digits are ignored
        query: String,

        /// Display name to match
        #[arg(short = 'n', long = "name")]
        name: Option<String>,

        /// Phone number to match
        #[arg(short = 'p', long = "number")]
        number: Option<String>,
    },

    /// Search a contact list file (JSON array, optionally .json.gz)
    Search {
        /// Dialpad query; non-digits are ignored
        query: String,

        /// Path to the contact list
        #[arg(short = 'f', long = "contacts")]
        contacts: String,

        /// Print at most this many hits
        #[arg(short = 'l', long = "limit")]
        limit: Option<usize>,
    },
}
