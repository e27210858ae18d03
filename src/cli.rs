use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "belt")]
#[command(author, version, about = "Quick utilities for command-line programs", long_about = None)]
pub struct Cli {
    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Environment file with BELT_* settings
    #[arg(long, default_value = ".env", global = true)]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print whether NEEDLE is one of ITEMS
    Contains {
        needle: String,

        #[arg(allow_hyphen_values = true)]
        items: Vec<String>,
    },

    /// Print whether VALUE starts with any of PREFIXES
    HasPrefix {
        value: String,

        #[arg(allow_hyphen_values = true)]
        prefixes: Vec<String>,
    },

    /// Print whether VALUE ends with any of SUFFIXES
    HasSuffix {
        value: String,

        #[arg(allow_hyphen_values = true)]
        suffixes: Vec<String>,
    },

    /// Exit with status 1 if an error is given
    Check {
        /// Error message to fail with
        #[arg(long)]
        error: Option<String>,

        /// Context to wrap the error in
        #[arg(long, hide = true, requires = "error")]
        context: Option<String>,
    },

    /// Write a debug line (only shown with -v or BELT_VERBOSE=true)
    Debug {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

impl Cli {
    pub fn get_log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            3 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
