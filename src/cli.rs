use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinematch")]
#[command(author, version, about = "Resolve movie titles to a single OMDb record")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one movie by title or IMDb ID
    Resolve {
        /// Movie title to search for
        #[arg(short, long, required_unless_present = "imdb_id")]
        title: Option<String>,

        /// IMDb ID (e.g. tt0111161); takes precedence over the title
        #[arg(short, long)]
        imdb_id: Option<String>,

        /// Release year
        #[arg(short, long)]
        year: Option<String>,

        /// Language code (defaults to the configured default language)
        #[arg(short, long)]
        language: Option<String>,

        /// Pretty-print the JSON record
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve every query listed in a TOML file
    Batch {
        /// File containing [[query]] entries
        #[arg(required = true)]
        file: PathBuf,

        /// Maximum number of resolutions in flight
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
