use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    /// Path to the settings file.
    #[clap(long, env = "GEOSTAMP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// OpenCage API key, overrides the one from the settings file.
    #[clap(long, env = "OPENCAGE_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Attach the current location to a note.
    Add {
        /// Note to stamp.
        path: PathBuf,

        /// Overwrite existing location data without asking.
        #[clap(long)]
        force: bool,
    },

    /// Attach the current location to newly created notes inside the auto-add folders.
    ///
    /// Notes outside the configured folders, and notes that already carry location
    /// data, are skipped. Intended to be called from an editor or file-creation hook.
    #[clap(alias = "auto")]
    AutoAdd {
        /// Newly created notes.
        paths: Vec<PathBuf>,
    },

    /// Fetch the current location and print it.
    #[clap(alias = "test")]
    Locate,
}
