use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cheatbank")]
#[command(about = "A uniqueness-checked cheatsheet collection for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the cheatsheet data file (overrides the stored preference)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a cheatsheet
    #[command(alias = "a")]
    Add {
        /// Title of the cheatsheet
        title: String,

        /// Content fragments
        #[arg(short, long = "content")]
        contents: Vec<String>,

        /// Tags (alphanumeric, repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Delete the cheatsheet at the given displayed index
    #[command(alias = "rm")]
    Delete {
        /// 1-based index into the displayed list
        index: String,
    },

    /// List cheatsheets
    #[command(alias = "ls")]
    List,

    /// List cheatsheets whose titles contain any keyword
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// Remove every cheatsheet
    Clear,

    /// Run a raw command line ("add t/TITLE tag/TAG", "delete 1", ...)
    Exec {
        #[arg(required = true, num_args = 1..)]
        line: Vec<String>,
    },
}
