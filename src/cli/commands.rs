//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "berichtsheft")]
#[command(about = "Weekly work report logger (Ausbildungsnachweis)", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a report directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add text to a day's entry, below any existing text
    Add {
        /// Date (YYYY-MM-DD, today, heute)
        date: String,

        /// Entry text; read from stdin until an empty line when omitted
        text: Vec<String>,
    },

    /// Replace a day's entry
    Set {
        /// Date (YYYY-MM-DD, today, heute)
        date: String,

        /// New entry text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Delete a day's entry
    Delete {
        /// Date (YYYY-MM-DD, today, heute)
        date: String,
    },

    /// Show a day's entry
    Show {
        /// Date (YYYY-MM-DD, today, heute)
        #[arg(default_value = "today")]
        date: String,
    },

    /// Print the Monday-Friday overview of a week
    Week {
        /// Any date in the week (default: today)
        date: Option<String>,

        /// Also save the overview as a text file
        #[arg(short, long)]
        save: bool,
    },

    /// Export a week into the report template
    Export {
        /// Any date in the week (default: today)
        date: Option<String>,

        /// Reporter name (default: configured reporter)
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory (default: report directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format to convert to (pdf, odt, docx)
        #[arg(short, long, default_value = "pdf")]
        format: String,

        /// Skip conversion and write the DOCX
        #[arg(long)]
        docx_only: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Interactive menu (default when no command is given)
    Menu,
}
