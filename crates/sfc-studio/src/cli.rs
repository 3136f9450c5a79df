//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit Vue component props, styles and starter templates
#[derive(Parser, Debug, Clone)]
#[command(name = "sfc-studio")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Path to sfc-studio.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Template store: an http(s) URL or a directory
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the props declared by a component
    Props {
        /// Component file
        file: PathBuf,
    },

    /// List the style blocks of a component
    Styles {
        /// Component file
        file: PathBuf,
    },

    /// Show props and style blocks together
    Inspect {
        /// Component file
        file: PathBuf,
    },

    /// Change the default value of a prop
    SetDefault {
        /// Component file
        file: PathBuf,
        /// Prop name
        prop: String,
        /// New default value
        value: String,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Replace the style blocks with the contents of CSS files
    SetStyles {
        /// Component file
        file: PathBuf,
        /// One CSS file per style block
        #[arg(required = true)]
        css: Vec<PathBuf>,
        /// Mark every new block as scoped
        #[arg(long)]
        scoped: bool,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Work with starter templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplateCommand {
    /// List the built-in templates
    List,
    /// Print the code of a built-in template
    Show {
        /// Template name
        name: String,
    },
    /// Load a template from the configured store
    Load {
        /// Template identifier, e.g. `basic`
        identifier: String,
    },
    /// Print the default template's code from the configured store
    Default,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
