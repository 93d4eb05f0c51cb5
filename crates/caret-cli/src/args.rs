//! Command-line argument definitions for the caret CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each [`Command`] exercises one part of the library.

use clap::{Parser, Subcommand};

/// Command-line arguments for the caret diagnostics tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the line and column of byte offsets in a file
    Locate {
        /// Path to the source file
        input: String,

        /// Byte offsets to resolve
        #[arg(required = true)]
        offsets: Vec<usize>,
    },

    /// Raise a catalog diagnostic at a byte offset in a file
    Raise {
        /// Path to the source file
        input: String,

        /// Byte offset the diagnostic is raised at
        #[arg(long)]
        at: usize,

        /// Catalog code, e.g. VarRedeclaration
        code: String,

        /// Values for the template's %0, %1, ... placeholders
        params: Vec<String>,

        /// Parser plugin required by the rejected syntax (repeatable)
        #[arg(long = "plugin", value_name = "NAME")]
        plugins: Vec<String>,

        /// Machine-readable code attached to the diagnostic
        #[arg(long, value_name = "CODE")]
        error_code: Option<String>,

        /// Record the diagnostic instead of aborting, regardless of config
        #[arg(long)]
        recover: bool,
    },

    /// Show the template for a catalog code, or every template
    Explain {
        /// Catalog code; lists the whole catalog when omitted
        code: Option<String>,
    },
}
