use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mrkdwn")]
#[command(about = "Render markdown into an HTML page with a table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to mrkdwn.toml/.yml/.yaml/.json in the current directory)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve rendered markdown over HTTP
    #[command(alias = "s")]
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Render a markdown file (or stdin) once
    #[command(alias = "r")]
    Render {
        /// Markdown file to render, `-` or nothing for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print the rendered HTML and table of contents as JSON instead of a page
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
