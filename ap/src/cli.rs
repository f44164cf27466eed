//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// agentprompts - render typed prompt templates
#[derive(Parser, Debug)]
#[command(name = "ap")]
#[command(author, version, about = "Render typed prompt templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available prompts and their parameters
    List,

    /// Show a prompt's parameter schema and template outline
    Show {
        /// Prompt name (e.g. review-code)
        #[arg(required = true)]
        prompt: String,
    },

    /// Render a prompt from a YAML parameter file
    Render {
        /// Prompt name (e.g. review-code)
        #[arg(required = true)]
        prompt: String,

        /// YAML file with the prompt parameters (omit for prompts without parameters)
        #[arg(short, long)]
        params: Option<PathBuf>,
    },

    /// Render the built-in demonstration scenarios
    Demo,
}
