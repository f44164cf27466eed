//! agentprompts - CLI entry point
//!
//! Lists, inspects, and renders the prompt library.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use agentprompts::cli::{Cli, Command};
use agentprompts::config::Config;
use agentprompts::describe::{field_summary, schema_tree};
use agentprompts::{PromptKind, PromptLibrary, scenarios};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if !config.color {
        colored::control::set_override(false);
    }

    let library = PromptLibrary::new().context("Failed to build prompt library")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::List => cmd_list(),
        Command::Show { prompt } => cmd_show(&library, &prompt),
        Command::Render { prompt, params } => cmd_render(&library, &prompt, params.as_ref()),
        Command::Demo => cmd_demo(&library, &config),
    }
}

fn parse_kind(prompt: &str) -> Result<PromptKind> {
    prompt.parse::<PromptKind>().map_err(|e| eyre!(e))
}

fn cmd_list() -> Result<()> {
    for kind in PromptKind::ALL {
        println!(
            "{:<26} {:<20} {}",
            kind.name().cyan(),
            kind.source_file().dimmed(),
            field_summary(&kind.schema())
        );
    }
    Ok(())
}

fn cmd_show(library: &PromptLibrary, prompt: &str) -> Result<()> {
    let kind = parse_kind(prompt)?;
    let schema = kind.schema();

    println!("{} ({})", schema.name().cyan().bold(), kind.source_file());
    println!("\n{}", "Parameters:".bold());
    if schema.fields().is_empty() {
        println!("  (none)");
    } else {
        print!("{}", schema_tree(&schema));
    }
    println!("\n{}", "Template:".bold());
    println!("{}", library.template(kind));
    Ok(())
}

fn cmd_render(library: &PromptLibrary, prompt: &str, params: Option<&PathBuf>) -> Result<()> {
    let kind = parse_kind(prompt)?;
    let yaml = match params {
        Some(path) => {
            fs::read_to_string(path).context(format!("Failed to read parameters from {}", path.display()))?
        }
        None => String::new(),
    };

    let output = library.render_yaml(kind, &yaml)?;
    print!("{}", output);
    Ok(())
}

fn cmd_demo(library: &PromptLibrary, config: &Config) -> Result<()> {
    println!("{}", "=== AgentFlow Example ===".bold());
    println!("Demonstrating generated prompts from 5 .af template files");
    println!();

    let rule = config.banner.rule();
    for section in scenarios(library).context("Failed to render demo scenarios")? {
        println!("{}", rule.dimmed());
        println!("{}", section.heading().green());
        println!("{}", rule.dimmed());
        println!("{}", section.output);
    }
    Ok(())
}
