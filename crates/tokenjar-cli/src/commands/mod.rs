//! CLI command definitions and dispatch.

pub mod config;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use tokenjar_core::config::{AppConfig, Environment};
use tokenjar_core::error::AppError;

/// TokenJar — signed, cookie-carried sessions
#[derive(Debug, Parser)]
#[command(name = "tokenjar", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to the config/ directory layering)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Environment name; falls back to TOKENJAR_ENV, then development
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Issue and inspect session tokens
    Token(token::TokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }

    /// Load configuration from `--config` or the default layering.
    fn load_config(&self) -> Result<AppConfig, AppError> {
        let env = match &self.env {
            Some(name) => name.parse()?,
            None => Environment::from_env()?,
        };

        match &self.config {
            Some(path) => AppConfig::load_from_file(path, env),
            None => AppConfig::load(env),
        }
    }
}
