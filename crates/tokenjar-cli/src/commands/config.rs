//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, Field, OutputFormat};
use tokenjar_auth::SessionManager;
use tokenjar_core::config::AppConfig;
use tokenjar_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secret masked)
    Show,
    /// Check that the configuration can back a session manager
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let shown = config.redacted();
            let fields = vec![
                Field::new("environment", shown.environment),
                Field::new("server.host", &shown.server.host),
                Field::new("server.port", shown.server.port),
                Field::new("server.shutdown_grace_seconds", shown.server.shutdown_grace_seconds),
                Field::new("auth.jwt_secret", &shown.auth.jwt_secret),
                Field::new("auth.leeway_seconds", shown.auth.leeway_seconds),
                Field::new("auth.allow_direct_issue", shown.auth.allow_direct_issue),
                Field::new("logging.level", &shown.logging.level),
                Field::new("logging.format", &shown.logging.format),
            ];
            output::print_record(&shown, fields, format);
        }
        ConfigCommand::Validate => {
            SessionManager::new(&config.auth, config.environment)?;
            output::print_success(&format!(
                "Configuration is valid for environment '{}'",
                config.environment
            ));
        }
    }

    Ok(())
}
