//! CLI command definitions and dispatch.

pub mod access;
pub mod config;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::{self, OutputFormat};
use channelsync_auth::{Authenticator, PasswordHasher};
use channelsync_core::config::AppConfig;
use channelsync_core::error::AppError;
use channelsync_store::StoreManager;

/// Channelsync: user identity and channel access administration
#[derive(Debug, Parser)]
#[command(name = "channelsync", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

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
    /// User management
    User(user::UserArgs),
    /// Channel access checks
    Access(access::AccessArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::User(args) => user::execute(args, app_config, self.format).await,
            Commands::Access(args) => access::execute(args, app_config).await,
            Commands::Config(args) => {
                config::execute(args, app_config, &self.config, self.format)
            }
        }
    }
}

/// Helper: build the authenticator over the configured store
pub async fn create_authenticator(config: &AppConfig) -> Result<Authenticator, AppError> {
    let store = StoreManager::new(&config.store).await?;
    if config.store.provider == "memory" {
        output::print_warning("Using the in-memory store; records are discarded on exit");
    }
    let hasher = PasswordHasher::from_config(&config.auth)?;
    Ok(Authenticator::new(store.store(), Arc::new(hasher)))
}

/// Helper: password from the flag, or an interactive prompt
pub fn read_password(
    password: &Option<String>,
    prompt: &str,
    confirm: bool,
) -> Result<String, AppError> {
    if let Some(p) = password {
        return Ok(p.clone());
    }
    let mut input = dialoguer::Password::new().with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }
    input
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}
