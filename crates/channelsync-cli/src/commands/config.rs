//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use channelsync_core::config::AppConfig;
use channelsync_core::error::AppError;

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
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            if !matches!(config.store.provider.as_str(), "memory" | "redis") {
                let e = AppError::configuration(format!(
                    "Unknown store provider: '{}'",
                    config.store.provider
                ));
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
            channelsync_auth::PasswordHasher::from_config(&config.auth)?;

            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Store", &config.store.provider);
            if config.store.provider == "redis" {
                output::print_kv("Redis", &mask_password(&config.store.redis.url));
            }
            output::print_kv("Log level", &config.logging.level);
        }
    }

    Ok(())
}

/// Mask password in a connection URL for display
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                let mut masked = url[..colon_pos + 1].to_string();
                masked.push_str("****");
                masked.push_str(&url[at_pos..]);
                return masked;
            }
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_password() {
        assert_eq!(
            mask_password("redis://admin:hunter2@db:6379"),
            "redis://admin:****@db:6379"
        );
        assert_eq!(mask_password("redis://db:6379"), "redis://db:6379");
    }
}
