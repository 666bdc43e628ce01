//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use channelsync_auth::{User, UserUpdate};
use channelsync_core::config::AppConfig;
use channelsync_core::error::AppError;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create or replace a user
    Save {
        /// Username ("" for the guest)
        name: String,
        /// Password (will prompt if not provided; ignored for the guest)
        #[arg(short, long)]
        password: Option<String>,
        /// Channel the user may access (repeatable, "*" for all)
        #[arg(short, long = "channel")]
        channels: Vec<String>,
    },
    /// Show a user
    Show {
        /// Username
        name: String,
    },
    /// Delete a user
    Delete {
        /// Username
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Change a user's password
    SetPassword {
        /// Username
        name: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Add channels to a user
    Grant {
        /// Username
        name: String,
        /// Channels to add
        #[arg(required = true)]
        channels: Vec<String>,
    },
    /// Remove channels from a user
    Revoke {
        /// Username
        name: String,
        /// Channels to remove
        #[arg(required = true)]
        channels: Vec<String>,
    },
    /// Check a username and password
    Authenticate {
        /// Username
        name: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// Username
    name: String,
    /// Whether a credential is set
    has_password: bool,
    /// Channels
    channels: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: if user.is_anonymous() {
                "(guest)".to_string()
            } else {
                user.name.clone()
            },
            has_password: user.credential.is_some(),
            channels: user.channels.join(", "),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let auth = super::create_authenticator(config).await?;

    match &args.command {
        UserCommand::Save {
            name,
            password,
            channels,
        } => {
            let password = if name.is_empty() {
                String::new()
            } else {
                super::read_password(password, "Password", true)?
            };
            let user = User {
                name: name.clone(),
                credential: None,
                channels: channels.clone(),
            };
            let saved = auth
                .save_user(UserUpdate::with_password(user, password))
                .await?;
            output::print_success(&format!("User '{}' saved", saved.name));
            output::print_list(&[UserRow::from(&saved)], format);
        }
        UserCommand::Show { name } => {
            let user = auth.get_user(name).await?;
            output::print_list(&[UserRow::from(&user)], format);
        }
        UserCommand::Delete { name, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user '{}'?", name))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            auth.delete_user(name).await?;
            output::print_success(&format!("User '{}' deleted", name));
        }
        UserCommand::SetPassword { name, password } => {
            let user = auth.get_user(name).await?;
            let password = super::read_password(password, "New password", true)?;
            auth.save_user(UserUpdate::with_password(user, password))
                .await?;
            output::print_success(&format!("Password changed for '{}'", name));
        }
        UserCommand::Grant { name, channels } => {
            let mut user = auth.get_user(name).await?;
            for channel in channels {
                if !user.has_channel(channel) {
                    user.channels.push(channel.clone());
                }
            }
            let saved = auth.save_user(user).await?;
            output::print_list(&[UserRow::from(&saved)], format);
        }
        UserCommand::Revoke { name, channels } => {
            let mut user = auth.get_user(name).await?;
            user.channels.retain(|c| !channels.contains(c));
            let saved = auth.save_user(user).await?;
            output::print_list(&[UserRow::from(&saved)], format);
        }
        UserCommand::Authenticate { name, password } => {
            let password = super::read_password(password, "Password", false)?;
            match auth.authenticate_user(name, &password).await {
                Some(user) => {
                    output::print_success(&format!("Authenticated as '{}'", user.name));
                }
                None => {
                    output::print_error("Invalid username or password");
                    return Err(AppError::unauthorized("Authentication failed"));
                }
            }
        }
    }

    Ok(())
}
