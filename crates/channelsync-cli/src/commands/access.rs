//! Channel access CLI commands.

use clap::{Args, Subcommand, ValueEnum};

use crate::output;
use channelsync_core::config::AppConfig;
use channelsync_core::error::AppError;
use channelsync_core::types::channel_map::ChannelMap;

/// Arguments for access commands
#[derive(Debug, Args)]
pub struct AccessArgs {
    /// Access subcommand
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// How a channel list is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchMode {
    /// Every channel must be visible
    All,
    /// At least one channel must be visible
    Any,
}

/// Access subcommands
#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// Check a user against a list of channels
    Check {
        /// Username ("" for the guest)
        name: String,
        /// Channel to check (repeatable)
        #[arg(short, long = "channel")]
        channels: Vec<String>,
        /// Matching mode
        #[arg(short, long, value_enum, default_value = "all")]
        mode: MatchMode,
    },
    /// Check a user against a document's channel map
    Doc {
        /// Username ("" for the guest)
        name: String,
        /// Channel map as JSON, e.g. '{"news": null, "old": {"seq": 4, "rev": "2-a"}}'
        #[arg(long)]
        doc_channels: String,
    },
}

/// Execute access commands
pub async fn execute(args: &AccessArgs, config: &AppConfig) -> Result<(), AppError> {
    let auth = super::create_authenticator(config).await?;

    let result = match &args.command {
        AccessCommand::Check {
            name,
            channels,
            mode,
        } => {
            let user = auth.get_user(name).await?;
            match mode {
                MatchMode::All => user.authorize_all_channels(channels),
                MatchMode::Any => user.authorize_any_channels(channels),
            }
        }
        AccessCommand::Doc { name, doc_channels } => {
            let doc: ChannelMap = serde_json::from_str(doc_channels)?;
            let user = auth.get_user(name).await?;
            user.authorize_any_doc_channels(&doc)
        }
    };

    match result {
        Ok(()) => {
            output::print_success("Access granted");
            Ok(())
        }
        Err(e) => {
            output::print_error(&format!("Access denied ({}): {}", e.status_code(), e.message));
            Err(e)
        }
    }
}
