use std::str::FromStr;

use clap::{Parser, Subcommand};
use reqwest::{Url, blocking::Client};

use crate::{
    config::{Credentials, DEFAULT_TELEGRAM_API_URL},
    discord::DiscordWebhook,
    error::SendError,
    platform::{Platform, deliver},
    slack::SlackApp,
    telegram::TelegramBot,
};

/// CLI Messenger Center to send messages to Slack, Telegram, and Discord
#[derive(Parser)]
#[command(name = "messenger", version)]
pub(crate) struct Cli {
    /// Slack incoming webhook URL
    #[arg(long, global = true, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub(crate) slack_webhook_url: Option<String>,
    /// Discord webhook URL
    #[arg(long, global = true, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub(crate) discord_webhook_url: Option<String>,
    /// Telegram bot token
    #[arg(long, global = true, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub(crate) telegram_bot_token: Option<String>,
    /// Telegram chat ID to deliver to
    #[arg(long, global = true, env = "TELEGRAM_CHAT_ID")]
    pub(crate) telegram_chat_id: Option<String>,
    /// Base URL of the Telegram Bot API
    #[arg(
        long,
        global = true,
        hide = true,
        value_parser(Url::from_str),
        env = "MESSENGER_TELEGRAM_API_URL",
        default_value = DEFAULT_TELEGRAM_API_URL
    )]
    pub(crate) telegram_api_url: Url,
    /// Log request details to stderr
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Send a message to Discord
    Discord {
        /// Message to send
        message: String,
    },
    /// Send a message to Slack
    Slack {
        /// Message to send
        message: String,
    },
    /// Send a message to Telegram
    Telegram {
        /// Message to send
        message: String,
    },
}

impl Cli {
    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            slack_webhook_url: self.slack_webhook_url.clone(),
            discord_webhook_url: self.discord_webhook_url.clone(),
            telegram_bot_token: self.telegram_bot_token.clone(),
            telegram_chat_id: self.telegram_chat_id.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
        }
    }

    /// Sends the message and returns the platform it went to.
    pub(crate) fn run(&self) -> Result<&'static str, SendError> {
        let creds = self.credentials();
        let client = Client::new();
        match &self.command {
            Command::Discord { message } => {
                let webhook = DiscordWebhook::new(creds.require_discord()?);
                send(&client, &webhook, message)
            }
            Command::Slack { message } => {
                let app = SlackApp::new(creds.require_slack()?);
                send(&client, &app, message)
            }
            Command::Telegram { message } => {
                let (token, chat_id) = creds.require_telegram()?;
                let bot = TelegramBot::new(&creds.telegram_api_url, token, chat_id)?;
                send(&client, &bot, message)
            }
        }
    }
}

fn send<P: Platform>(
    client: &Client,
    platform: &P,
    message: &str,
) -> Result<&'static str, SendError> {
    deliver(client, platform, message).map(|()| P::NAME)
}
