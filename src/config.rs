use std::str::FromStr;

use reqwest::Url;

use crate::error::SendError;

pub(crate) const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Credentials for every supported platform, read once at startup.
pub(crate) struct Credentials {
    pub(crate) slack_webhook_url: Option<String>,
    pub(crate) discord_webhook_url: Option<String>,
    pub(crate) telegram_bot_token: Option<String>,
    pub(crate) telegram_chat_id: Option<String>,
    pub(crate) telegram_api_url: Url,
}

impl Credentials {
    pub(crate) fn require_slack(&self) -> Result<Url, SendError> {
        webhook(&self.slack_webhook_url, "SLACK_WEBHOOK_URL")
    }

    pub(crate) fn require_discord(&self) -> Result<Url, SendError> {
        webhook(&self.discord_webhook_url, "DISCORD_WEBHOOK_URL")
    }

    /// Returns the bot token and chat id, in that order.
    pub(crate) fn require_telegram(&self) -> Result<(&str, &str), SendError> {
        let token = non_blank(&self.telegram_bot_token, "TELEGRAM_BOT_TOKEN")?;
        let chat_id = non_blank(&self.telegram_chat_id, "TELEGRAM_CHAT_ID")?;
        Ok((token, chat_id))
    }
}

fn non_blank<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, SendError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SendError::Configuration { field }),
    }
}

fn webhook(value: &Option<String>, field: &'static str) -> Result<Url, SendError> {
    let value = non_blank(value, field)?;
    Url::from_str(value).map_err(|source| SendError::InvalidUrl { field, source })
}
