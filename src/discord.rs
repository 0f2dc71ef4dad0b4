use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::platform::Platform;

pub(crate) struct DiscordWebhook {
    url: Url,
}

#[derive(Serialize)]
struct DiscordPayload<'a> {
    content: &'a str,
}

impl DiscordWebhook {
    pub(crate) fn new(url: Url) -> DiscordWebhook {
        DiscordWebhook { url }
    }
}

impl Platform for DiscordWebhook {
    const NAME: &'static str = "Discord";
    // Discord webhooks answer 204 unless `?wait=true` is set
    const SUCCESS: StatusCode = StatusCode::NO_CONTENT;

    fn endpoint(&self) -> Url {
        self.url.clone()
    }

    fn payload<'a>(&'a self, message: &'a str) -> impl Serialize + 'a {
        DiscordPayload { content: message }
    }
}
