use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::platform::Platform;

pub(crate) struct SlackApp {
    webhook: Url,
}

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

impl SlackApp {
    pub(crate) fn new(webhook: Url) -> SlackApp {
        SlackApp { webhook }
    }
}

impl Platform for SlackApp {
    const NAME: &'static str = "Slack";
    const SUCCESS: StatusCode = StatusCode::OK;

    fn endpoint(&self) -> Url {
        self.webhook.clone()
    }

    fn payload<'a>(&'a self, message: &'a str) -> impl Serialize + 'a {
        SlackPayload { text: message }
    }
}
