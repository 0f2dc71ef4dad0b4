use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::{error::SendError, platform::Platform};

pub(crate) struct TelegramBot {
    send_message_url: Url,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramBot {
    /// Builds `<api_url>/bot<token>/sendMessage`.
    pub(crate) fn new(
        api_url: &Url,
        token: &str,
        chat_id: &str,
    ) -> Result<TelegramBot, SendError> {
        let mut send_message_url = api_url.clone();
        send_message_url
            .path_segments_mut()
            .map_err(|()| SendError::UnusableBaseUrl {
                field: "MESSENGER_TELEGRAM_API_URL",
            })?
            .pop_if_empty()
            .push(&format!("bot{token}"))
            .push("sendMessage");
        Ok(TelegramBot {
            send_message_url,
            chat_id: chat_id.to_owned(),
        })
    }
}

impl Platform for TelegramBot {
    const NAME: &'static str = "Telegram";
    const SUCCESS: StatusCode = StatusCode::OK;

    fn endpoint(&self) -> Url {
        self.send_message_url.clone()
    }

    fn payload<'a>(&'a self, message: &'a str) -> impl Serialize + 'a {
        SendMessage {
            chat_id: &self.chat_id,
            text: message,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use httpmock::prelude::*;
    use reqwest::blocking::Client;

    use super::*;
    use crate::{config::DEFAULT_TELEGRAM_API_URL, platform::deliver};

    fn default_api() -> Url {
        Url::from_str(DEFAULT_TELEGRAM_API_URL).unwrap()
    }

    fn bot(server: &MockServer) -> TelegramBot {
        let api = Url::from_str(&server.base_url()).unwrap();
        TelegramBot::new(&api, "ABC123", "725").unwrap()
    }

    #[test]
    fn send_message_url() {
        let bot = TelegramBot::new(&default_api(), "ABC123", "1").unwrap();
        assert_eq!(
            bot.endpoint().as_str(),
            "https://api.telegram.org/botABC123/sendMessage"
        );

        let api = Url::from_str("http://localhost:8081/tg/").unwrap();
        let bot = TelegramBot::new(&api, "123:xyz", "1").unwrap();
        assert_eq!(
            bot.endpoint().as_str(),
            "http://localhost:8081/tg/bot123:xyz/sendMessage"
        );
    }

    #[test]
    fn opaque_api_url_is_rejected() {
        let api = Url::from_str("mailto:bot@example.com").unwrap();
        let err = TelegramBot::new(&api, "ABC123", "1").err().unwrap();
        assert!(matches!(
            err,
            SendError::UnusableBaseUrl {
                field: "MESSENGER_TELEGRAM_API_URL"
            }
        ));
        assert!(!err.to_string().contains("is not set"));
    }

    #[test]
    fn payload_has_chat_id_then_text() {
        let bot = TelegramBot::new(&default_api(), "ABC123", "725269091").unwrap();
        let json = serde_json::to_string(&bot.payload("hello world")).unwrap();
        assert_eq!(json, r#"{"chat_id":"725269091","text":"hello world"}"#);
    }

    #[test]
    fn ok_is_delivered() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/botABC123/sendMessage")
                .json_body(serde_json::json!({ "chat_id": "725", "text": "hello world" }));
            then.status(200)
                .json_body(serde_json::json!({ "ok": true, "result": {} }));
        });

        deliver(&Client::new(), &bot(&server), "hello world").unwrap();
        mock.assert();
    }

    #[test]
    fn bad_request_is_not_delivered() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/botABC123/sendMessage");
            then.status(400).json_body(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            }));
        });

        let err = deliver(&Client::new(), &bot(&server), "hello world").unwrap_err();
        match &err {
            SendError::Delivery { platform, status, body } => {
                assert_eq!(*platform, "Telegram");
                assert_eq!(status.as_u16(), 400);
                assert!(body.contains("chat not found"));
            }
            other => panic!("expected delivery error, got {other:?}"),
        }
        mock.assert();
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let api = Url::from_str("http://127.0.0.1:1").unwrap();
        let bot = TelegramBot::new(&api, "ABC123", "725").unwrap();
        let err = deliver(&Client::new(), &bot, "hello world").unwrap_err();
        assert!(matches!(err, SendError::Transport { platform: "Telegram", .. }));
        assert!(!err.to_string().contains("ABC123"));
    }
}
