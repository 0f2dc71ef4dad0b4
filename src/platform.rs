use reqwest::{StatusCode, Url, blocking::Client, header::CONTENT_TYPE};
use serde::Serialize;

use crate::error::SendError;

const MAX_BODY_EXCERPT: usize = 200;

/// A chat platform reachable with a single JSON POST.
pub(crate) trait Platform {
    const NAME: &'static str;
    /// The only status code treated as delivered.
    const SUCCESS: StatusCode;

    fn endpoint(&self) -> Url;

    fn payload<'a>(&'a self, message: &'a str) -> impl Serialize + 'a;
}

pub(crate) fn deliver<P: Platform>(
    client: &Client,
    platform: &P,
    message: &str,
) -> Result<(), SendError> {
    let body = serde_json::to_vec(&platform.payload(message)).map_err(|source| {
        SendError::Encoding {
            platform: P::NAME,
            source,
        }
    })?;

    let endpoint = platform.endpoint();
    // Webhook paths and bot tokens are secrets, only the host goes to the log
    tracing::debug!(
        platform = P::NAME,
        host = endpoint.host_str().unwrap_or_default(),
        bytes = body.len(),
        "Posting message"
    );

    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .map_err(|source| {
            // reqwest renders the full URL, which carries the secret
            let source = source.without_url();
            tracing::debug!(platform = P::NAME, "Request failed: {source}");
            SendError::Transport {
                platform: P::NAME,
                source,
            }
        })?;

    let status = response.status();
    if status == P::SUCCESS {
        tracing::debug!(platform = P::NAME, %status, "Message delivered");
        return Ok(());
    }

    let body = match response.text() {
        Ok(text) => excerpt(&text),
        Err(err) => {
            let err = err.without_url();
            tracing::debug!(platform = P::NAME, "Unable to read response body: {err}");
            String::new()
        }
    };
    tracing::debug!(platform = P::NAME, %status, "Unexpected response status");
    Err(SendError::Delivery {
        platform: P::NAME,
        status,
        body,
    })
}

fn excerpt(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_owned(),
    }
}
