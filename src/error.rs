use std::process::ExitCode;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SendError {
    #[error("{field} is not set.")]
    Configuration { field: &'static str },

    #[error("{field} cannot be used as a base URL.")]
    UnusableBaseUrl { field: &'static str },

    #[error("{field} is not a valid URL: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("unable to encode {platform} payload: {source}")]
    Encoding {
        platform: &'static str,
        source: serde_json::Error,
    },

    #[error("request to {platform} failed: {source}")]
    Transport {
        platform: &'static str,
        source: reqwest::Error,
    },

    #[error("failed to send message to {platform}, status code: {}{}", .status.as_u16(), body_suffix(.body))]
    Delivery {
        platform: &'static str,
        status: StatusCode,
        body: String,
    },
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" ({body})")
    }
}

impl SendError {
    /// Process exit code for this failure. 2 is left to clap usage errors.
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            SendError::Configuration { .. }
            | SendError::UnusableBaseUrl { .. }
            | SendError::InvalidUrl { .. } => 3,
            SendError::Encoding { .. } => 4,
            SendError::Transport { .. } => 5,
            SendError::Delivery { .. } => 6,
        }
    }
}
