//! Telegram notification client.
//!
//! Contact form submissions are forwarded as plain-text messages to a
//! configured chat via the Bot API. Delivery is best-effort: callers decide
//! what to do with a failure (the contact endpoint logs and swallows it).

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::Result;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
}

#[derive(Debug, Error)]
enum SendError {
    #[error("Failed to send request to Telegram API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram API error ({status}): {body}")]
    Api { status: StatusCode, body: String },
}

impl SendError {
    /// Network failures and 5xx responses are worth retrying; a 4xx means
    /// the request itself is wrong and will not get better.
    fn is_retryable(&self) -> bool {
        match self {
            SendError::Transport(_) => true,
            SendError::Api { status, .. } => status.is_server_error(),
        }
    }
}

/// Send a plain-text message to the configured chat.
pub async fn send_message(config: &Config, client: &reqwest::Client, text: &str) -> Result<()> {
    let url = format!(
        "{}/bot{}/sendMessage",
        config.telegram_api_base, config.telegram_bot_token
    );

    with_retry_if(
        &RetryConfig::api_call(),
        "telegram send_message",
        || async {
            let request = SendMessageRequest {
                chat_id: config.telegram_chat_id.clone(),
                text: text.to_string(),
            };

            let response = client.post(&url).json(&request).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(SendError::Api { status, body });
            }

            Ok(())
        },
        SendError::is_retryable,
    )
    .await?;

    Ok(())
}
