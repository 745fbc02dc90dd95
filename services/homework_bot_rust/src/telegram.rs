use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outbound chat channel for status and failure messages
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}

/// Deliver `message`, logging the outcome. Failures never propagate.
pub async fn send_message<N: Notifier + ?Sized>(notifier: &N, message: &str) {
    match notifier.send(message).await {
        Ok(()) => debug!("Message sent: {}", message),
        Err(e) => error!("Failed to send message: {:#}", e),
    }
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(base_url: String, token: String, chat_id: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url,
            token,
            chat_id,
        })
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send(&self, message: &str) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token
        );
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text: message,
        };

        // The URL embeds the bot token, so it stays out of error context.
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Telegram API request failed: {}", e.without_url()))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("Telegram API non-2xx: {status} body={text}");
        }

        let parsed: SendMessageResponse =
            serde_json::from_str(&text).context("Failed to parse Telegram response")?;
        if !parsed.ok {
            anyhow::bail!(
                "Telegram API rejected message: {}",
                parsed.description.unwrap_or_else(|| "unknown".to_string())
            );
        }
        Ok(())
    }
}
