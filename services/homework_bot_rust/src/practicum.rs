//! Practicum homework-status API client

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::error::BotError;

/// Source of homework status answers, polled once per iteration
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch every status change since `from_date` (Unix seconds).
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError>;
}

#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("homework-bot/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!("Homework API request failed: {}", e);
                BotError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = BotError::InvalidResponseCode {
                endpoint: self.endpoint.clone(),
                status,
            };
            error!("{}", err);
            return Err(err);
        }

        response.json::<Value>().await.map_err(|e| {
            error!("Homework API returned an undecodable body: {}", e);
            BotError::EmptyResponse(format!("не удалось разобрать ответ API: {e}"))
        })
    }
}
