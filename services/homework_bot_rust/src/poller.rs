//! Poll loop: fetch, validate, parse, notify if changed, sleep
//!
//! One [`HomeworkPoller`] owns the cursor and the last delivered message.
//! Every iteration runs to completion before the next begins; failures are
//! caught at the iteration boundary and relayed to the chat as alerts, so
//! the loop itself never ends.

use chrono::Utc;
use log::{debug, error, info};
use std::time::Duration;

use crate::error::BotError;
use crate::homework::{check_response, current_date, parse_status};
use crate::practicum::HomeworkSource;
use crate::telegram::{send_message, Notifier};

/// What a single iteration ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// A new message was handed to the notifier
    Notified(String),
    /// The composed message matched the previous one
    Unchanged,
    /// The API reported no new statuses
    NoUpdates,
}

pub struct HomeworkPoller<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
    cursor: i64,
    last_message: Option<String>,
}

impl<S: HomeworkSource, N: Notifier> HomeworkPoller<S, N> {
    /// Start polling from the current time.
    pub fn new(source: S, notifier: N, retry_period: Duration) -> Self {
        Self::with_cursor(source, notifier, retry_period, Utc::now().timestamp())
    }

    pub fn with_cursor(source: S, notifier: N, retry_period: Duration, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            cursor,
            last_message: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Run forever. The process is expected to be stopped externally.
    pub async fn run(mut self) {
        info!(
            "Polling homework statuses every {}s from cursor {}",
            self.retry_period.as_secs(),
            self.cursor
        );
        loop {
            if let Ok(outcome) = self.run_iteration().await {
                debug!("Iteration finished: {:?}", outcome);
            }
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One full iteration. A failure is relayed as an alert before it is returned.
    pub async fn run_iteration(&mut self) -> Result<IterationOutcome, BotError> {
        match self.poll_once().await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!("Iteration failed: {}", err);
                self.notify_if_changed(err.alert_message()).await;
                Err(err)
            }
        }
    }

    async fn poll_once(&mut self) -> Result<IterationOutcome, BotError> {
        let response = self.source.get_api_answer(self.cursor).await?;
        let homeworks = check_response(&response)?;

        let outcome = match homeworks.first() {
            Some(homework) => {
                let message = parse_status(homework)?;
                self.notify_if_changed(message).await
            }
            None => {
                debug!("No new homework statuses");
                IterationOutcome::NoUpdates
            }
        };

        if let Some(next) = current_date(&response) {
            self.cursor = next;
        }
        Ok(outcome)
    }

    async fn notify_if_changed(&mut self, message: String) -> IterationOutcome {
        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("Message unchanged, not resending");
            return IterationOutcome::Unchanged;
        }
        send_message(&self.notifier, &message).await;
        self.last_message = Some(message.clone());
        IterationOutcome::Notified(message)
    }
}
