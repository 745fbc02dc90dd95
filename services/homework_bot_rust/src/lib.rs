//! Homework Status Bot Library
//!
//! Polls the Practicum homework-status API and relays review verdicts to a
//! Telegram chat. Exposed as a library so the poll loop can be driven from
//! integration tests.

pub mod config;
pub mod error;
pub mod homework;
pub mod logging;
pub mod poller;
pub mod practicum;
pub mod telegram;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{check_tokens, Config};
pub use error::{BotError, ConfigError, ErrorKind};
pub use homework::{check_response, parse_status, HomeworkStatus};
pub use poller::{HomeworkPoller, IterationOutcome};
pub use practicum::{HomeworkSource, PracticumClient};
pub use telegram::{send_message, Notifier, TelegramClient};
