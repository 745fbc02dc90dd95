//! Error types for the polling loop
//!
//! Every failure inside a single poll iteration is a [`BotError`]. The loop
//! catches it at the iteration boundary and turns it into a chat alert, so
//! none of these are fatal. [`ConfigError`] is the only startup failure.

use reqwest::StatusCode;

/// Coarse classification used when composing alert text and in tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidResponseCode,
    EmptyResponse,
    Key,
    Type,
    Value,
}

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The homework API answered with something other than 200 OK
    #[error("{endpoint} недоступен. Код ответа API: {}", .status.as_u16())]
    InvalidResponseCode { endpoint: String, status: StatusCode },

    /// Transport failure or a body that could not be decoded
    #[error("Ошибка при запросе к основному API: {0}")]
    EmptyResponse(String),

    /// A required field is missing from a homework record
    #[error("{0}")]
    Key(String),

    /// The payload does not have the documented shape
    #[error("{0}")]
    Type(String),

    /// A field holds a value outside the known set
    #[error("{0}")]
    Value(String),
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::InvalidResponseCode { .. } => ErrorKind::InvalidResponseCode,
            BotError::EmptyResponse(_) => ErrorKind::EmptyResponse,
            BotError::Key(_) => ErrorKind::Key,
            BotError::Type(_) => ErrorKind::Type,
            BotError::Value(_) => ErrorKind::Value,
        }
    }

    /// Text forwarded to the chat when this error ends an iteration.
    pub fn alert_message(&self) -> String {
        match self {
            BotError::Key(detail) => {
                format!("Сбой в работе программы, не найден ключ: {detail}")
            }
            other => format!("Сбой в работе программы: {other}"),
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::EmptyResponse(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    #[error("invalid {key}: {value} (expected {expected})")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_code_message() {
        let err = BotError::InvalidResponseCode {
            endpoint: "https://example.test/api/".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidResponseCode);
        assert_eq!(
            err.to_string(),
            "https://example.test/api/ недоступен. Код ответа API: 503"
        );
    }

    #[test]
    fn test_invalid_response_code_alert_shows_bare_code() {
        let err = BotError::InvalidResponseCode {
            endpoint: "E".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.alert_message(),
            "Сбой в работе программы: E недоступен. Код ответа API: 404"
        );
    }

    #[test]
    fn test_key_alert_uses_dedicated_wording() {
        let err = BotError::Key("В ответе отсутсвует ключ homework_name".to_string());
        assert_eq!(
            err.alert_message(),
            "Сбой в работе программы, не найден ключ: В ответе отсутсвует ключ homework_name"
        );
    }

    #[test]
    fn test_other_alerts_share_generic_wording() {
        let err = BotError::Value("Неизвестный статус работы - lost".to_string());
        assert_eq!(
            err.alert_message(),
            "Сбой в работе программы: Неизвестный статус работы - lost"
        );
    }

    #[test]
    fn test_missing_tokens_lists_names() {
        let err = ConfigError::MissingTokens(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
