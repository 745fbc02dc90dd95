//! Homework payload shape checks and verdict formatting
//!
//! The API answer is kept as a raw [`serde_json::Value`]: the shape rules
//! below are what decide whether an answer is usable, and each violation maps
//! to a distinct [`BotError`] kind.

use serde_json::Value;
use std::str::FromStr;

use crate::error::BotError;

/// Review status reported for a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict sent to the chat
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::Value(format!("Неизвестный статус работы - {other}"))),
        }
    }
}

/// Check the API answer against the documented shape and return its
/// homework list, which may be empty.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, BotError> {
    let object = response
        .as_object()
        .ok_or_else(|| BotError::Type("Ошибка в типе ответа API".to_string()))?;

    object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::Type("Homeworks не является списком".to_string()))
}

/// Compose the status-change message for a single homework record.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = match homework.get("homework_name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(BotError::Type(format!(
                "homework_name не является строкой: {other}"
            )))
        }
        None => {
            return Err(BotError::Key(
                "В ответе отсутсвует ключ homework_name".to_string(),
            ))
        }
    };

    let status: HomeworkStatus = match homework.get("status") {
        Some(Value::String(raw)) => raw.parse()?,
        Some(other) => {
            return Err(BotError::Value(format!("Неизвестный статус работы - {other}")))
        }
        None => return Err(BotError::Value("Неизвестный статус работы - None".to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

/// Server-reported timestamp of the answer, used as the next cursor.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
