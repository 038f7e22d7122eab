use serde::{Deserialize, Serialize};

use super::locale::Locale;

const VALUE_MULTIPLIER: i128 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputData {
    pub name: String,
    pub value: i64,
}

impl InputData {
    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputData {
    pub status: Status,
    pub message: String,
    pub processed_value: i128,
}

impl OutputData {
    pub fn from_input(input: &InputData, locale: Locale) -> Self {
        Self {
            status: Status::Success,
            message: format!("{}, {}!", locale.greeting(), input.name),
            processed_value: scale(input.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}

/// Widened to `i128` so every `i64` input scales without overflow.
#[must_use]
pub fn scale(value: i64) -> i128 {
    i128::from(value) * VALUE_MULTIPLIER
}
