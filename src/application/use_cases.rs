use crate::domain::locale::Locale;
use crate::domain::payload::{ErrorResponse, InputData, OutputData};

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    MissingArgument,
    Parse(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingArgument => write!(f, "no input argument supplied"),
            AppError::Parse(msg) => write!(f, "invalid input json: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl AppError {
    pub fn to_response(&self, locale: Locale) -> ErrorResponse {
        match self {
            AppError::MissingArgument => ErrorResponse::new(locale.missing_input()),
            AppError::Parse(detail) => ErrorResponse::new(locale.parse_failure(detail)),
        }
    }
}

/// Decodes the first argument and derives the response. Extra arguments are ignored.
pub fn process(args: &[String], locale: Locale) -> Result<OutputData, AppError> {
    let raw = args.first().ok_or(AppError::MissingArgument)?;
    let input = InputData::decode(raw)?;
    Ok(OutputData::from_input(&input, locale))
}
