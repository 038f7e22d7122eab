use crate::domain::payload::{ErrorResponse, OutputData};

#[derive(Debug)]
pub enum WriteError {
    Serialize(String),
    Io(String),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Serialize(msg) => write!(f, "cannot serialize response: {msg}"),
            WriteError::Io(msg) => write!(f, "cannot write response: {msg}"),
        }
    }
}

impl std::error::Error for WriteError {}

pub trait ResponseWriter {
    fn write_success(&self, output: &OutputData) -> Result<(), WriteError>;
    fn write_error(&self, error: &ErrorResponse) -> Result<(), WriteError>;
}
